//! Magnets: place two-cell magnets or blanks on a grid of fixed slots.
//!
//! Every slot spans two cells and holds either a magnet (one `+` and one `-`
//! end) or two blanks. Like poles may not touch orthogonally, and each row and
//! column must carry the required number of `+` and `-` cells.
//!
//! Description format:
//! ```text
//! rows cols
//! + count per row
//! + count per column
//! - count per row
//! - count per column
//! rows lines of slot halves: L R (left/right) or T B (top/bottom)
//! ```
//! A count of `-1` leaves that row or column unconstrained.

use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use crate::configuration::{Children, PartialConfiguration};
use crate::error::PuzzleError;
use crate::puzzles::{board_cells, parse_number, Lines};

/// Count shown and parsed for an unconstrained row or column.
const IGNORED: i32 = -1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Not assigned yet
    Empty,
    Blank,
    Positive,
    Negative,
}

impl Cell {
    /// Assignment order for every cell.
    pub const CANDIDATES: [Cell; 3] = [Cell::Positive, Cell::Negative, Cell::Blank];

    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Blank => 'X',
            Cell::Positive => '+',
            Cell::Negative => '-',
        }
    }

    fn is_pole(self) -> bool {
        matches!(self, Cell::Positive | Cell::Negative)
    }
}

/// Which half of a slot a cell is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pair {
    Left,
    Right,
    Top,
    Bottom,
}

impl Pair {
    fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "L" => Some(Pair::Left),
            "R" => Some(Pair::Right),
            "T" => Some(Pair::Top),
            "B" => Some(Pair::Bottom),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Pair::Left => 'L',
            Pair::Right => 'R',
            Pair::Top => 'T',
            Pair::Bottom => 'B',
        }
    }
}

/// The fixed part of a puzzle, shared by every configuration.
#[derive(Debug, PartialEq, Eq)]
struct Board {
    rows: usize,
    cols: usize,
    pos_rows: Vec<Option<usize>>,
    pos_cols: Vec<Option<usize>>,
    neg_rows: Vec<Option<usize>>,
    neg_cols: Vec<Option<usize>>,
    /// Row-major
    pairs: Vec<Pair>,
}

impl Board {
    fn pair(&self, row: usize, col: usize) -> Pair {
        self.pairs[row * self.cols + col]
    }

    /// Every `L` needs an `R` to its right and every `T` a `B` below, and
    /// the other way round.
    fn check_pairs(&self) -> Result<(), PuzzleError> {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let partner = match self.pair(row, col) {
                    Pair::Left => col + 1 < self.cols && self.pair(row, col + 1) == Pair::Right,
                    Pair::Right => col > 0 && self.pair(row, col - 1) == Pair::Left,
                    Pair::Top => row + 1 < self.rows && self.pair(row + 1, col) == Pair::Bottom,
                    Pair::Bottom => row > 0 && self.pair(row - 1, col) == Pair::Top,
                };
                if !partner {
                    return Err(PuzzleError::Layout(format!(
                        "slot half at ({row}, {col}) has no matching partner"
                    )));
                }
            }
        }
        Ok(())
    }
}

/// A partially filled magnets board. The cursor is the most recently filled
/// cell; filling proceeds row by row, left to right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MagnetsConfig {
    board: Arc<Board>,
    /// Row-major
    cells: Vec<Cell>,
    cursor: Option<(usize, usize)>,
}

impl MagnetsConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, PuzzleError> {
        std::fs::read_to_string(path)?.parse()
    }

    pub fn rows(&self) -> usize {
        self.board.rows
    }

    pub fn cols(&self) -> usize {
        self.board.cols
    }

    pub fn pair(&self, row: usize, col: usize) -> Pair {
        self.board.pair(row, col)
    }

    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.board.cols + col]
    }

    /// The last filled cell, or `None` before the first assignment.
    pub fn cursor(&self) -> Option<(usize, usize)> {
        self.cursor
    }

    fn next_cursor(&self) -> Option<(usize, usize)> {
        match self.cursor {
            None if self.cells.is_empty() => None,
            None => Some((0, 0)),
            Some((row, col)) if col + 1 < self.board.cols => Some((row, col + 1)),
            Some((row, _)) if row + 1 < self.board.rows => Some((row + 1, 0)),
            Some(_) => None,
        }
    }

    fn with_cell(&self, at: (usize, usize), value: Cell) -> Self {
        let mut cells = self.cells.clone();
        cells[at.0 * self.board.cols + at.1] = value;
        Self {
            board: Arc::clone(&self.board),
            cells,
            cursor: Some(at),
        }
    }

    /// The other half of the slot at (row, col), if already filled.
    fn partner(&self, row: usize, col: usize) -> Cell {
        match self.board.pair(row, col) {
            Pair::Right => self.cell(row, col - 1),
            Pair::Bottom => self.cell(row - 1, col),
            // Filling runs left to right, top to bottom
            Pair::Left | Pair::Top => Cell::Empty,
        }
    }

    fn touches_like_pole(&self, row: usize, col: usize, value: Cell) -> bool {
        let rows = self.board.rows;
        let cols = self.board.cols;
        (col > 0 && self.cell(row, col - 1) == value)
            || (col + 1 < cols && self.cell(row, col + 1) == value)
            || (row > 0 && self.cell(row - 1, col) == value)
            || (row + 1 < rows && self.cell(row + 1, col) == value)
    }

    fn count_in_row(&self, row: usize, upto_col: usize, value: Cell) -> usize {
        (0..=upto_col).filter(|&col| self.cell(row, col) == value).count()
    }

    fn count_in_col(&self, col: usize, upto_row: usize, value: Cell) -> usize {
        (0..=upto_row).filter(|&row| self.cell(row, col) == value).count()
    }
}

/// Below the limit while the line is open, exactly on it once it is complete.
fn within(limit: Option<usize>, count: usize, complete: bool) -> bool {
    match limit {
        None => true,
        Some(limit) if complete => count == limit,
        Some(limit) => count <= limit,
    }
}

impl PartialConfiguration for MagnetsConfig {
    fn is_valid(&self) -> bool {
        let Some((row, col)) = self.cursor else {
            return true;
        };
        let board = &self.board;
        let value = self.cell(row, col);
        let partner = self.partner(row, col);

        let opposite = matches!(
            (value, partner),
            (Cell::Positive, Cell::Negative) | (Cell::Negative, Cell::Positive)
        );
        if (value.is_pole() && partner == Cell::Empty) || opposite {
            if self.touches_like_pole(row, col, value) {
                return false;
            }
        } else if value != Cell::Blank || !matches!(partner, Cell::Blank | Cell::Empty) {
            return false;
        }

        let row_done = col + 1 == board.cols;
        if !within(
            board.pos_rows[row],
            self.count_in_row(row, col, Cell::Positive),
            row_done,
        ) || !within(
            board.neg_rows[row],
            self.count_in_row(row, col, Cell::Negative),
            row_done,
        ) {
            return false;
        }

        let col_done = row + 1 == board.rows;
        within(
            board.pos_cols[col],
            self.count_in_col(col, row, Cell::Positive),
            col_done,
        ) && within(
            board.neg_cols[col],
            self.count_in_col(col, row, Cell::Negative),
            col_done,
        )
    }

    fn is_goal(&self) -> bool {
        self.cursor.is_some() && self.next_cursor().is_none()
    }

    fn successors(&self) -> Children<Self> {
        match self.next_cursor() {
            Some(at) => Cell::CANDIDATES
                .iter()
                .map(|&value| self.with_cell(at, value))
                .collect(),
            None => Children::new(),
        }
    }
}

fn parse_counts(
    lines: &mut Lines<'_>,
    count: usize,
    expected: &'static str,
) -> Result<Vec<Option<usize>>, PuzzleError> {
    let (line, fields) = lines.exact_fields(count, expected)?;
    fields
        .iter()
        .map(|token| {
            let value: i32 = parse_number(line, token)?;
            match value {
                IGNORED => Ok(None),
                value if value >= 0 => Ok(Some(value as usize)),
                _ => Err(PuzzleError::InvalidNumber {
                    line,
                    token: token.to_string(),
                }),
            }
        })
        .collect()
}

impl FromStr for MagnetsConfig {
    type Err = PuzzleError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut lines = Lines::new(text);
        let dims: Vec<usize> = lines.numbers(2, "rows and columns")?;
        let (rows, cols) = (dims[0], dims[1]);
        let cells = board_cells(rows, cols)?;

        let pos_rows = parse_counts(&mut lines, rows, "positive row counts")?;
        let pos_cols = parse_counts(&mut lines, cols, "positive column counts")?;
        let neg_rows = parse_counts(&mut lines, rows, "negative row counts")?;
        let neg_cols = parse_counts(&mut lines, cols, "negative column counts")?;

        let mut pairs = Vec::with_capacity(cells);
        for _ in 0..rows {
            let (line, fields) = lines.exact_fields(cols, "pair row")?;
            for symbol in fields {
                let pair = Pair::from_symbol(symbol).ok_or_else(|| PuzzleError::InvalidSymbol {
                    line,
                    symbol: symbol.to_string(),
                })?;
                pairs.push(pair);
            }
        }

        let board = Board {
            rows,
            cols,
            pos_rows,
            pos_cols,
            neg_rows,
            neg_cols,
            pairs,
        };
        board.check_pairs()?;

        Ok(MagnetsConfig {
            cells: vec![Cell::Empty; cells],
            board: Arc::new(board),
            cursor: None,
        })
    }
}

fn count_label(count: Option<usize>) -> String {
    count.map_or_else(|| " ".to_string(), |count| count.to_string())
}

impl fmt::Display for MagnetsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = &self.board;
        let rule = "-".repeat((board.cols * 2).saturating_sub(1));

        let top: Vec<String> = board.pos_cols.iter().map(|&c| count_label(c)).collect();
        writeln!(f, "+ {}", top.join(" "))?;
        writeln!(f, "  {rule}")?;

        for row in 0..board.rows {
            let cells: Vec<String> = (0..board.cols)
                .map(|col| self.cell(row, col).symbol().to_string())
                .collect();
            writeln!(
                f,
                "{}|{}|{}",
                count_label(board.pos_rows[row]),
                cells.join(" "),
                count_label(board.neg_rows[row])
            )?;
        }

        writeln!(f, "  {rule}")?;
        f.write_str("  ")?;
        for &count in &board.neg_cols {
            write!(f, "{} ", count_label(count))?;
        }
        writeln!(f, " -")
    }
}
