//! Tilt: a square board tipped in one of four directions.
//!
//! Every slider slides as far as it can; a slider that reaches the hole drops
//! out. The goal is to drop every green slider while keeping every blue one.
//!
//! Description format: the board size on the first line, then one line per
//! row of space-separated cells (`.` empty, `*` blocker, `G` green, `B` blue,
//! `O` hole).

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::configuration::{Children, Configuration};
use crate::error::PuzzleError;
use crate::puzzles::{board_cells, Lines};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TiltTile {
    Empty,
    Blocker,
    Green,
    Blue,
    Hole,
}

impl TiltTile {
    fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "." => Some(TiltTile::Empty),
            "*" => Some(TiltTile::Blocker),
            "G" => Some(TiltTile::Green),
            "B" => Some(TiltTile::Blue),
            "O" => Some(TiltTile::Hole),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            TiltTile::Empty => '.',
            TiltTile::Blocker => '*',
            TiltTile::Green => 'G',
            TiltTile::Blue => 'B',
            TiltTile::Hole => 'O',
        }
    }

    pub fn is_slider(self) -> bool {
        matches!(self, TiltTile::Green | TiltTile::Blue)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TiltDirection {
    Up,
    Right,
    Down,
    Left,
}

impl TiltDirection {
    /// Neighbor order.
    pub const ALL: [TiltDirection; 4] = [
        TiltDirection::Up,
        TiltDirection::Right,
        TiltDirection::Down,
        TiltDirection::Left,
    ];

    fn delta(self) -> (isize, isize) {
        match self {
            TiltDirection::Up => (-1, 0),
            TiltDirection::Right => (0, 1),
            TiltDirection::Down => (1, 0),
            TiltDirection::Left => (0, -1),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TiltConfig {
    size: usize,
    /// Row-major
    tiles: Vec<TiltTile>,
    /// Blue sliders on the starting board
    blue_count: usize,
}

impl TiltConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, PuzzleError> {
        std::fs::read_to_string(path)?.parse()
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn tile(&self, row: usize, col: usize) -> TiltTile {
        self.tiles[row * self.size + col]
    }

    fn count(&self, kind: TiltTile) -> usize {
        self.tiles.iter().filter(|&&tile| tile == kind).count()
    }

    /// The board after tipping it towards `direction`.
    pub fn tilted(&self, direction: TiltDirection) -> Self {
        let mut next = self.clone();
        // Sliders nearest the leading edge move first so the ones behind
        // stack up against them.
        let order: Vec<usize> = match direction {
            TiltDirection::Up | TiltDirection::Left => (0..self.tiles.len()).collect(),
            TiltDirection::Down | TiltDirection::Right => (0..self.tiles.len()).rev().collect(),
        };
        for index in order {
            if next.tiles[index].is_slider() {
                next.slide(index / self.size, index % self.size, direction);
            }
        }
        next
    }

    fn slide(&mut self, mut row: usize, mut col: usize, direction: TiltDirection) {
        let piece = self.tile(row, col);
        let (dr, dc) = direction.delta();
        loop {
            let (Some(r), Some(c)) = (row.checked_add_signed(dr), col.checked_add_signed(dc)) else {
                return;
            };
            if r >= self.size || c >= self.size {
                return;
            }
            match self.tile(r, c) {
                TiltTile::Empty => {
                    self.tiles[r * self.size + c] = piece;
                    self.tiles[row * self.size + col] = TiltTile::Empty;
                    row = r;
                    col = c;
                }
                TiltTile::Hole => {
                    self.tiles[row * self.size + col] = TiltTile::Empty;
                    return;
                }
                TiltTile::Blocker | TiltTile::Green | TiltTile::Blue => return,
            }
        }
    }

    /// A tilt is legal only if no blue slider went down the hole.
    fn keeps_blues(&self) -> bool {
        self.count(TiltTile::Blue) == self.blue_count
    }
}

impl Configuration for TiltConfig {
    fn is_goal(&self) -> bool {
        self.count(TiltTile::Green) == 0
    }

    fn neighbors(&self) -> Children<Self> {
        TiltDirection::ALL
            .iter()
            .map(|&direction| self.tilted(direction))
            .filter(TiltConfig::keeps_blues)
            .collect()
    }
}

impl FromStr for TiltConfig {
    type Err = PuzzleError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut lines = Lines::new(text);
        let size: Vec<usize> = lines.numbers(1, "board size")?;
        let size = size[0];

        let mut tiles = Vec::with_capacity(board_cells(size, size)?);
        for _ in 0..size {
            let (line, fields) = lines.exact_fields(size, "board row")?;
            for symbol in fields {
                let tile = TiltTile::from_symbol(symbol).ok_or_else(|| PuzzleError::InvalidSymbol {
                    line,
                    symbol: symbol.to_string(),
                })?;
                tiles.push(tile);
            }
        }

        let mut config = TiltConfig {
            size,
            tiles,
            blue_count: 0,
        };
        config.blue_count = config.count(TiltTile::Blue);
        Ok(config)
    }
}

impl fmt::Display for TiltConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                write!(f, "{} ", self.tile(row, col).symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bfs::BfsSolver;

    const ONE_MOVE: &str = "\
3
G . O
. . .
. . .
";

    const BLUE_GUARDS_HOLE: &str = "\
3
B G O
* * *
. . .
";

    #[test]
    fn test_parse_and_display() {
        let config: TiltConfig = ONE_MOVE.parse().unwrap();

        assert_eq!(config.size(), 3);
        assert_eq!(config.tile(0, 0), TiltTile::Green);
        assert_eq!(config.to_string(), "G . O \n. . . \n. . . \n");
    }

    #[test]
    fn test_sliders_stack_against_each_other() {
        let config: TiltConfig = "3\nG B .\n. . .\n. . .\n".parse().unwrap();

        let right = config.tilted(TiltDirection::Right);

        assert_eq!(right.tile(0, 0), TiltTile::Empty);
        assert_eq!(right.tile(0, 1), TiltTile::Green);
        assert_eq!(right.tile(0, 2), TiltTile::Blue);
    }

    #[test]
    fn test_blockers_stop_sliders() {
        let config: TiltConfig = "3\n. . .\n* . .\nG . .\n".parse().unwrap();

        let up = config.tilted(TiltDirection::Up);

        assert_eq!(up.tile(2, 0), TiltTile::Green);
    }

    #[test]
    fn test_single_tilt_solves() {
        let mut solver = BfsSolver::new();
        let config: TiltConfig = ONE_MOVE.parse().unwrap();

        let path = solver.solve(config).unwrap();

        assert_eq!(path.len(), 2);
        assert!(path[1].is_goal());
        // up and left leave the board unchanged
        assert_eq!(solver.last_total_configs(), 2);
        assert_eq!(solver.last_unique_configs(), 3);
    }

    #[test]
    fn test_losing_a_blue_is_not_a_move() {
        let mut solver = BfsSolver::new();
        let config: TiltConfig = BLUE_GUARDS_HOLE.parse().unwrap();

        assert!(config
            .neighbors()
            .iter()
            .all(|neighbor| neighbor.count(TiltTile::Blue) == 1));
        assert!(solver.solve(config).is_none());
        assert_eq!(solver.last_total_configs(), 1);
        assert_eq!(solver.last_unique_configs(), 1);
    }

    #[test]
    fn test_unknown_symbol() {
        let result = "2\n. x\n. .\n".parse::<TiltConfig>();

        assert!(matches!(
            result,
            Err(PuzzleError::InvalidSymbol { line: 2, .. })
        ));
    }

    #[test]
    fn test_oversized_board_is_rejected() {
        let result = "5000000000\n".parse::<TiltConfig>();

        assert!(matches!(result, Err(PuzzleError::Layout(_))));
    }
}
