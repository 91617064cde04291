//! Concrete puzzle configurations.
//!
//! Each puzzle owns its rules and implements one of the configuration
//! contracts. Board puzzles read a whitespace-separated text description.

pub mod jam;
pub mod magnets;
pub mod strings;
pub mod tilt;
pub mod water;

use std::str::FromStr;

use crate::error::PuzzleError;

pub use jam::{Car, JamConfig, Position};
pub use magnets::{Cell, MagnetsConfig, Pair};
pub use strings::StringsConfig;
pub use tilt::{TiltConfig, TiltDirection, TiltTile};
pub use water::WaterConfig;

/// Largest board, in cells, a puzzle description may declare.
pub const MAX_BOARD_CELLS: usize = 1 << 20;

/// Cell count of a `rows` x `cols` board, refusing boards past
/// [`MAX_BOARD_CELLS`].
fn board_cells(rows: usize, cols: usize) -> Result<usize, PuzzleError> {
    rows.checked_mul(cols)
        .filter(|&cells| cells <= MAX_BOARD_CELLS)
        .ok_or_else(|| {
            PuzzleError::Layout(format!(
                "a {rows}x{cols} board exceeds {MAX_BOARD_CELLS} cells"
            ))
        })
}

/// Line-oriented reader over a puzzle description.
///
/// Blank lines are skipped; line numbers are 1-based and refer to the input.
struct Lines<'a> {
    inner: std::iter::Enumerate<std::str::Lines<'a>>,
    last: usize,
}

impl<'a> Lines<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            inner: text.lines().enumerate(),
            last: 0,
        }
    }

    /// The next non-blank line split into fields.
    fn fields(&mut self, expected: &'static str) -> Result<(usize, Vec<&'a str>), PuzzleError> {
        let next = self.inner.by_ref().find(|(_, line)| !line.trim().is_empty());
        match next {
            Some((index, line)) => {
                self.last = index + 1;
                Ok((self.last, line.split_whitespace().collect()))
            }
            None => Err(PuzzleError::MissingLine {
                line: self.last + 1,
                expected,
            }),
        }
    }

    /// Like [`Lines::fields`] but requires exactly `count` fields.
    fn exact_fields(
        &mut self,
        count: usize,
        expected: &'static str,
    ) -> Result<(usize, Vec<&'a str>), PuzzleError> {
        let (line, fields) = self.fields(expected)?;
        if fields.len() != count {
            return Err(PuzzleError::FieldCount {
                line,
                expected: count,
                found: fields.len(),
            });
        }
        Ok((line, fields))
    }

    /// A line of exactly `count` integers.
    fn numbers<T: FromStr>(
        &mut self,
        count: usize,
        expected: &'static str,
    ) -> Result<Vec<T>, PuzzleError> {
        let (line, fields) = self.exact_fields(count, expected)?;
        fields.iter().map(|token| parse_number(line, token)).collect()
    }
}

fn parse_number<T: FromStr>(line: usize, token: &str) -> Result<T, PuzzleError> {
    token.parse().map_err(|_| PuzzleError::InvalidNumber {
        line,
        token: token.to_string(),
    })
}
