use std::time::Duration;

use thiserror::Error;

// Error type for reading puzzle descriptions.
#[derive(Error, Debug)]
pub enum PuzzleError {
    /// Error when the puzzle file cannot be read.
    #[error("Failed to read puzzle file: {0}")]
    Io(#[from] std::io::Error),

    /// Error when the description ends before a required line.
    #[error("Missing line {line}: expected {expected}")]
    MissingLine { line: usize, expected: &'static str },

    /// Error when a token is not a valid integer.
    #[error("Line {line}: invalid number '{token}'")]
    InvalidNumber { line: usize, token: String },

    /// Error when a line has the wrong number of fields.
    #[error("Line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// Error when a board cell or pair marker is not recognized.
    #[error("Line {line}: unrecognized symbol '{symbol}'")]
    InvalidSymbol { line: usize, symbol: String },

    /// Error when a word contains characters outside 'A'..='Z'.
    #[error("Invalid word '{0}': only uppercase letters A-Z are allowed")]
    InvalidWord(String),

    /// Error when the geometry of a piece or board is inconsistent.
    #[error("Invalid layout: {0}")]
    Layout(String),

    /// Error when the sliding-car board has no car to free.
    #[error("No car with id '{0}' on the board")]
    MissingCar(String),
}

// Error type for watched solver runs.
#[derive(Error, Debug)]
pub enum RunError {
    /// Error when the solve does not finish inside its time budget.
    #[error("Search did not finish within {0:?}")]
    TimedOut(Duration),

    /// Error when a configuration panicked on the worker thread.
    #[error("Search worker panicked; the configuration broke its contract")]
    WorkerPanicked,

    /// Error when the worker thread could not be started.
    #[error("Failed to start search worker: {0}")]
    Spawn(#[from] std::io::Error),
}
