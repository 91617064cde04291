//! Generic state-space search.
//!
//! A puzzle describes itself through one of two contracts in
//! [`configuration`]; the engines never look inside a configuration. The
//! breadth-first [`BfsSolver`] finds a shortest move sequence, the pruning
//! [`Backtracker`] fills in a partial assignment until it is complete.
//!
//! The [`puzzles`] module carries concrete puzzles, and [`runner`] wraps the
//! engines with time budgets and reports for the command-line front-end.

pub mod backtrack;
pub mod bfs;
pub mod configuration;
pub mod error;
pub mod puzzles;
pub mod report;
pub mod runner;

// Re-export main types
pub use backtrack::{BacktrackStrategy, Backtracker};
pub use bfs::{BfsSolver, SearchStats};
pub use configuration::{Children, Configuration, PartialConfiguration};
pub use error::{PuzzleError, RunError};
pub use report::{BacktrackReport, PathReport, Render};
pub use runner::{run_backtracking, run_bfs, RunOptions};
