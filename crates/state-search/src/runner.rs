//! Timed solver runs for front-ends.
//!
//! The engines run to completion with no cancellation. A run with a timeout
//! moves the solve onto a worker thread and stops waiting when the budget is
//! spent; the abandoned worker is left to finish on its own.

use std::fmt::Display;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use log::{info, warn};

use crate::backtrack::{BacktrackStrategy, Backtracker};
use crate::bfs::BfsSolver;
use crate::configuration::{Configuration, PartialConfiguration};
use crate::error::RunError;
use crate::report::{BacktrackReport, PathReport};

/// Deep backtracking recurses once per decision point.
const WORKER_STACK_SIZE: usize = 64 * 1024 * 1024;

/// Options for a solver run
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Give up waiting after this long; `None` solves on the calling thread
    pub timeout: Option<Duration>,
    /// Trace every backtracking candidate
    pub debug: bool,
    pub strategy: BacktrackStrategy,
}

/// Solve `start` breadth-first and report the path.
pub fn run_bfs<C>(puzzle: &str, start: C, options: &RunOptions) -> Result<PathReport, RunError>
where
    C: Configuration + Display + Send + 'static,
{
    info!("solving {puzzle} breadth-first");
    let started = Instant::now();

    let (path, stats) = watch(options.timeout, move || {
        let mut solver = BfsSolver::new();
        let path = solver.solve(start);
        (path, solver.stats())
    })?;

    let report = PathReport::new(puzzle, path.as_deref(), stats, started.elapsed());
    info!(
        "{puzzle}: solved={} total={} unique={} in {}ms",
        report.solved, report.total_configs, report.unique_configs, report.time_elapsed_ms
    );
    Ok(report)
}

/// Solve `start` by backtracking and report the solution.
pub fn run_backtracking<C>(
    puzzle: &str,
    start: C,
    options: &RunOptions,
) -> Result<BacktrackReport, RunError>
where
    C: PartialConfiguration + Send + 'static,
{
    info!("solving {puzzle} by backtracking ({:?})", options.strategy);
    let started = Instant::now();

    let debug = options.debug;
    let strategy = options.strategy;
    let (solution, generated) = watch(options.timeout, move || {
        let mut backtracker = Backtracker::new(debug);
        let solution = backtracker.solve_with(strategy, start);
        (solution, backtracker.config_count())
    })?;

    let report = BacktrackReport::new(puzzle, solution.as_ref(), generated, started.elapsed());
    info!(
        "{puzzle}: solved={} generated={} in {}ms",
        report.solved, report.configs_generated, report.time_elapsed_ms
    );
    Ok(report)
}

/// Run `job` inline, or on a worker when a timeout is set.
fn watch<T, F>(timeout: Option<Duration>, job: F) -> Result<T, RunError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    let Some(limit) = timeout else {
        return Ok(job());
    };

    let (tx, rx) = mpsc::channel();
    thread::Builder::new()
        .name("search-worker".to_string())
        .stack_size(WORKER_STACK_SIZE)
        .spawn(move || {
            // The receiver is gone if the run already timed out.
            let _ = tx.send(job());
        })?;

    match rx.recv_timeout(limit) {
        Ok(value) => Ok(value),
        Err(RecvTimeoutError::Timeout) => {
            warn!("search abandoned after {limit:?}");
            Err(RunError::TimedOut(limit))
        }
        Err(RecvTimeoutError::Disconnected) => Err(RunError::WorkerPanicked),
    }
}
