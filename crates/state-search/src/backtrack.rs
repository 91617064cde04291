//! Depth-first backtracking with eager pruning.
//!
//! Successors are tried in the order the configuration declares them. An
//! invalid successor is discarded before any of its descendants are built,
//! and the first valid goal found ends the search.

use log::debug;
use smallvec::IntoIter;

use crate::configuration::PartialConfiguration;

/// Which traversal the backtracker uses. Both visit candidates in the same
/// order and return the same solution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BacktrackStrategy {
    /// Call-stack recursion, one frame per decision point
    #[default]
    Recursive,
    /// Explicit heap stack, for puzzles deeper than the thread stack allows
    Iterative,
}

/// Backtracking solver.
///
/// The configuration counter accumulates across solves until [`reset`] is
/// called.
///
/// [`reset`]: Backtracker::reset
#[derive(Debug, Default)]
pub struct Backtracker {
    debug: bool,
    config_count: usize,
}

impl Backtracker {
    /// Create a backtracker; `debug` traces every candidate through `log`.
    pub fn new(debug: bool) -> Self {
        Self {
            debug,
            config_count: 0,
        }
    }

    pub fn is_debug(&self) -> bool {
        self.debug
    }

    /// Successor configurations generated since construction or the last reset.
    pub fn config_count(&self) -> usize {
        self.config_count
    }

    pub fn reset(&mut self) {
        self.config_count = 0;
    }

    pub fn solve_with<C: PartialConfiguration>(
        &mut self,
        strategy: BacktrackStrategy,
        start: C,
    ) -> Option<C> {
        match strategy {
            BacktrackStrategy::Recursive => self.solve(start),
            BacktrackStrategy::Iterative => self.solve_iterative(start),
        }
    }

    /// Recursive search from `start`. Returns the first goal reached through
    /// valid configurations, or `None` once every branch is pruned or spent.
    pub fn solve<C: PartialConfiguration>(&mut self, config: C) -> Option<C> {
        if config.is_goal() {
            return Some(config);
        }

        for child in config.successors() {
            if self.admit(&child) {
                if let Some(solution) = self.solve(child) {
                    return Some(solution);
                }
            }
        }

        None
    }

    /// Same search as [`Backtracker::solve`] driven by an explicit stack of
    /// pending successor lists.
    pub fn solve_iterative<C: PartialConfiguration>(&mut self, start: C) -> Option<C> {
        if start.is_goal() {
            return Some(start);
        }

        let mut stack: Vec<IntoIter<[C; 4]>> = vec![start.successors().into_iter()];

        while let Some(pending) = stack.last_mut() {
            let Some(child) = pending.next() else {
                stack.pop();
                continue;
            };

            if !self.admit(&child) {
                continue;
            }
            if child.is_goal() {
                return Some(child);
            }
            stack.push(child.successors().into_iter());
        }

        None
    }

    /// Count a freshly generated successor and decide whether to descend.
    fn admit<C: PartialConfiguration>(&mut self, child: &C) -> bool {
        self.config_count += 1;
        if self.debug {
            debug!("Considering:\n{child}");
        }

        let valid = child.is_valid();
        if self.debug {
            debug!("{}", if valid { "\tvalid" } else { "\tinvalid" });
        }
        valid
    }
}
