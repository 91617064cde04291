//! Breadth-first shortest-path solver.
//!
//! Explores the implicit graph level by level from a start configuration and
//! returns the first goal reached, which is a nearest one. Ties at the same
//! depth go to whichever goal `neighbors()` surfaced first.

use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use log::debug;

use crate::configuration::Configuration;

/// Counters recorded by the most recent solve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Configurations taken off the frontier
    pub total_configs: usize,
    /// Distinct configurations ever discovered, start included
    pub unique_configs: usize,
}

/// A discovered configuration and the arena index it was reached from.
#[derive(Debug)]
struct Discovered<C> {
    config: Rc<C>,
    parent: Option<usize>,
}

/// Breadth-first solver. Counters belong to the instance and reset on every
/// call to [`BfsSolver::solve`]; use separate instances for concurrent solves.
#[derive(Debug, Default)]
pub struct BfsSolver {
    stats: SearchStats,
}

impl BfsSolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Find a shortest path from `start` to any goal.
    ///
    /// Returns the path start..=goal, or `None` when no goal is reachable.
    /// Panics raised by the configuration propagate to the caller.
    pub fn solve<C: Configuration>(&mut self, start: C) -> Option<Vec<C>> {
        self.stats = SearchStats::default();

        // Arena and index share one allocation per configuration.
        let start = Rc::new(start);
        let mut discovered = vec![Discovered {
            config: Rc::clone(&start),
            parent: None,
        }];
        let mut index: HashMap<Rc<C>, usize> = HashMap::new();
        index.insert(start, 0);
        self.stats.unique_configs = 1;

        let mut frontier: VecDeque<usize> = VecDeque::from([0]);

        while let Some(current) = frontier.pop_front() {
            self.stats.total_configs += 1;

            if discovered[current].config.is_goal() {
                let path = reconstruct_path(&discovered, current);
                debug!(
                    "bfs reached goal at depth {} ({} total, {} unique)",
                    path.len() - 1,
                    self.stats.total_configs,
                    self.stats.unique_configs
                );
                return Some(path);
            }

            let neighbors = discovered[current].config.neighbors();
            for neighbor in neighbors {
                if index.contains_key(&neighbor) {
                    continue;
                }
                let id = discovered.len();
                let neighbor = Rc::new(neighbor);
                discovered.push(Discovered {
                    config: Rc::clone(&neighbor),
                    parent: Some(current),
                });
                index.insert(neighbor, id);
                frontier.push_back(id);
                self.stats.unique_configs += 1;
            }
        }

        debug!(
            "bfs exhausted without a goal ({} total, {} unique)",
            self.stats.total_configs, self.stats.unique_configs
        );
        None
    }

    /// The configuration one move along a shortest path from `from`.
    ///
    /// `None` when `from` is already a goal or no goal is reachable. Updates
    /// the counters like [`BfsSolver::solve`].
    pub fn next_step<C: Configuration>(&mut self, from: C) -> Option<C> {
        self.solve(from)?.into_iter().nth(1)
    }

    /// Configurations dequeued by the last solve.
    pub fn last_total_configs(&self) -> usize {
        self.stats.total_configs
    }

    /// Distinct configurations discovered by the last solve.
    pub fn last_unique_configs(&self) -> usize {
        self.stats.unique_configs
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }
}

/// Walk parent links back from `goal` and return the path in start order.
fn reconstruct_path<C: Clone>(discovered: &[Discovered<C>], goal: usize) -> Vec<C> {
    let mut path = Vec::new();
    let mut cursor = Some(goal);
    while let Some(at) = cursor {
        path.push(C::clone(&discovered[at].config));
        cursor = discovered[at].parent;
    }
    path.reverse();
    path
}
