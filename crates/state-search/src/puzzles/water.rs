//! Water buckets: fill, empty and pour until one bucket holds the target.

use std::fmt;
use std::sync::Arc;

use crate::configuration::{Children, Configuration};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WaterConfig {
    target: u32,
    capacities: Arc<[u32]>,
    fills: Vec<u32>,
}

impl WaterConfig {
    /// All buckets start empty.
    pub fn new(target: u32, capacities: Vec<u32>) -> Self {
        let fills = vec![0; capacities.len()];
        Self {
            target,
            capacities: capacities.into(),
            fills,
        }
    }

    pub fn fills(&self) -> &[u32] {
        &self.fills
    }

    fn with_fills(&self, fills: Vec<u32>) -> Self {
        Self {
            target: self.target,
            capacities: Arc::clone(&self.capacities),
            fills,
        }
    }

    fn filled(&self, at: usize) -> Self {
        let mut fills = self.fills.clone();
        fills[at] = self.capacities[at];
        self.with_fills(fills)
    }

    fn emptied(&self, at: usize) -> Self {
        let mut fills = self.fills.clone();
        fills[at] = 0;
        self.with_fills(fills)
    }

    /// Pour `from` into `into` until `into` is full or `from` is empty.
    fn poured(&self, from: usize, into: usize) -> Self {
        let mut fills = self.fills.clone();
        let moved = (self.capacities[into] - fills[into]).min(fills[from]);
        fills[into] += moved;
        fills[from] -= moved;
        self.with_fills(fills)
    }
}

impl Configuration for WaterConfig {
    fn is_goal(&self) -> bool {
        self.fills.contains(&self.target)
    }

    fn neighbors(&self) -> Children<Self> {
        let mut neighbors = Children::new();
        for at in 0..self.fills.len() {
            if self.fills[at] == 0 {
                neighbors.push(self.filled(at));
                continue;
            }
            neighbors.push(self.emptied(at));
            for into in (0..self.fills.len()).filter(|&into| into != at) {
                neighbors.push(self.poured(at, into));
            }
        }
        neighbors
    }
}

impl fmt::Display for WaterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.fills)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bfs::BfsSolver;

    fn fills(path: &[WaterConfig]) -> Vec<Vec<u32>> {
        path.iter().map(|config| config.fills().to_vec()).collect()
    }

    #[test]
    fn test_pour_stops_at_capacity() {
        let config = WaterConfig::new(4, vec![3, 5]).with_fills(vec![3, 4]);

        assert_eq!(config.poured(0, 1).fills(), &[2, 5]);
        assert_eq!(config.poured(1, 0).fills(), &[3, 4]);
    }

    #[test]
    fn test_only_empty_buckets_are_filled() {
        let config = WaterConfig::new(4, vec![3, 5]).with_fills(vec![0, 2]);

        let neighbors: Vec<Vec<u32>> = config
            .neighbors()
            .iter()
            .map(|n| n.fills().to_vec())
            .collect();

        assert_eq!(neighbors, vec![vec![3, 2], vec![0, 0], vec![2, 0]]);
    }

    #[test]
    fn test_classic_three_five_four() {
        let mut solver = BfsSolver::new();

        let path = solver.solve(WaterConfig::new(4, vec![3, 5])).unwrap();

        assert_eq!(
            fills(&path),
            vec![
                vec![0, 0],
                vec![0, 5],
                vec![3, 2],
                vec![0, 2],
                vec![2, 0],
                vec![2, 5],
                vec![3, 4],
            ]
        );
        assert_eq!(solver.last_total_configs(), 14);
        assert_eq!(solver.last_unique_configs(), 15);
    }

    #[test]
    fn test_unreachable_amount() {
        let mut solver = BfsSolver::new();

        assert!(solver.solve(WaterConfig::new(3, vec![2, 4])).is_none());
        assert_eq!(
            solver.last_total_configs(),
            solver.last_unique_configs()
        );
    }

    #[test]
    fn test_display_lists_fills() {
        assert_eq!(WaterConfig::new(1, vec![2, 7]).to_string(), "[0, 0]");
    }
}
