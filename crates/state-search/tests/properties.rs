use std::collections::VecDeque;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use proptest::prelude::*;
use state_search::{
    BacktrackStrategy, Backtracker, BfsSolver, Children, Configuration, PartialConfiguration,
};

#[derive(Debug)]
struct Graph {
    edges: Vec<Vec<usize>>,
    goal: usize,
}

impl Graph {
    /// Edge count from `start` to the goal, if reachable.
    fn distance(&self, start: usize) -> Option<usize> {
        let mut dist = vec![None; self.edges.len()];
        dist[start] = Some(0);
        let mut queue = VecDeque::from([start]);
        while let Some(node) = queue.pop_front() {
            let d = dist[node]?;
            if node == self.goal {
                return Some(d);
            }
            for &next in &self.edges[node] {
                if dist[next].is_none() {
                    dist[next] = Some(d + 1);
                    queue.push_back(next);
                }
            }
        }
        None
    }

    fn reachable(&self, start: usize) -> usize {
        let mut seen = vec![false; self.edges.len()];
        seen[start] = true;
        let mut stack = vec![start];
        while let Some(node) = stack.pop() {
            for &next in &self.edges[node] {
                if !seen[next] {
                    seen[next] = true;
                    stack.push(next);
                }
            }
        }
        seen.iter().filter(|&&s| s).count()
    }
}

/// A node of a shared graph; identity is the node id alone.
#[derive(Debug, Clone)]
struct Node {
    id: usize,
    graph: Arc<Graph>,
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Configuration for Node {
    fn is_goal(&self) -> bool {
        self.id == self.graph.goal
    }

    fn neighbors(&self) -> Children<Self> {
        self.graph.edges[self.id]
            .iter()
            .map(|&id| Node {
                id,
                graph: Arc::clone(&self.graph),
            })
            .collect()
    }
}

fn graph_and_start() -> impl Strategy<Value = (Arc<Graph>, usize)> {
    (1usize..9).prop_flat_map(|n| {
        (
            prop::collection::vec(prop::collection::vec(0..n, 0..4), n),
            0..n,
            0..n,
        )
            .prop_map(|(edges, goal, start)| (Arc::new(Graph { edges, goal }), start))
    })
}

/// Bit strings of a fixed length whose ones must add up to `target`.
#[derive(Debug, Clone)]
struct Ones {
    bits: Vec<u8>,
    len: usize,
    target: usize,
    zero_first: bool,
}

impl Ones {
    fn start(len: usize, target: usize, zero_first: bool) -> Self {
        Self {
            bits: Vec::new(),
            len,
            target,
            zero_first,
        }
    }

    fn ones(&self) -> usize {
        self.bits.iter().filter(|&&b| b == 1).count()
    }
}

impl fmt::Display for Ones {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in &self.bits {
            write!(f, "{bit}")?;
        }
        Ok(())
    }
}

impl PartialConfiguration for Ones {
    fn is_valid(&self) -> bool {
        let remaining = self.len - self.bits.len();
        self.ones() <= self.target && self.ones() + remaining >= self.target
    }

    fn is_goal(&self) -> bool {
        self.bits.len() == self.len && self.ones() == self.target
    }

    fn successors(&self) -> Children<Self> {
        if self.bits.len() == self.len {
            return Children::new();
        }
        let order = if self.zero_first { [0, 1] } else { [1, 0] };
        order
            .iter()
            .map(|&bit| {
                let mut next = self.clone();
                next.bits.push(bit);
                next
            })
            .collect()
    }
}

proptest! {
    #[test]
    fn test_bfs_path_is_shortest_and_connected((graph, start) in graph_and_start()) {
        let mut solver = BfsSolver::new();
        let path = solver.solve(Node { id: start, graph: Arc::clone(&graph) });

        match (path, graph.distance(start)) {
            (Some(path), Some(distance)) => {
                prop_assert_eq!(path.len(), distance + 1);
                prop_assert_eq!(path[0].id, start);
                prop_assert!(path.last().unwrap().is_goal());
                prop_assert!(path[..path.len() - 1].iter().all(|node| !node.is_goal()));
                for pair in path.windows(2) {
                    prop_assert!(pair[0].neighbors().contains(&pair[1]));
                }
            }
            (None, None) => {}
            (path, distance) => {
                prop_assert!(false, "solver {:?} disagrees with distance {:?}", path.map(|p| p.len()), distance);
            }
        }
    }

    #[test]
    fn test_bfs_counters_match_reachable_states((graph, start) in graph_and_start()) {
        let mut solver = BfsSolver::new();
        let path = solver.solve(Node { id: start, graph: Arc::clone(&graph) });

        prop_assert!(solver.last_unique_configs() >= 1);
        prop_assert!(solver.last_unique_configs() <= graph.reachable(start));
        prop_assert!(solver.last_total_configs() <= solver.last_unique_configs());
        if path.is_none() {
            // An exhausted search has discovered and dequeued every reachable node
            prop_assert_eq!(solver.last_unique_configs(), graph.reachable(start));
            prop_assert_eq!(solver.last_total_configs(), solver.last_unique_configs());
        }
    }

    #[test]
    fn test_bfs_repeatable((graph, start) in graph_and_start()) {
        let mut solver = BfsSolver::new();
        let first = solver.solve(Node { id: start, graph: Arc::clone(&graph) });
        let first_stats = solver.stats();
        let second = solver.solve(Node { id: start, graph: Arc::clone(&graph) });

        prop_assert_eq!(
            first.map(|p| p.iter().map(|n| n.id).collect::<Vec<_>>()),
            second.map(|p| p.iter().map(|n| n.id).collect::<Vec<_>>())
        );
        prop_assert_eq!(first_stats, solver.stats());
    }

    #[test]
    fn test_successor_order_never_changes_solvability(len in 0usize..10, target in 0usize..12) {
        let mut backtracker = Backtracker::new(false);

        let zeros_first = backtracker.solve(Ones::start(len, target, true));
        let ones_first = backtracker.solve(Ones::start(len, target, false));

        prop_assert_eq!(zeros_first.is_some(), ones_first.is_some());
        prop_assert_eq!(zeros_first.is_some(), target <= len);
        if let Some(solution) = zeros_first {
            prop_assert_eq!(solution.ones(), target);
        }
    }

    #[test]
    fn test_strategies_agree(len in 0usize..10, target in 0usize..12, zero_first in any::<bool>()) {
        let mut recursive = Backtracker::new(false);
        let mut iterative = Backtracker::new(false);

        let a = recursive.solve_with(BacktrackStrategy::Recursive, Ones::start(len, target, zero_first));
        let b = iterative.solve_with(BacktrackStrategy::Iterative, Ones::start(len, target, zero_first));

        prop_assert_eq!(a.map(|c| c.to_string()), b.map(|c| c.to_string()));
        prop_assert_eq!(recursive.config_count(), iterative.config_count());
    }
}
