//! Solve reports, serializable for `--json` and renderable as plain text.

use std::fmt::Display;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::bfs::SearchStats;

/// Plain-text rendering for the console.
pub trait Render {
    fn render(&self) -> String;
}

/// Result of a breadth-first solve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathReport {
    pub puzzle: String,
    /// Puzzle description printed above the counters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
    pub solved: bool,
    pub total_configs: usize,
    pub unique_configs: usize,
    pub time_elapsed_ms: u64,
    /// Rendered configurations from start to goal; empty when unsolved
    pub steps: Vec<String>,
}

impl PathReport {
    pub fn new<C: Display>(
        puzzle: &str,
        path: Option<&[C]>,
        stats: SearchStats,
        elapsed: Duration,
    ) -> Self {
        Self {
            puzzle: puzzle.to_string(),
            header: None,
            solved: path.is_some(),
            total_configs: stats.total_configs,
            unique_configs: stats.unique_configs,
            time_elapsed_ms: elapsed.as_millis() as u64,
            steps: path
                .map(|path| path.iter().map(ToString::to_string).collect())
                .unwrap_or_default(),
        }
    }

    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }
}

impl Render for PathReport {
    fn render(&self) -> String {
        let mut out = String::new();
        if let Some(header) = &self.header {
            out.push_str(header.trim_end());
            out.push('\n');
        }
        out.push_str(&format!(
            "Total configs: {}\nUnique configs: {}\n",
            self.total_configs, self.unique_configs
        ));
        if !self.solved {
            out.push_str("No solution\n");
            return out;
        }
        for (i, step) in self.steps.iter().enumerate() {
            let step = step.trim_end();
            if step.contains('\n') {
                // Boards get their own lines and a blank line between steps
                if i != 0 {
                    out.push('\n');
                }
                out.push_str(&format!("Step {i}:\n{step}\n"));
            } else {
                out.push_str(&format!("Step {i}: {step}\n"));
            }
        }
        out
    }
}

/// Result of a backtracking solve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BacktrackReport {
    pub puzzle: String,
    pub solved: bool,
    pub configs_generated: usize,
    pub time_elapsed_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solution: Option<String>,
}

impl BacktrackReport {
    pub fn new<C: Display>(
        puzzle: &str,
        solution: Option<&C>,
        configs_generated: usize,
        elapsed: Duration,
    ) -> Self {
        Self {
            puzzle: puzzle.to_string(),
            solved: solution.is_some(),
            configs_generated,
            time_elapsed_ms: elapsed.as_millis() as u64,
            solution: solution.map(ToString::to_string),
        }
    }
}

impl Render for BacktrackReport {
    fn render(&self) -> String {
        let mut out = match &self.solution {
            Some(solution) => format!("Solution:\n{}\n", solution.trim_end()),
            None => "No solution exists!\n".to_string(),
        };
        out.push_str(&format!(
            "Elapsed time: {:.3} seconds.\n{} configurations generated.\n",
            self.time_elapsed_ms as f64 / 1000.0,
            self.configs_generated
        ));
        out
    }
}
