use std::path::PathBuf;

use state_search::puzzles::{JamConfig, MagnetsConfig, Position, TiltConfig};
use state_search::{
    run_backtracking, run_bfs, BacktrackStrategy, Configuration, PuzzleError, RunOptions,
};

fn data(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data").join(name)
}

#[test]
fn test_jam_file() {
    let config = JamConfig::from_file(data("jam-blocked.txt")).unwrap();

    let report = run_bfs("jam", config, &RunOptions::default()).unwrap();

    assert!(report.solved);
    assert_eq!(report.steps.len(), 5);
    assert_eq!(report.steps[4], ". . . .\n. . X X\n. . A .\n. . A .");
}

#[test]
fn test_jam_goal_position() {
    let config = JamConfig::from_file(data("jam-blocked.txt")).unwrap();

    assert!(!config.is_goal());
    assert_eq!(config.car("X").unwrap().front, Position::new(1, 1));
}

#[test]
fn test_tilt_file() {
    let config = TiltConfig::from_file(data("tilt-5.txt")).unwrap();

    let report = run_bfs("tilt", config, &RunOptions::default()).unwrap();

    assert!(report.solved);
    assert_eq!(report.steps.len(), 8);
    assert_eq!(report.total_configs, 95);
    assert_eq!(report.unique_configs, 126);
    assert!(!report.steps.last().unwrap().contains('G'));
}

#[test]
fn test_magnets_file_both_strategies() {
    for strategy in [BacktrackStrategy::Recursive, BacktrackStrategy::Iterative] {
        let config = MagnetsConfig::from_file(data("magnets-8.txt")).unwrap();
        let options = RunOptions {
            strategy,
            ..RunOptions::default()
        };

        let report = run_backtracking("magnets", config, &options).unwrap();

        assert!(report.solved);
        assert_eq!(report.configs_generated, 42);
    }
}

#[test]
fn test_missing_file() {
    let result = JamConfig::from_file(data("no-such-puzzle.txt"));

    assert!(matches!(result, Err(PuzzleError::Io(_))));
}
