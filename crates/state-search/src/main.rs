//! CLI entry point for the puzzle solvers.
//!
//! Usage:
//!   state-search strings <start> <finish> [options]
//!   state-search water <amount> <bucket>... [options]
//!   state-search jam <file> [options]
//!   state-search tilt <file> [options]
//!   state-search magnets <file> [options]
//!
//! Options:
//!   --timeout <seconds>  Stop waiting for the search after this long
//!   --debug              Trace every backtracking candidate
//!   --iterative          Backtrack with an explicit stack
//!   --json               Print the report as JSON
//!   --quiet              Only log warnings and errors
//!   --log-file <path>    Write the log to a file instead of stderr
//!
//! Exit codes: 0 solved, 1 no solution, 2 error or timeout.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use serde::Serialize;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode, WriteLogger};

use state_search::puzzles::{JamConfig, MagnetsConfig, StringsConfig, TiltConfig, WaterConfig};
use state_search::{run_backtracking, run_bfs, BacktrackStrategy, Render, RunOptions};

#[derive(Parser)]
#[command(name = "state-search")]
#[command(about = "Shortest-path and backtracking solvers for small puzzles")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Maximum search time in seconds
    #[arg(long, global = true, value_name = "SECONDS")]
    timeout: Option<u64>,

    /// Trace every configuration the backtracker considers
    #[arg(long, global = true)]
    debug: bool,

    /// Backtrack with an explicit stack instead of recursion
    #[arg(long, global = true)]
    iterative: bool,

    /// Print the report as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Only log warnings and errors
    #[arg(long, global = true, conflicts_with = "debug")]
    quiet: bool,

    /// Write the log to this file instead of stderr
    #[arg(long, global = true, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Turn one word into another, one letter step at a time
    Strings {
        /// Starting word (A-Z)
        start: String,
        /// Target word (A-Z)
        finish: String,
    },

    /// Measure an amount of water with buckets of fixed capacity
    Water {
        /// Amount to end up with in a single bucket
        amount: u32,
        /// Bucket capacities
        #[arg(required = true)]
        buckets: Vec<u32>,
    },

    /// Slide cars until car X reaches the right edge
    Jam {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Tip a board until every green slider has dropped into the hole
    Tilt {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Place magnets so every row and column count holds
    Magnets {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(&cli) {
        eprintln!("Error: {e:#}");
        process::exit(2);
    }

    match run(cli) {
        Ok(true) => process::exit(0),
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(2);
        }
    }
}

fn init_logging(cli: &Cli) -> Result<()> {
    let level = if cli.quiet {
        LevelFilter::Warn
    } else if cli.debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    match &cli.log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            WriteLogger::init(level, Config::default(), file)?;
        }
        None => {
            TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto)?;
        }
    }
    Ok(())
}

/// Solve the requested puzzle and print its report; `Ok(false)` means the
/// search finished without a solution.
fn run(cli: Cli) -> Result<bool> {
    let options = RunOptions {
        timeout: cli.timeout.map(Duration::from_secs),
        debug: cli.debug,
        strategy: if cli.iterative {
            BacktrackStrategy::Iterative
        } else {
            BacktrackStrategy::Recursive
        },
    };

    match cli.command {
        Commands::Strings { start, finish } => {
            let config = StringsConfig::new(&start, &finish)?;
            let report = run_bfs("strings", config, &options)?
                .with_header(format!("Start: {start}, End: {finish}"));
            print_report(&report, cli.json)?;
            Ok(report.solved)
        }
        Commands::Water { amount, buckets } => {
            let header = format!("Amount: {amount}, Buckets: {buckets:?}");
            let config = WaterConfig::new(amount, buckets);
            let report = run_bfs("water", config, &options)?.with_header(header);
            print_report(&report, cli.json)?;
            Ok(report.solved)
        }
        Commands::Jam { file } => {
            let config = JamConfig::from_file(&file).with_context(|| loading(&file))?;
            let header = config.to_string();
            let report = run_bfs("jam", config, &options)?.with_header(header);
            print_report(&report, cli.json)?;
            Ok(report.solved)
        }
        Commands::Tilt { file } => {
            let config = TiltConfig::from_file(&file).with_context(|| loading(&file))?;
            let header = config.to_string();
            let report = run_bfs("tilt", config, &options)?.with_header(header);
            print_report(&report, cli.json)?;
            Ok(report.solved)
        }
        Commands::Magnets { file } => {
            let config = MagnetsConfig::from_file(&file).with_context(|| loading(&file))?;
            let report = run_backtracking("magnets", config, &options)?;
            print_report(&report, cli.json)?;
            Ok(report.solved)
        }
    }
}

fn loading(path: &Path) -> String {
    format!("Failed to load puzzle {}", path.display())
}

fn print_report<R: Render + Serialize>(report: &R, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        print!("{}", report.render());
    }
    Ok(())
}
