//! Command line and logging setup for the demo binary.

use std::error::Error;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;
use env_logger::{Builder, Env, Target};

/// Largest accepted `--rows`.
pub const MAX_ROWS: i32 = 500;
/// Largest accepted `--gap`.
pub const MAX_GAP: i32 = 16;

/// Interactive A* visualizer on a square grid.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Number of rows (and columns) in the grid
    #[arg(short, long, default_value_t = 25, value_parser = clap::value_parser!(i32).range(1..=MAX_ROWS as i64))]
    pub rows: i32,

    /// Terminal columns per grid cell
    #[arg(short, long, default_value_t = 2, value_parser = clap::value_parser!(i32).range(1..=MAX_GAP as i64))]
    pub gap: i32,

    /// Pause after each search step, in milliseconds
    #[arg(long, default_value_t = 4)]
    pub step_delay_ms: u64,

    /// Write logs to this file instead of discarding them
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Settings the visualizer is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub rows: i32,
    pub gap: i32,
    pub step_delay: Duration,
}

impl DemoConfig {
    /// Logical width handed to the grid: `rows * gap`.
    pub fn width(&self) -> i32 {
        self.rows.saturating_mul(self.gap)
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            rows: 25,
            gap: 2,
            step_delay: Duration::from_millis(4),
        }
    }
}

impl From<&Cli> for DemoConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            rows: cli.rows,
            gap: cli.gap,
            step_delay: Duration::from_millis(cli.step_delay_ms),
        }
    }
}

/// Install the global logger.
///
/// The terminal is in raw mode while the demo runs, so records only reach
/// stderr at `error` level unless a log file is given.
pub fn init_logging(log_file: Option<&Path>) -> Result<(), Box<dyn Error>> {
    let mut builder = match log_file {
        Some(path) => {
            let mut b = Builder::from_env(Env::default().default_filter_or("info"));
            b.target(Target::Pipe(Box::new(File::create(path)?)));
            b
        }
        None => Builder::from_env(Env::default().default_filter_or("error")),
    };
    builder.try_init()?;
    Ok(())
}
