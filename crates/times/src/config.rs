//! Application configuration from CLI arguments and environment.

use std::path::{Path, PathBuf};

use clap::Parser;

use times_core::constants::{DEFAULT_CHECKPOINT_INTERVAL, DEFAULT_DIGITS, DEFAULT_PROGRESS_INTERVAL};
use times_core::options::Options;

/// Bin the leading fractional bits of (3/2)^n, with resumable checkpoints.
#[derive(Parser, Debug)]
#[command(name = "times", version, about)]
pub struct AppConfig {
    /// Number of iterations to run from the resume point.
    #[arg(required_unless_present = "completion")]
    pub iterations: Option<u64>,

    /// Histogram output file, one counter per line.
    #[arg(required_unless_present = "completion")]
    pub bins_file: Option<PathBuf>,

    /// Checkpoint file, read at startup when present.
    #[arg(required_unless_present = "completion")]
    pub state_file: Option<PathBuf>,

    /// Fractional bits examined per iteration (2^D bins).
    #[arg(short = 'D', long, default_value_t = DEFAULT_DIGITS, env = "TIMES_DIGITS")]
    pub digits: u32,

    /// Iterations between checkpoints.
    #[arg(long, default_value_t = DEFAULT_CHECKPOINT_INTERVAL, env = "TIMES_CHECKPOINT_EVERY")]
    pub checkpoint_every: u64,

    /// Iterations between progress lines.
    #[arg(long, default_value_t = DEFAULT_PROGRESS_INTERVAL, env = "TIMES_PROGRESS_EVERY")]
    pub progress_every: u64,

    /// Starting iteration when no state file exists.
    #[arg(long, default_value_t = 0, env = "TIMES_START")]
    pub start: u64,

    /// Suppress progress lines on stdout.
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose logging.
    #[arg(short, long)]
    pub verbose: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments, returning clap's error instead of exiting.
    pub fn try_parse() -> Result<Self, clap::Error> {
        <Self as Parser>::try_parse()
    }

    /// The three positionals, when all are present.
    #[must_use]
    pub fn positionals(&self) -> Option<(u64, &Path, &Path)> {
        match (&self.iterations, &self.bins_file, &self.state_file) {
            (Some(n), Some(bins), Some(state)) => Some((*n, bins.as_path(), state.as_path())),
            _ => None,
        }
    }

    /// Run options; call `validate` before use.
    #[must_use]
    pub fn to_options(&self) -> Options {
        Options {
            digits: self.digits,
            checkpoint_interval: self.checkpoint_every,
            progress_interval: self.progress_every,
            start: self.start,
        }
    }
}
