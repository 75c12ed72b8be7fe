//! Run options and configuration.

use crate::constants::{
    DEFAULT_CHECKPOINT_INTERVAL, DEFAULT_DIGITS, DEFAULT_PROGRESS_INTERVAL, MAX_DIGITS,
};
use crate::error::TimesError;
use crate::indexer::BinIndexer;

/// Options for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Bits examined per iteration; `2^digits` bins.
    pub digits: u32,
    /// Iterations between checkpoints.
    pub checkpoint_interval: u64,
    /// Iterations between progress updates.
    pub progress_interval: u64,
    /// Cursor for a fresh run when no state file exists.
    pub start: u64,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            digits: DEFAULT_DIGITS,
            checkpoint_interval: DEFAULT_CHECKPOINT_INTERVAL,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
            start: 0,
        }
    }
}

impl Options {
    /// Check every option, returning the options unchanged when valid.
    pub fn validate(self) -> Result<Self, TimesError> {
        if self.digits == 0 || self.digits > MAX_DIGITS {
            return Err(TimesError::Config(format!(
                "digit count must be in 1..={MAX_DIGITS}, got {}",
                self.digits
            )));
        }
        if self.checkpoint_interval == 0 {
            return Err(TimesError::Config(
                "checkpoint interval must be positive".into(),
            ));
        }
        if self.progress_interval == 0 {
            return Err(TimesError::Config(
                "progress interval must be positive".into(),
            ));
        }
        Ok(self)
    }

    /// Indexer for the configured digit count.
    pub fn indexer(&self) -> Result<BinIndexer, TimesError> {
        BinIndexer::new(self.digits)
    }

    /// Number of bins, `2^digits`.
    #[must_use]
    pub fn bin_count(&self) -> usize {
        1usize << self.digits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options() {
        let opts = Options::default();
        assert_eq!(opts.digits, DEFAULT_DIGITS);
        assert_eq!(opts.checkpoint_interval, 100);
        assert_eq!(opts.progress_interval, 100_000);
        assert_eq!(opts.start, 0);
        assert_eq!(opts.bin_count(), 1024);
    }

    #[test]
    fn validate_accepts_defaults() {
        assert!(Options::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_values() {
        let bad = [
            Options {
                digits: 0,
                ..Default::default()
            },
            Options {
                digits: MAX_DIGITS + 1,
                ..Default::default()
            },
            Options {
                checkpoint_interval: 0,
                ..Default::default()
            },
            Options {
                progress_interval: 0,
                ..Default::default()
            },
        ];
        for opts in bad {
            assert!(
                matches!(opts.clone().validate(), Err(TimesError::Config(_))),
                "{opts:?}"
            );
        }
    }

    #[test]
    fn indexer_matches_bin_count() {
        let opts = Options {
            digits: 4,
            ..Default::default()
        };
        assert_eq!(opts.indexer().unwrap().bin_count(), opts.bin_count());
    }
}
