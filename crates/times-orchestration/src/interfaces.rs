//! Orchestration interfaces.

use std::time::Duration;

use times_core::checkpoint::Checkpoint;
use times_core::error::TimesError;
use times_core::histogram::Histogram;

/// Destination for periodic checkpoints.
pub trait CheckpointSink: Send {
    /// Persist the histogram and the words reached at `cursor`.
    fn save(&mut self, cursor: u64, words: &[u64], histogram: &Histogram)
        -> Result<(), TimesError>;
}

/// Summary of a finished run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    /// Cursor the run started at.
    pub start: u64,
    /// Cursor the run stopped at.
    pub end: u64,
    /// Iterations requested.
    pub requested: u64,
    /// Wall time of the run.
    pub elapsed: Duration,
    /// Number of checkpoints written, including the final one.
    pub checkpoints_written: u64,
    /// Word count of the value at `end`.
    pub words: usize,
}

/// Sink that keeps every checkpoint in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    /// Saved checkpoints with the histogram counters written alongside.
    pub saves: Vec<(Checkpoint, Vec<u64>)>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent save, if any.
    #[must_use]
    pub fn last(&self) -> Option<&(Checkpoint, Vec<u64>)> {
        self.saves.last()
    }
}

impl CheckpointSink for MemorySink {
    fn save(&mut self, cursor: u64, words: &[u64], histogram: &Histogram) -> Result<(), TimesError> {
        let checkpoint = Checkpoint {
            cursor,
            words: words.to_vec(),
        };
        self.saves.push((checkpoint, histogram.snapshot().to_vec()));
        Ok(())
    }
}

/// Sink that discards checkpoints.
pub struct NullSink;

impl CheckpointSink for NullSink {
    fn save(&mut self, _cursor: u64, _words: &[u64], _histogram: &Histogram) -> Result<(), TimesError> {
        Ok(())
    }
}
