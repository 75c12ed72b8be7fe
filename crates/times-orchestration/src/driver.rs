//! The iteration driver.
//!
//! Each iteration bins the current value, counts the bin, then advances the
//! value. Checkpoints land on cursors divisible by the checkpoint interval
//! and once more at the end of the run, so a restart redoes at most one
//! interval of work.

use std::time::Instant;

use tracing::{debug, info, warn};

use times_core::checkpoint::Checkpoint;
use times_core::error::TimesError;
use times_core::fraction::BigFraction;
use times_core::histogram::Histogram;
use times_core::indexer::BinIndexer;
use times_core::observer::ProgressObserver;
use times_core::options::Options;
use times_core::progress::{CancellationToken, ProgressUpdate};
use times_core::seed;

use crate::interfaces::{CheckpointSink, RunReport};

/// Lifecycle of a driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    /// Built or restored, no run finished yet.
    Ready,
    /// Inside `run`.
    Running,
    /// The last run finished or was cancelled.
    Done,
}

/// Sole owner of the value and histogram for one instance.
#[derive(Debug)]
pub struct Driver {
    value: BigFraction,
    histogram: Histogram,
    indexer: BinIndexer,
    cursor: u64,
    options: Options,
    state: DriverState,
}

impl Driver {
    /// A driver at `options.start`, built without any prior checkpoint.
    pub fn new(options: Options) -> Result<Self, TimesError> {
        Self::resume(Checkpoint::fresh(), None, options)
    }

    /// Restore a driver from a checkpoint and, if available, the histogram
    /// saved alongside it.
    ///
    /// A fresh checkpoint starts at `options.start` with a generated seed
    /// (`[3]` when the start is 0).
    pub fn resume(
        checkpoint: Checkpoint,
        histogram: Option<Histogram>,
        options: Options,
    ) -> Result<Self, TimesError> {
        let options = options.validate()?;
        let indexer = options.indexer()?;

        let checkpoint = if checkpoint.is_fresh() {
            info!(start = options.start, "No checkpoint, starting fresh");
            seed::checkpoint_at(options.start)?
        } else {
            info!(
                cursor = checkpoint.cursor,
                words = checkpoint.words.len(),
                "Resuming from checkpoint"
            );
            checkpoint
        };
        let value = BigFraction::from_words(checkpoint.words)?;

        let histogram = match histogram {
            Some(h) if h.len() != indexer.bin_count() => {
                return Err(TimesError::Config(format!(
                    "saved histogram has {} bins, digit count {} needs {}",
                    h.len(),
                    indexer.digits(),
                    indexer.bin_count()
                )));
            }
            Some(h) => h,
            None => Histogram::new(indexer.bin_count()),
        };

        Ok(Self {
            value,
            histogram,
            indexer,
            cursor: checkpoint.cursor,
            options,
            state: DriverState::Ready,
        })
    }

    /// Next iteration to process.
    #[must_use]
    pub fn cursor(&self) -> u64 {
        self.cursor
    }

    /// Current value.
    #[must_use]
    pub fn value(&self) -> &BigFraction {
        &self.value
    }

    #[must_use]
    pub fn histogram(&self) -> &Histogram {
        &self.histogram
    }

    #[must_use]
    pub fn state(&self) -> DriverState {
        self.state
    }

    /// Checkpoint of the current cursor and value.
    #[must_use]
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint::capture(self.cursor, &self.value)
    }

    /// Process one iteration.
    #[inline]
    pub fn step(&mut self) {
        let bin = self.indexer.bin(&self.value, self.cursor);
        self.histogram.increment(bin);
        self.value.advance();
        self.cursor += 1;
    }

    /// Run `count` iterations from the current cursor.
    ///
    /// On cancellation the driver stops before the next iteration, writes a
    /// checkpoint at that exact cursor, and returns `TimesError::Cancelled`.
    pub fn run(
        &mut self,
        count: u64,
        sink: &mut dyn CheckpointSink,
        observer: &dyn ProgressObserver,
        cancel: &CancellationToken,
    ) -> Result<RunReport, TimesError> {
        let start = self.cursor;
        let end = start.checked_add(count).ok_or_else(|| {
            TimesError::Config(format!("{count} iterations from {start} overflow the cursor"))
        })?;
        let started = Instant::now();
        let mut checkpoints_written = 0u64;
        let mut last_saved = None;

        self.state = DriverState::Running;
        info!(
            start,
            end,
            words = self.value.len(),
            digits = self.indexer.digits(),
            "Run started"
        );

        while self.cursor < end {
            if let Err(cancelled) = cancel.check_cancelled() {
                warn!(cursor = self.cursor, "Cancellation requested, saving checkpoint");
                self.save(sink)?;
                self.state = DriverState::Done;
                return Err(cancelled);
            }

            let iteration = self.cursor;
            self.step();

            if iteration % self.options.progress_interval == 0 {
                observer.on_progress(&ProgressUpdate::new(iteration, started.elapsed()));
            }
            if self.cursor % self.options.checkpoint_interval == 0 {
                self.save(sink)?;
                checkpoints_written += 1;
                last_saved = Some(self.cursor);
            }
        }

        if last_saved != Some(self.cursor) {
            self.save(sink)?;
            checkpoints_written += 1;
        }

        let elapsed = started.elapsed();
        observer.on_progress(&ProgressUpdate::done(count, elapsed));
        self.state = DriverState::Done;

        Ok(RunReport {
            start,
            end: self.cursor,
            requested: count,
            elapsed,
            checkpoints_written,
            words: self.value.len(),
        })
    }

    fn save(&self, sink: &mut dyn CheckpointSink) -> Result<(), TimesError> {
        sink.save(self.cursor, self.value.words(), &self.histogram)?;
        debug!(
            cursor = self.cursor,
            words = self.value.len(),
            "Checkpoint written"
        );
        Ok(())
    }
}
