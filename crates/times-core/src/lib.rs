//! # times-core
//!
//! Core library for `times`, which bins the fractional bits of (3/2)^n.
//! Holds the packed 63-bit word representation and its in-place update,
//! the cross-word bin extractor, the histogram, and the checkpoint record.

pub mod checkpoint;
pub mod constants;
pub mod error;
pub mod fraction;
pub mod histogram;
pub mod indexer;
pub mod observer;
pub mod observers;
pub mod options;
pub mod progress;
pub mod seed;

// Re-exports
pub use checkpoint::Checkpoint;
pub use constants::{
    exit_codes, DEFAULT_CHECKPOINT_INTERVAL, DEFAULT_DIGITS, DEFAULT_PROGRESS_INTERVAL,
    MAX_DIGITS, WORD_BITS,
};
pub use error::TimesError;
pub use fraction::{BigFraction, WordError};
pub use histogram::Histogram;
pub use indexer::BinIndexer;
pub use observer::{ProgressObserver, ProgressSubject};
pub use options::Options;
pub use progress::{CancellationToken, ProgressUpdate};

/// Bin the first `iterations` values of the sequence from the seed.
///
/// This is a convenience function for simple use cases. For checkpointing,
/// progress, and cancellation, use the driver in `times-orchestration`.
///
/// # Example
/// ```
/// let hist = times_core::histogram_from_seed(4, 100).unwrap();
/// assert_eq!(hist.len(), 16);
/// assert_eq!(hist.total(), 100);
/// ```
pub fn histogram_from_seed(digits: u32, iterations: u64) -> Result<Histogram, TimesError> {
    let indexer = BinIndexer::new(digits)?;
    let mut value = BigFraction::seed();
    let mut hist = Histogram::new(indexer.bin_count());
    for n in 0..iterations {
        hist.increment(indexer.bin(&value, n));
        value.advance();
    }
    Ok(hist)
}
