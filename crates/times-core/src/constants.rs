//! Constants for the packed word layout, binning, and run cadence.

/// Number of value bits stored in each word.
pub const WORD_BITS: u32 = 63;

/// Bit 63 of a word. Only ever set transiently while a word is being updated.
pub const MARKER_BIT: u64 = 1 << WORD_BITS;

/// Mask of the 63 value bits of a word.
pub const WORD_MASK: u64 = MARKER_BIT - 1;

/// The value held by a fresh run at iteration 0.
pub const SEED_WORD: u64 = 3;

/// Default number of fractional bits examined per iteration.
pub const DEFAULT_DIGITS: u32 = 10;

/// Largest accepted digit count (2^24 bins, 128 MiB of counters).
pub const MAX_DIGITS: u32 = 24;

/// Default number of iterations between checkpoints.
pub const DEFAULT_CHECKPOINT_INTERVAL: u64 = 100;

/// Default number of iterations between progress lines.
pub const DEFAULT_PROGRESS_INTERVAL: u64 = 100_000;

/// Exit codes for the `times` binary.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Wrong or unparseable command-line arguments.
    pub const ERROR_USAGE: i32 = 1;
    /// Any other failure.
    pub const ERROR_GENERIC: i32 = 2;
    /// A state or bins file could not be parsed.
    pub const ERROR_CHECKPOINT: i32 = 3;
    /// A state or bins file could not be read or written.
    pub const ERROR_IO: i32 = 4;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 5;
    /// Run cancelled by user (Ctrl+C).
    pub const ERROR_CANCELED: i32 = 130;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_and_mask_partition_the_word() {
        assert_eq!(MARKER_BIT | WORD_MASK, u64::MAX);
        assert_eq!(MARKER_BIT & WORD_MASK, 0);
        assert_eq!(WORD_MASK.count_ones(), WORD_BITS);
    }

    #[test]
    fn default_digits_within_range() {
        assert!(DEFAULT_DIGITS >= 1 && DEFAULT_DIGITS <= MAX_DIGITS);
    }
}
