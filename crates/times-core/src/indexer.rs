//! Bin extraction from the packed bit stream.
//!
//! The words form one stream of 63-bit digits: bit `p` of the stream is bit
//! `p % 63` of word `p / 63`. For iteration `n` the window holds the `D`
//! stream bits `n, n-1, ..., n-D+1`, with bit `n` as the most significant
//! bit of the bin index. When the window crosses a word boundary its low
//! bits come from the top of the previous word. Positions below bit 0 (or
//! above the last word) read as zero.

use num_integer::Integer;

use crate::constants::{MAX_DIGITS, WORD_BITS};
use crate::error::TimesError;
use crate::fraction::BigFraction;

/// Maps the current value and iteration index to one of `2^D` bins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinIndexer {
    digits: u32,
    mask: u64,
}

impl BinIndexer {
    /// Create an indexer examining `digits` bits per iteration.
    pub fn new(digits: u32) -> Result<Self, TimesError> {
        if digits == 0 || digits > MAX_DIGITS {
            return Err(TimesError::Config(format!(
                "digit count must be in 1..={MAX_DIGITS}, got {digits}"
            )));
        }
        Ok(Self {
            digits,
            mask: (1u64 << digits) - 1,
        })
    }

    /// Number of bits examined per iteration.
    #[must_use]
    pub fn digits(&self) -> u32 {
        self.digits
    }

    /// Number of bins, `2^digits`.
    #[must_use]
    pub fn bin_count(&self) -> usize {
        1usize << self.digits
    }

    /// Bin of `value` at iteration `index`. Always below `bin_count()`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn bin(&self, value: &BigFraction, index: u64) -> usize {
        let (word_num, bit_num) = index.div_rem(&u64::from(WORD_BITS));
        // bit_num < 63
        let bit_num = bit_num as u32;
        let top = self.digits - 1;

        let bits = if bit_num >= top {
            let shift = bit_num - top;
            (value.word(word_num) & (self.mask << shift)) >> shift
        } else {
            let deficit = top - bit_num;
            let high = (value.word(word_num) & (self.mask >> deficit)) << deficit;
            let low = match word_num.checked_sub(1) {
                Some(prev) => {
                    let shift = WORD_BITS - deficit;
                    (value.word(prev) & (self.mask << shift)) >> shift
                }
                // Nothing below word 0: the window is zero-padded.
                None => 0,
            };
            high | low
        };

        bits as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::WORD_MASK;

    fn indexer(digits: u32) -> BinIndexer {
        BinIndexer::new(digits).unwrap()
    }

    #[test]
    fn bin_count_is_power_of_two() {
        assert_eq!(indexer(1).bin_count(), 2);
        assert_eq!(indexer(10).bin_count(), 1024);
        assert_eq!(indexer(MAX_DIGITS).bin_count(), 1 << MAX_DIGITS);
    }

    #[test]
    fn rejects_out_of_range_digits() {
        assert!(matches!(BinIndexer::new(0), Err(TimesError::Config(_))));
        assert!(matches!(
            BinIndexer::new(MAX_DIGITS + 1),
            Err(TimesError::Config(_))
        ));
    }

    #[test]
    fn seed_at_zero_is_zero_padded() {
        // Word 0 holds 0b11; bit 0 lands at the top of the window and the
        // nine bits below the stream start read as zero.
        let bin = indexer(10).bin(&BigFraction::seed(), 0);
        assert_eq!(bin, 0b10_0000_0000);
    }

    #[test]
    fn first_iterations_from_seed() {
        let idx = indexer(10);
        let mut value = BigFraction::seed();
        let mut bins = Vec::new();
        for n in 0..12 {
            bins.push(idx.bin(&value, n));
            value.advance();
        }
        assert_eq!(
            bins,
            [512, 256, 384, 64, 608, 400, 88, 644, 454, 681, 509, 764]
        );
    }

    #[test]
    fn window_inside_one_word() {
        let value = BigFraction::from_words(vec![0b1011_0000]).unwrap();
        // bits 7..=4 of word 0
        assert_eq!(indexer(4).bin(&value, 7), 0b1011);
        // bits 6..=3
        assert_eq!(indexer(4).bin(&value, 6), 0b0110);
    }

    #[test]
    fn window_spanning_two_words() {
        // Top two bits of word 0 set, word 1 bits 1..=0 = 0b10.
        let low = 0b11u64 << 61;
        let value = BigFraction::from_words(vec![low, 0b10]).unwrap();
        // index 64 = word 1 bit 1: window is w1[1], w1[0], w0[62], w0[61]
        assert_eq!(indexer(4).bin(&value, 64), 0b1011);
        // index 63 = word 1 bit 0: w1[0], w0[62], w0[61], w0[60]
        assert_eq!(indexer(4).bin(&value, 63), 0b0110);
    }

    #[test]
    fn full_words_saturate_the_window() {
        let value = BigFraction::from_words(vec![WORD_MASK, WORD_MASK]).unwrap();
        let idx = indexer(10);
        for index in 0..126 {
            let expected = if index < 9 {
                // Only index+1 real bits sit above the zero padding.
                ((1usize << (index + 1)) - 1) << (9 - index)
            } else {
                1023
            };
            assert_eq!(idx.bin(&value, index), expected, "index {index}");
        }
    }

    #[test]
    fn index_beyond_value_reads_zero() {
        let idx = indexer(10);
        assert_eq!(idx.bin(&BigFraction::seed(), 10_000), 0);
    }

    #[test]
    fn repeated_calls_are_stable() {
        let mut value = BigFraction::seed();
        for _ in 0..200 {
            value.advance();
        }
        let idx = indexer(10);
        let first = idx.bin(&value, 200);
        assert_eq!(idx.bin(&value, 200), first);
        assert!(first < idx.bin_count());
    }
}
