//! `BigFraction`: the running value of (3/2)^n packed into 63-bit words.
//!
//! Words are stored least significant first and each holds 63 value bits,
//! so the represented integer is `sum(words[i] << (63 * i))`. Bit 63 of a
//! word is a marker used only while `advance` runs; it is always clear at
//! rest.
//!
//! `advance` multiplies the stored integer by 3. The division by 2 is never
//! performed: the radix point instead moves up one bit per iteration, which
//! is why [`BinIndexer`](crate::indexer::BinIndexer) reads its window at the
//! iteration index. After `n` advances from the seed the words hold exactly
//! `3^(n+1)`.

use num_bigint::BigUint;

use crate::constants::{MARKER_BIT, SEED_WORD, WORD_BITS};

/// Reasons a word sequence cannot be adopted as a `BigFraction`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WordError {
    /// No words at all.
    #[error("word sequence is empty")]
    Empty,

    /// A word has its marker bit set.
    #[error("word {index} ({value}) does not fit in 63 bits")]
    MarkerSet {
        /// Position of the offending word.
        index: usize,
        /// Its value.
        value: u64,
    },

    /// The most significant word is zero.
    #[error("most significant word (index {index}) is zero")]
    ZeroTop {
        /// Position of the top word.
        index: usize,
    },
}

/// Append-only packed representation of the current power.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BigFraction {
    words: Vec<u64>,
}

impl BigFraction {
    /// The value at iteration 0: a single word holding 3.
    #[must_use]
    pub fn seed() -> Self {
        Self {
            words: vec![SEED_WORD],
        }
    }

    /// Adopt a restored word sequence.
    ///
    /// Rejects an empty sequence, any word with bit 63 set, and a zero
    /// most significant word.
    pub fn from_words(words: Vec<u64>) -> Result<Self, WordError> {
        match words.last() {
            None => return Err(WordError::Empty),
            Some(0) => {
                return Err(WordError::ZeroTop {
                    index: words.len() - 1,
                })
            }
            Some(_) => {}
        }
        if let Some((index, &value)) = words
            .iter()
            .enumerate()
            .find(|&(_, &w)| w & MARKER_BIT != 0)
        {
            return Err(WordError::MarkerSet { index, value });
        }
        Ok(Self { words })
    }

    /// Advance one iteration: multiply the stored integer by 3 in place.
    ///
    /// Each word is doubled (the shift chain) and added to itself (the carry
    /// chain). Both chains spill at most one bit into the next word, and a
    /// final spill appends one word holding 1 or 2.
    pub fn advance(&mut self) {
        let mut shifted_bit = 0u64;
        let mut carry_bit = 0u64;

        for word in &mut self.words {
            let mut shifted = (*word << 1) + shifted_bit;
            if shifted & MARKER_BIT != 0 {
                shifted ^= MARKER_BIT;
                shifted_bit = 1;
            } else {
                shifted_bit = 0;
            }

            // word < 2^63 and shifted < 2^63, so the sum cannot leave u64.
            let mut next = *word + shifted + carry_bit;
            if next & MARKER_BIT != 0 {
                next ^= MARKER_BIT;
                carry_bit = 1;
            } else {
                carry_bit = 0;
            }

            *word = next;
        }

        if shifted_bit == 1 || carry_bit == 1 {
            self.words.push(shifted_bit + carry_bit);
        }
    }

    /// Word at `index`, or 0 past the most significant word.
    #[inline]
    #[must_use]
    pub fn word(&self, index: u64) -> u64 {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.words.get(i))
            .copied()
            .unwrap_or(0)
    }

    /// The word sequence, least significant first.
    #[must_use]
    pub fn words(&self) -> &[u64] {
        &self.words
    }

    /// Number of words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; a `BigFraction` holds at least one word.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Consume into the raw word sequence.
    #[must_use]
    pub fn into_words(self) -> Vec<u64> {
        self.words
    }

    /// Reassemble the stored integer.
    #[must_use]
    pub fn to_biguint(&self) -> BigUint {
        self.words
            .iter()
            .rev()
            .fold(BigUint::default(), |acc, &w| (acc << WORD_BITS) + w)
    }
}

impl Default for BigFraction {
    fn default() -> Self {
        Self::seed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::WORD_MASK;

    fn advanced(n: usize) -> BigFraction {
        let mut value = BigFraction::seed();
        for _ in 0..n {
            value.advance();
        }
        value
    }

    #[test]
    fn seed_is_three() {
        assert_eq!(BigFraction::seed().words(), &[3]);
        assert_eq!(BigFraction::default(), BigFraction::seed());
    }

    #[test]
    fn first_advances() {
        assert_eq!(advanced(1).words(), &[9]);
        assert_eq!(advanced(2).words(), &[27]);
        assert_eq!(advanced(5).words(), &[729]);
    }

    #[test]
    fn spills_into_second_word() {
        // 3^39 still fits in 63 bits, 3^40 does not.
        assert_eq!(advanced(38).len(), 1);
        let value = advanced(39);
        assert_eq!(value.words(), &[2_934_293_422_202_152_993, 1]);
        assert_eq!(advanced(40).words(), &[8_802_880_266_606_458_979, 3]);
    }

    #[test]
    fn appended_word_can_be_two() {
        // Both chains spill out of the top word.
        let mut value = BigFraction::from_words(vec![WORD_MASK]).unwrap();
        value.advance();
        assert_eq!(value.words(), &[WORD_MASK - 2, 2]);
        assert_eq!(
            value.to_biguint(),
            BigUint::from(WORD_MASK) * BigUint::from(3u32)
        );
    }

    #[test]
    fn carry_ripples_through_full_words() {
        let mut value = BigFraction::from_words(vec![WORD_MASK, WORD_MASK, 1]).unwrap();
        let expected = value.to_biguint() * BigUint::from(3u32);
        value.advance();
        assert_eq!(value.to_biguint(), expected);
        assert!(value.words().iter().all(|&w| w & MARKER_BIT == 0));
        assert_eq!(value.len(), 3);
    }

    #[test]
    fn matches_power_of_three() {
        let value = advanced(300);
        assert_eq!(value.to_biguint(), BigUint::from(3u32).pow(301));
    }

    #[test]
    fn from_words_rejects_empty() {
        assert_eq!(BigFraction::from_words(Vec::new()), Err(WordError::Empty));
    }

    #[test]
    fn from_words_rejects_marker_bit() {
        let err = BigFraction::from_words(vec![1, MARKER_BIT | 5]).unwrap_err();
        assert_eq!(
            err,
            WordError::MarkerSet {
                index: 1,
                value: MARKER_BIT | 5
            }
        );
    }

    #[test]
    fn from_words_rejects_zero_top_word() {
        assert_eq!(
            BigFraction::from_words(vec![7, 0]),
            Err(WordError::ZeroTop { index: 1 })
        );
        assert_eq!(
            BigFraction::from_words(vec![0]),
            Err(WordError::ZeroTop { index: 0 })
        );
        // Zero is fine below the top.
        assert!(BigFraction::from_words(vec![0, 0, 5]).is_ok());
    }

    #[test]
    fn word_beyond_end_is_zero() {
        let value = BigFraction::seed();
        assert_eq!(value.word(0), 3);
        assert_eq!(value.word(1), 0);
        assert_eq!(value.word(u64::MAX), 0);
    }
}
