//! Direct construction of the state at an arbitrary cursor.
//!
//! After `n` advances from the seed the stored integer is `3^(n+1)`, so an
//! instance assigned the range `[n, n + count)` can start from a computed
//! state instead of replaying `n` iterations.

use num_bigint::BigUint;
use num_traits::Zero;
use tracing::debug;

use crate::checkpoint::Checkpoint;
use crate::constants::{WORD_BITS, WORD_MASK};
use crate::error::TimesError;

/// Words of `3^(cursor + 1)`, least significant first.
#[allow(clippy::cast_possible_truncation)]
pub fn seed_words(cursor: u64) -> Result<Vec<u64>, TimesError> {
    let exponent = cursor
        .checked_add(1)
        .and_then(|e| u32::try_from(e).ok())
        .ok_or_else(|| TimesError::Config(format!("start cursor {cursor} is too large")))?;

    let mut rest = BigUint::from(3u32).pow(exponent);
    let mut words = Vec::with_capacity(rest.bits().div_ceil(u64::from(WORD_BITS)) as usize);
    while !rest.is_zero() {
        let low = rest.iter_u64_digits().next().unwrap_or(0);
        words.push(low & WORD_MASK);
        rest >>= WORD_BITS;
    }
    debug!(cursor, words = words.len(), "generated seed words");
    Ok(words)
}

/// A checkpoint positioned at `cursor`, as if `cursor` iterations had run.
pub fn checkpoint_at(cursor: u64) -> Result<Checkpoint, TimesError> {
    Ok(Checkpoint {
        cursor,
        words: seed_words(cursor)?,
    })
}
