//! The resumable checkpoint record.

use crate::fraction::BigFraction;

/// Iteration cursor plus the exact word sequence reached at that cursor.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Checkpoint {
    /// Next iteration to process.
    pub cursor: u64,
    /// Words of the value at `cursor`, least significant first.
    pub words: Vec<u64>,
}

impl Checkpoint {
    /// The "no prior checkpoint" record: cursor 0 and no words.
    #[must_use]
    pub fn fresh() -> Self {
        Self::default()
    }

    /// Snapshot `value` at `cursor`.
    #[must_use]
    pub fn capture(cursor: u64, value: &BigFraction) -> Self {
        Self {
            cursor,
            words: value.words().to_vec(),
        }
    }

    /// True when this record carries no words and the run starts from the seed.
    #[must_use]
    pub fn is_fresh(&self) -> bool {
        self.words.is_empty()
    }
}
