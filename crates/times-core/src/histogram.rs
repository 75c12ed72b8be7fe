//! Per-bin counters accumulated over a run.

/// Fixed-size counter array indexed by bin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    counts: Vec<u64>,
}

impl Histogram {
    /// Create `bin_count` zeroed counters.
    #[must_use]
    pub fn new(bin_count: usize) -> Self {
        Self {
            counts: vec![0; bin_count],
        }
    }

    /// Adopt counters restored from a bins file.
    #[must_use]
    pub fn from_counts(counts: Vec<u64>) -> Self {
        Self { counts }
    }

    /// Count one more hit in `bin`.
    ///
    /// # Panics
    ///
    /// Panics if `bin >= self.len()`.
    #[inline]
    pub fn increment(&mut self, bin: usize) {
        self.counts[bin] += 1;
    }

    /// The counters in bin order.
    #[must_use]
    pub fn snapshot(&self) -> &[u64] {
        &self.counts
    }

    /// Number of bins.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counters.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }
}
