//! File-backed checkpoint store.
//!
//! Saves write the bins file first and the state file second. Each write
//! is atomic on its own, but the pair is not: a crash between the two
//! renames leaves a bins file one interval ahead of the state file.
//! Resuming from such a pair would count that interval twice, so `load`
//! rejects any bins file holding more counts than the state cursor allows.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use times_core::checkpoint::Checkpoint;
use times_core::error::TimesError;
use times_core::histogram::Histogram;
use times_orchestration::interfaces::CheckpointSink;

use crate::{bins_file, state_file};

/// State and bins files for one instance.
#[derive(Debug, Clone)]
pub struct FileStore {
    bins_path: PathBuf,
    state_path: PathBuf,
    bin_count: usize,
}

impl FileStore {
    /// Create a store for the given files and bin count.
    pub fn new(
        bins_path: impl Into<PathBuf>,
        state_path: impl Into<PathBuf>,
        bin_count: usize,
    ) -> Self {
        Self {
            bins_path: bins_path.into(),
            state_path: state_path.into(),
            bin_count,
        }
    }

    #[must_use]
    pub fn bins_path(&self) -> &Path {
        &self.bins_path
    }

    #[must_use]
    pub fn state_path(&self) -> &Path {
        &self.state_path
    }

    /// Load the checkpoint, plus the histogram saved with it when resuming.
    ///
    /// A fresh start ignores any existing bins file, which is overwritten at
    /// the first save.
    pub fn load(&self) -> Result<(Checkpoint, Option<Histogram>), TimesError> {
        let checkpoint = state_file::read(&self.state_path)?;
        if checkpoint.is_fresh() {
            return Ok((checkpoint, None));
        }

        let histogram = bins_file::read(&self.bins_path, self.bin_count)?;
        if let Some(h) = &histogram {
            // A run never counts more iterations than its end cursor.
            if h.total() > checkpoint.cursor {
                return Err(TimesError::malformed(
                    &self.bins_path,
                    0,
                    format!(
                        "bins hold {} counts but the state file is at iteration {} \
                         (interrupted between the bins and state writes?)",
                        h.total(),
                        checkpoint.cursor
                    ),
                ));
            }
        }
        match &histogram {
            Some(h) => info!(
                path = %self.bins_path.display(),
                total = h.total(),
                "Restored histogram"
            ),
            None => warn!(
                path = %self.bins_path.display(),
                cursor = checkpoint.cursor,
                "Bins file missing, histogram restarts from zero"
            ),
        }
        Ok((checkpoint, histogram))
    }
}

impl CheckpointSink for FileStore {
    fn save(&mut self, cursor: u64, words: &[u64], histogram: &Histogram) -> Result<(), TimesError> {
        bins_file::write(&self.bins_path, histogram)?;
        state_file::write(&self.state_path, cursor, words)
    }
}
