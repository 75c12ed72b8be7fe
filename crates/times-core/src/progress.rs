//! Progress tracking types and cancellation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::error::TimesError;

/// Progress update sent from the driver to observers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressUpdate {
    /// Iteration index reached (or the requested count for the final update).
    pub iteration: u64,
    /// Wall time since the run started.
    pub elapsed: Duration,
    /// Whether this is the final update.
    pub done: bool,
}

impl ProgressUpdate {
    /// A periodic update at `iteration`.
    #[must_use]
    pub fn new(iteration: u64, elapsed: Duration) -> Self {
        Self {
            iteration,
            elapsed,
            done: false,
        }
    }

    /// The final update; `requested` is the number of iterations asked for.
    #[must_use]
    pub fn done(requested: u64, elapsed: Duration) -> Self {
        Self {
            iteration: requested,
            elapsed,
            done: true,
        }
    }
}

/// Cooperative cancellation token using an atomic flag.
///
/// # Example
/// ```
/// use times_core::progress::CancellationToken;
///
/// let token = CancellationToken::new();
/// assert!(!token.is_cancelled());
///
/// token.cancel();
/// assert!(token.is_cancelled());
/// assert!(token.check_cancelled().is_err());
/// ```
#[derive(Clone, Debug)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Create a new cancellation token.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Check if cancellation has been requested.
    #[inline]
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// Check for cancellation, returning an error if cancelled.
    pub fn check_cancelled(&self) -> Result<(), TimesError> {
        if self.is_cancelled() {
            Err(TimesError::Cancelled)
        } else {
            Ok(())
        }
    }
}

impl Default for CancellationToken {
    fn default() -> Self {
        Self::new()
    }
}
