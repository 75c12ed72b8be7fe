//! Concrete observer implementations.

use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, info};

use crate::observer::ProgressObserver;
use crate::progress::ProgressUpdate;

/// Observer that logs progress updates with temporal throttling.
pub struct LoggingObserver {
    min_interval_ms: u64,
    last_logged_ms: AtomicU64,
}

impl LoggingObserver {
    /// Create a new logging observer with the given minimum interval.
    #[must_use]
    pub fn new(min_interval_ms: u64) -> Self {
        Self {
            min_interval_ms,
            last_logged_ms: AtomicU64::new(0),
        }
    }
}

impl ProgressObserver for LoggingObserver {
    #[allow(clippy::cast_possible_truncation)]
    fn on_progress(&self, update: &ProgressUpdate) {
        let elapsed_ms = update.elapsed.as_millis() as u64;

        if update.done {
            info!(
                iterations = update.iteration,
                elapsed = format!("{:.3}s", update.elapsed.as_secs_f64()),
                "Run complete"
            );
            return;
        }

        let last = self.last_logged_ms.load(Ordering::Relaxed);
        if last != 0 && elapsed_ms.saturating_sub(last) < self.min_interval_ms {
            return;
        }
        debug!(
            iteration = update.iteration,
            elapsed = format!("{:.3}s", update.elapsed.as_secs_f64()),
            "Progress update"
        );
        self.last_logged_ms.store(elapsed_ms.max(1), Ordering::Relaxed);
    }
}

/// Observer that discards every update.
pub struct NoOpObserver;

impl NoOpObserver {
    /// Create a new no-op observer that discards all progress updates.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressObserver for NoOpObserver {
    fn on_progress(&self, _update: &ProgressUpdate) {}
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn noop_observer_accepts_updates() {
        let obs = NoOpObserver::default();
        obs.on_progress(&ProgressUpdate::new(5, Duration::ZERO));
        obs.on_progress(&ProgressUpdate::done(5, Duration::ZERO));
    }

    #[test]
    fn logging_observer_throttles() {
        let obs = LoggingObserver::new(1_000);
        obs.on_progress(&ProgressUpdate::new(0, Duration::from_millis(10)));
        assert_eq!(obs.last_logged_ms.load(Ordering::Relaxed), 10);

        // Inside the interval: not logged, marker unchanged.
        obs.on_progress(&ProgressUpdate::new(1, Duration::from_millis(500)));
        assert_eq!(obs.last_logged_ms.load(Ordering::Relaxed), 10);

        obs.on_progress(&ProgressUpdate::new(2, Duration::from_millis(1_200)));
        assert_eq!(obs.last_logged_ms.load(Ordering::Relaxed), 1_200);
    }

    #[test]
    fn done_update_leaves_throttle_alone() {
        let obs = LoggingObserver::new(1_000);
        obs.on_progress(&ProgressUpdate::new(0, Duration::from_millis(10)));
        obs.on_progress(&ProgressUpdate::done(10, Duration::from_millis(20)));
        assert_eq!(obs.last_logged_ms.load(Ordering::Relaxed), 10);

        // The throttle still measures from the last periodic event.
        obs.on_progress(&ProgressUpdate::new(5, Duration::from_millis(900)));
        assert_eq!(obs.last_logged_ms.load(Ordering::Relaxed), 10);
    }
}
