//! CLI output formatting.

use std::time::Duration;

use times_core::progress::ProgressUpdate;

/// Elapsed wall time as plain seconds, e.g. `12.5`.
#[must_use]
pub fn format_seconds(d: Duration) -> String {
    format!("{}", d.as_secs_f64())
}

/// The stdout progress line: `<iteration>: <elapsedSeconds>`.
#[must_use]
pub fn progress_line(update: &ProgressUpdate) -> String {
    format!("{}: {}", update.iteration, format_seconds(update.elapsed))
}
