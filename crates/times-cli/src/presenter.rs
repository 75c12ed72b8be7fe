//! Stdout progress presenter.

use std::io::{self, Write};

use parking_lot::Mutex;

use times_core::observer::ProgressObserver;
use times_core::progress::ProgressUpdate;

use crate::output::progress_line;

/// Writes each progress update as `<iteration>: <elapsedSeconds>`.
pub struct ProgressPrinter<W> {
    out: Mutex<W>,
    quiet: bool,
}

/// The presenter the binary registers.
pub type StdoutProgress = ProgressPrinter<io::Stdout>;

impl StdoutProgress {
    #[must_use]
    pub fn new(quiet: bool) -> Self {
        Self::with_writer(io::stdout(), quiet)
    }
}

impl<W: Write + Send> ProgressPrinter<W> {
    /// Presenter writing to `out`.
    pub fn with_writer(out: W, quiet: bool) -> Self {
        Self {
            out: Mutex::new(out),
            quiet,
        }
    }

    /// Give back the writer.
    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl<W: Write + Send> ProgressObserver for ProgressPrinter<W> {
    fn on_progress(&self, update: &ProgressUpdate) {
        if self.quiet {
            return;
        }
        let mut out = self.out.lock();
        // Progress lines are informational; a closed stdout must not stop the run.
        let _ = writeln!(out, "{}", progress_line(update)).and_then(|()| out.flush());
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn printed(quiet: bool, updates: &[ProgressUpdate]) -> String {
        let printer = ProgressPrinter::with_writer(Vec::new(), quiet);
        for update in updates {
            printer.on_progress(update);
        }
        String::from_utf8(printer.into_inner()).unwrap()
    }

    #[test]
    fn prints_one_line_per_update() {
        let out = printed(
            false,
            &[
                ProgressUpdate::new(0, Duration::ZERO),
                ProgressUpdate::new(100_000, Duration::from_millis(1_500)),
                ProgressUpdate::done(100_001, Duration::from_secs(2)),
            ],
        );
        assert_eq!(out, "0: 0\n100000: 1.5\n100001: 2\n");
    }

    #[test]
    fn quiet_prints_nothing() {
        let out = printed(
            true,
            &[
                ProgressUpdate::new(0, Duration::ZERO),
                ProgressUpdate::done(10, Duration::from_secs(1)),
            ],
        );
        assert!(out.is_empty());
    }
}
