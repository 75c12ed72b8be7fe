//! Application entry point and dispatch.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, info};

use times_cli::presenter::StdoutProgress;
use times_core::observer::ProgressSubject;
use times_core::observers::LoggingObserver;
use times_core::progress::CancellationToken;
use times_orchestration::driver::Driver;
use times_store::FileStore;

use crate::config::AppConfig;
use crate::version::full_version;

/// Minimum spacing of progress log events.
const LOG_INTERVAL_MS: u64 = 5_000;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        times_cli::completion::write_completion::<AppConfig>(shell, &mut std::io::stdout());
        return Ok(());
    }

    let (iterations, bins, state) = config
        .positionals()
        .context("iteration count, bins file and state file are required")?;
    run_cli(config, iterations, bins, state)
}

fn run_cli(config: &AppConfig, iterations: u64, bins: &Path, state: &Path) -> Result<()> {
    info!(version = %full_version(), "Starting");
    let options = config.to_options().validate()?;

    let mut store = FileStore::new(bins, state, options.bin_count());
    let (checkpoint, histogram) = store.load()?;
    let mut driver = Driver::resume(checkpoint, histogram, options)?;

    let cancel = CancellationToken::new();
    ctrlc_handler(cancel.clone())?;

    let subject = ProgressSubject::new();
    subject.register(Arc::new(StdoutProgress::new(config.quiet)));
    subject.register(Arc::new(LoggingObserver::new(LOG_INTERVAL_MS)));
    debug!(observers = subject.count(), quiet = config.quiet, "Progress observers registered");

    let report = driver.run(iterations, &mut store, &subject, &cancel)?;
    info!(
        start = report.start,
        end = report.end,
        checkpoints = report.checkpoints_written,
        words = report.words,
        elapsed_secs = report.elapsed.as_secs_f64(),
        "Run complete"
    );
    Ok(())
}

fn ctrlc_handler(cancel: CancellationToken) -> Result<()> {
    ctrlc::set_handler(move || {
        cancel.cancel();
    })
    .context("installing Ctrl+C handler")
}
