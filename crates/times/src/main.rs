//! times: histogram of the leading fractional bits of (3/2)^n.

use clap::error::ErrorKind;

use times_cli::ui::{print_error, print_warning};
use times_core::constants::exit_codes;
use times_core::error::TimesError;
use times_lib::{app, config, errors};

fn main() {
    let config = match config::AppConfig::try_parse() {
        Ok(config) => config,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            // Best effort: nothing useful can be done if stderr is closed.
            let _ = e.print();
            std::process::exit(exit_codes::ERROR_USAGE);
        }
    };

    // Initialize tracing
    let level = if config.verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    if let Err(err) = app::run(&config) {
        if matches!(err.downcast_ref::<TimesError>(), Some(TimesError::Cancelled)) {
            print_warning("run cancelled; checkpoint saved");
        } else {
            print_error(&format!("{err:#}"));
        }
        std::process::exit(errors::exit_code(&err));
    }
}
