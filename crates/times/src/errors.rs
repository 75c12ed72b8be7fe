//! Error handling and exit codes.

use times_core::constants::exit_codes;
use times_core::error::TimesError;

/// Exit code for a run error.
pub fn handle_error(err: &TimesError) -> i32 {
    match err {
        TimesError::MalformedCheckpoint { .. } | TimesError::InvalidWords(_) => {
            exit_codes::ERROR_CHECKPOINT
        }
        TimesError::Io { .. } => exit_codes::ERROR_IO,
        TimesError::Config(_) => exit_codes::ERROR_CONFIG,
        TimesError::Cancelled => exit_codes::ERROR_CANCELED,
    }
}

/// Exit code for any error reaching `main`.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<TimesError>()
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use times_core::fraction::WordError;

    #[test]
    fn error_codes() {
        assert_eq!(handle_error(&TimesError::Cancelled), 130);
        assert_eq!(handle_error(&TimesError::Config("bad".into())), 5);
        assert_eq!(
            handle_error(&TimesError::malformed("state.txt", 2, "x")),
            3
        );
        assert_eq!(handle_error(&TimesError::InvalidWords(WordError::Empty)), 3);
        assert_eq!(
            handle_error(&TimesError::io(
                "bins.txt",
                std::io::Error::other("disk full")
            )),
            4
        );
    }

    #[test]
    fn anyhow_wrapping_keeps_code() {
        let err = anyhow::Error::from(TimesError::Cancelled);
        assert_eq!(exit_code(&err), 130);
        let err = anyhow::Error::from(TimesError::Config("bad".into())).context("starting run");
        assert_eq!(exit_code(&err), 5);
        assert_eq!(exit_code(&anyhow::anyhow!("other")), exit_codes::ERROR_GENERIC);
    }
}
