//! # times-cli
//!
//! CLI output, progress lines, styled errors, and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod ui;

pub use presenter::{ProgressPrinter, StdoutProgress};
