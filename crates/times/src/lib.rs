//! times library: application logic for the `times` binary.

pub mod app;
pub mod config;
pub mod errors;
pub mod version;
