//! # times-orchestration
//!
//! The run driver and the interfaces it persists through.

pub mod driver;
pub mod interfaces;

pub use driver::{Driver, DriverState};
pub use interfaces::{CheckpointSink, RunReport};
