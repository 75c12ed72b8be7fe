//! # times-store
//!
//! Persistence for `times`: the state file (cursor plus words), the bins
//! file (one counter per line), and the `FileStore` checkpoint sink.

pub mod atomic;
pub mod bins_file;
pub mod state_file;
pub mod store;

pub use store::FileStore;
