//! Version information.

/// Get the version string.
#[must_use]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Version line logged at startup, e.g. `times 0.1.0 (word size 63)`.
#[must_use]
pub fn full_version() -> String {
    format!(
        "times {} (word size {})",
        version(),
        times_core::constants::WORD_BITS
    )
}
