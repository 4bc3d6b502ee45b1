//! Tracing subscriber setup shared by every Doudou binary and test harness.

/// Install the process-wide subscriber described by `config`.
///
/// Safe to call multiple times; only the first call installs anything.
pub fn init(config: &LogConfig) -> bool {
    tracing::init(config)
}

/// Subscriber configuration (filters, output format).
pub mod tracing;

pub use crate::tracing::{LogConfig, LogFormat, DEFAULT_FILTER};
