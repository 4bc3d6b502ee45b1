//! Tracing/logging initialization.
//!
//! `RUST_LOG` wins over the configured filter, which wins over `info`.

use serde::Deserialize;
use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One JSON object per event, with timestamps.
    #[default]
    Json,
    /// Human-readable multi-line output for local runs.
    Pretty,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub format: LogFormat,
    /// `EnvFilter` directives used when `RUST_LOG` is unset.
    pub filter: Option<String>,
}

impl LogConfig {
    pub fn pretty() -> Self {
        Self { format: LogFormat::Pretty, ..Self::default() }
    }

    pub fn with_filter(mut self, directives: impl Into<String>) -> Self {
        self.filter = Some(directives.into());
        self
    }

    /// Directives used when the environment does not provide any.
    pub fn fallback_directives(&self) -> &str {
        self.filter
            .as_deref()
            .filter(|f| !f.trim().is_empty())
            .unwrap_or(DEFAULT_FILTER)
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(self.fallback_directives()))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Returns `false` when a global subscriber was already set.
pub fn init(config: &LogConfig) -> bool {
    let filter = config.env_filter();
    let installed = match config.format {
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .with_timer(tracing_subscriber::fmt::time::SystemTime)
            .with_target(false)
            .try_init(),
        LogFormat::Pretty => tracing_subscriber::fmt().with_env_filter(filter).pretty().try_init(),
    };
    installed.is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_to_json_at_info() {
        let cfg: LogConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg.format, LogFormat::Json);
        assert_eq!(cfg.fallback_directives(), "info");
    }

    #[test]
    fn explicit_filter_and_format() {
        let raw = r#"{"format": "pretty", "filter": "doudou_client=debug"}"#;
        let cfg: LogConfig = serde_json::from_str(raw).unwrap();
        assert_eq!(cfg, LogConfig::pretty().with_filter("doudou_client=debug"));
        assert_eq!(cfg.fallback_directives(), "doudou_client=debug");
    }

    #[test]
    fn blank_filter_uses_default() {
        assert_eq!(LogConfig::default().with_filter("  ").fallback_directives(), DEFAULT_FILTER);
    }

    #[test]
    fn second_init_is_a_no_op() {
        let cfg = LogConfig::default();
        init(&cfg);
        assert!(!init(&cfg));
    }
}
