//! Application configuration: backend location plus logging.

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use doudou_client::ApiConfig;
use doudou_observability::{LogConfig, LogFormat};

/// Environment variable selecting `json` or `pretty` log output.
pub const LOG_FORMAT_VAR: &str = "DOUDOU_LOG_FORMAT";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub log: LogConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let format = match lookup(LOG_FORMAT_VAR).as_deref().map(str::trim) {
            Some("pretty") => LogFormat::Pretty,
            _ => LogFormat::Json,
        };
        Self {
            api: ApiConfig::from_lookup(&lookup),
            log: LogConfig { format, ..LogConfig::default() },
        }
    }

    /// Read a JSON config file; missing sections take their defaults.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("parsing config file {}", path.display()))
    }
}
