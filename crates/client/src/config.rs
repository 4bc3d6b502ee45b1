//! Backend location and request budgets.

use std::time::Duration;

use serde::Deserialize;

/// Environment variable holding the API base URL.
pub const API_URL_VAR: &str = "DOUDOU_API_URL";
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000/api";
pub const DEFAULT_DASHBOARD_TIMEOUT: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "ApiConfigFile")]
pub struct ApiConfig {
    base_url: String,
    origin: String,
    dashboard_timeout: Duration,
}

#[derive(Deserialize)]
struct ApiConfigFile {
    #[serde(default = "default_base_url")]
    base_url: String,
    #[serde(default = "default_dashboard_timeout_ms")]
    dashboard_timeout_ms: u64,
}

fn default_base_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_dashboard_timeout_ms() -> u64 {
    DEFAULT_DASHBOARD_TIMEOUT.as_millis() as u64
}

impl From<ApiConfigFile> for ApiConfig {
    fn from(file: ApiConfigFile) -> Self {
        ApiConfig::new(file.base_url)
            .with_dashboard_timeout(Duration::from_millis(file.dashboard_timeout_ms))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl ApiConfig {
    /// `base_url` loses any trailing `/`; the backend origin is the base URL
    /// without its trailing `/api` segment.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim().trim_end_matches('/').to_string();
        let origin = base_url.strip_suffix("/api").unwrap_or(&base_url).to_string();
        Self {
            base_url,
            origin,
            dashboard_timeout: DEFAULT_DASHBOARD_TIMEOUT,
        }
    }

    /// Read [`API_URL_VAR`] from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ApiConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(API_URL_VAR).filter(|v| !v.trim().is_empty()) {
            Some(url) => Self::new(url),
            None => Self::default(),
        }
    }

    pub fn with_dashboard_timeout(mut self, timeout: Duration) -> Self {
        self.dashboard_timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn dashboard_timeout(&self) -> Duration {
        self.dashboard_timeout
    }

    /// Absolute URL for an API path such as `/catalog/products/`.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Absolute URL for an uploaded file. Absolute URLs pass through; paths
    /// starting with `/` hang off the origin, bare paths off `/media/`.
    pub fn media_url(&self, path: &str) -> String {
        if path.is_empty() {
            String::new()
        } else if path.starts_with("http") {
            path.to_string()
        } else if path.starts_with('/') {
            format!("{}{path}", self.origin)
        } else {
            format!("{}/media/{path}", self.origin)
        }
    }
}
