//! Backend API Config

use std::time::Duration;

use clap::Args;

/// Backend connection settings.
#[derive(Debug, Clone, Args)]
pub struct ApiConfig {
    /// Backend origin, e.g. `https://api.example.com`
    #[arg(long = "api-url", env = "BISTRO_API_URL", default_value = "http://localhost:5000")]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[arg(long, env = "BISTRO_REQUEST_TIMEOUT_SECS", default_value_t = 10)]
    pub request_timeout_secs: u64,
}

impl ApiConfig {
    /// Settings for the given origin with the default timeout.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            request_timeout_secs: 10,
        }
    }

    /// Build an absolute URL for an API path such as `/api/menu`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Request timeout.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_without_double_slashes() {
        let config = ApiConfig::new("http://localhost:5000/");

        assert_eq!(
            config.endpoint("/api/menu"),
            "http://localhost:5000/api/menu"
        );
        assert_eq!(
            config.endpoint("api/restaurants"),
            "http://localhost:5000/api/restaurants"
        );
    }

    #[test]
    fn endpoint_keeps_path_prefix() {
        let config = ApiConfig::new("https://example.com/backend//");

        assert_eq!(
            config.endpoint("/api/auth/login"),
            "https://example.com/backend/api/auth/login"
        );
    }

    #[test]
    fn timeout_in_seconds() {
        assert_eq!(
            ApiConfig::new("http://x").request_timeout(),
            Duration::from_secs(10)
        );
    }
}
