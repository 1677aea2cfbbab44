//! Shared HTTP client

use reqwest::Client;

use crate::config::ApiConfig;

/// Build the client shared by the backend services.
///
/// # Errors
///
/// Returns an error if the TLS backend cannot be initialised.
pub fn client(config: &ApiConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(config.request_timeout())
        .user_agent(concat!("bistro-app/", env!("CARGO_PKG_VERSION")))
        .build()
}
