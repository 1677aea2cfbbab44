//! Client configuration

use clap::Args;

mod api;
mod logging;

pub use api::ApiConfig;
pub use logging::{LogFormat, LoggingConfig};

/// Settings shared by every command of the terminal client.
#[derive(Debug, Clone, Args)]
pub struct AppConfig {
    /// Backend connection settings.
    #[command(flatten)]
    pub api: ApiConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,
}

/// Load `.env` into the process environment if present.
pub fn load_dotenv() {
    // A missing .env file is not an error.
    _ = dotenvy::dotenv();
}
