//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    auth::{AuthService, HttpAuthService},
    catalog::{CatalogService, HttpCatalogService},
    config::ApiConfig,
    http,
    session::SessionStore,
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to build HTTP client")]
    HttpClient(#[source] reqwest::Error),
}

/// Backend services shared by every command.
#[derive(Clone)]
pub struct AppContext {
    pub catalog: Arc<dyn CatalogService>,
    pub auth: Arc<dyn AuthService>,
}

impl AppContext {
    /// Build application context against the configured backend.
    ///
    /// # Errors
    ///
    /// Returns an error when the HTTP client cannot be created.
    pub fn from_config(config: &ApiConfig) -> Result<Self, AppInitError> {
        let client = http::client(config).map_err(AppInitError::HttpClient)?;

        Ok(Self {
            catalog: Arc::new(HttpCatalogService::new(config.clone(), client.clone())),
            auth: Arc::new(HttpAuthService::new(config.clone(), client)),
        })
    }

    /// A fresh, signed-out session backed by this context's auth service.
    #[must_use]
    pub fn session_store(&self) -> SessionStore {
        SessionStore::new(Arc::clone(&self.auth))
    }
}
