//! Auth service.

use async_trait::async_trait;
use bistro::session::User;
use mockall::automock;
use reqwest::Client;
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        AuthResponse, AuthenticationError, Credentials, ErrorBody, Registration,
        RegistrationError,
    },
    config::ApiConfig,
};

/// Auth endpoints served by the backend.
#[derive(Debug, Clone)]
pub struct HttpAuthService {
    config: ApiConfig,
    http: Client,
}

impl HttpAuthService {
    #[must_use]
    pub fn new(config: ApiConfig, http: Client) -> Self {
        Self { config, http }
    }
}

#[async_trait]
impl AuthService for HttpAuthService {
    #[instrument(skip_all, fields(email = %credentials.email))]
    async fn login(&self, credentials: &Credentials) -> Result<User, AuthenticationError> {
        let response = self
            .http
            .post(self.config.endpoint("/api/auth/login"))
            .json(credentials)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            warn!(%status, "login rejected");

            return Err(AuthenticationError::from_status(status));
        }

        let parsed: AuthResponse = response.json().await?;

        info!(user = %parsed.user.id, "login accepted");

        Ok(parsed.user)
    }

    #[instrument(skip_all, fields(email = %registration.email))]
    async fn register(&self, registration: &Registration) -> Result<User, RegistrationError> {
        let response = self
            .http
            .post(self.config.endpoint("/api/auth/register"))
            .json(registration)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body: ErrorBody = response.json().await.unwrap_or_default();

            warn!(%status, message = body.message.as_deref(), "registration rejected");

            return Err(RegistrationError::from_status(status, body.message));
        }

        let parsed: AuthResponse = response.json().await?;

        info!(user = %parsed.user.id, "account created");

        Ok(parsed.user)
    }
}

/// Backend authentication.
#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Exchange credentials for the authenticated user.
    async fn login(&self, credentials: &Credentials) -> Result<User, AuthenticationError>;

    /// Create an account and return it as the authenticated user.
    async fn register(&self, registration: &Registration) -> Result<User, RegistrationError>;
}
