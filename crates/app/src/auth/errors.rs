//! Authentication errors.

use reqwest::StatusCode;
use thiserror::Error;

/// Login failures. None of these are fatal; the caller may retry.
#[derive(Debug, Error)]
pub enum AuthenticationError {
    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("login rejected by backend with status {0}")]
    Rejected(StatusCode),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
}

impl AuthenticationError {
    /// Classify a non-success login response.
    #[must_use]
    pub fn from_status(status: StatusCode) -> Self {
        match status {
            StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                Self::InvalidCredentials
            }
            other => Self::Rejected(other),
        }
    }
}

/// Registration failures.
#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("an account already exists for this email")]
    EmailInUse,

    #[error("invalid registration: {0}")]
    Invalid(String),

    #[error("registration rejected by backend with status {0}")]
    Rejected(StatusCode),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
}

impl RegistrationError {
    /// Classify a non-success registration response and its optional message.
    #[must_use]
    pub fn from_status(status: StatusCode, message: Option<String>) -> Self {
        match status {
            StatusCode::CONFLICT => Self::EmailInUse,
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                Self::Invalid(message.unwrap_or_else(|| status.to_string()))
            }
            other => Self::Rejected(other),
        }
    }
}
