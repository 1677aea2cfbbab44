//! Catalog errors.

use reqwest::StatusCode;
use thiserror::Error;

/// Catalog data could not be loaded. Never retried automatically.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("restaurant {0} not found")]
    NotFound(String),

    #[error("{resource} request failed with status {status}")]
    UnexpectedStatus {
        resource: &'static str,
        status: StatusCode,
    },

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
}
