//! Transport-specific error types for data service calls.
//!
//! These errors wrap reqwest and decoding failures and are converted to the
//! transport-agnostic errors defined in `finsight_core` before reaching callers.

use finsight_core::errors::Error;
use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataServiceError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error {status}: {message}")]
    Status { status: StatusCode, message: String },

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Invalid client configuration: {0}")]
    InvalidConfig(String),
}

impl DataServiceError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            DataServiceError::Status { status, .. } => Some(*status),
            DataServiceError::Request(e) => e.status(),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for DataServiceError {
    fn from(err: serde_json::Error) -> Self {
        DataServiceError::Decode(err.to_string())
    }
}

impl From<DataServiceError> for Error {
    fn from(err: DataServiceError) -> Self {
        if err.status() == Some(StatusCode::NOT_FOUND) {
            return Error::NotFound(err.to_string());
        }
        match err {
            DataServiceError::InvalidConfig(msg) => Error::InvalidConfigValue(msg),
            DataServiceError::Decode(msg) => {
                Error::Unexpected(format!("Failed to decode response: {}", msg))
            }
            other => Error::DataService(other.to_string()),
        }
    }
}
