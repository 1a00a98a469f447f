// Error types shared by the transport layer and the public API.

use reqwest::StatusCode;
use thiserror::Error;

// --- Transport failures ---
// Raised by `Transport::perform_request` implementations.

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("[404] {message}")]
    NotFound { message: String },

    #[error("[{status}] {body}")]
    Status { status: StatusCode, body: String },

    #[error("Network request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Failed to build request URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl TransportError {
    /// True when the cluster reported that the addressed resource is missing.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            TransportError::NotFound { .. } => Some(StatusCode::NOT_FOUND),
            TransportError::Status { status, .. } => Some(*status),
            TransportError::Network(e) => e.status(),
            TransportError::UrlParse(_) => None,
        }
    }
}

// --- Public error ---

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("Invalid client configuration: {0}")]
    Config(String),
}

impl ApiError {
    pub(crate) fn missing(field: &str) -> Self {
        ApiError::InvalidArgument(format!("Required argument '{}' missing", field))
    }
}

impl From<url::ParseError> for ApiError {
    fn from(err: url::ParseError) -> Self {
        ApiError::Config(format!("invalid URL: {}", err))
    }
}
