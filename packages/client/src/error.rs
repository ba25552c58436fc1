//! Client error taxonomy.
//!
//! Every failed action is terminal to that attempt and handled by the
//! calling surface; nothing here triggers retries.

use mechlink_lifecycle::TransitionError;
use thiserror::Error;

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Client-side error types
#[derive(Debug, Error)]
pub enum ClientError {
    /// Caught before any network call; no request was sent.
    #[error("{0}")]
    Validation(#[from] TransitionError),

    #[error("Authentication required: {0}")]
    Authentication(String),

    #[error("Network error, please try again")]
    Network(#[source] reqwest::Error),

    /// Backend rejected the action. `message` is the server's own error text
    /// when the response body carried one.
    #[error("{message}")]
    Server { status: u16, message: String },

    #[error("Invalid response from server: {0}")]
    InvalidResponse(String),

    /// A mutation for this record is already awaiting confirmation.
    #[error("This action is already being submitted")]
    InFlight,

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Session storage error: {0}")]
    Storage(String),
}

impl ClientError {
    /// Create an authentication error
    pub fn auth(msg: impl Into<String>) -> Self {
        Self::Authentication(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Create a server-rejection error
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server {
            status,
            message: message.into(),
        }
    }

    /// Check if this error was raised before any network call
    pub fn is_validation_error(&self) -> bool {
        matches!(self, ClientError::Validation(_))
    }

    /// Check if this is an authentication error
    pub fn is_auth_error(&self) -> bool {
        matches!(self, ClientError::Authentication(_))
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err)
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidResponse(err.to_string())
    }
}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        Self::Storage(err.to_string())
    }
}
