//! Error types for the Baynana API client.

use thiserror::Error;

/// Result type for Baynana API client operations.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Baynana API client errors.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Base URL or endpoint path could not be joined into a URL
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Request never produced a response (connection refused, DNS, timeout)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Response arrived with a non-2xx status
    #[error("API error ({status}): {}", .message.as_deref().unwrap_or("no message"))]
    Status { status: u16, message: Option<String> },

    /// 2xx response whose body did not match the expected payload
    #[error("Parse error: {0}")]
    Parse(String),
}

impl ApiError {
    /// HTTP status, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    pub fn is_server_error(&self) -> bool {
        matches!(self.status(), Some(s) if s >= 500)
    }

    /// Message the backend put in the error body, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}
