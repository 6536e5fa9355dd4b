//! Errors raised while talking to the backend.
//!
//! They stay inside the port library and are mapped to `MappedErrors` at the
//! transport boundary.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransportError {
    /// The backend answered with a non success status.
    #[error("Backend request failed with status {status}: {url}")]
    RequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// The configured backend URL cannot carry endpoint paths.
    #[error("Invalid backend base URL: {url}")]
    InvalidBaseUrl { url: String },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_failed_error_message() {
        let error = TransportError::RequestFailed {
            status: 500,
            url: "http://localhost:8080/modularise".to_string(),
        };

        let msg = error.to_string();
        assert!(msg.contains("500"));
        assert!(msg.contains("/modularise"));
    }
}
