//! Error types for charlist.
//!
//! # Error Hierarchy
//!
//! - [`SourceError`] - a character page could not be fetched or decoded
//! - [`InvalidPage`](super::InvalidPage) - page cursor constructed from 0
//! - `ConfigError` / `LoggingError` / `TuiError` live next to the shell code
//!   that produces them
//!
//! # Error Recovery Strategy
//!
//! Source errors are **non-fatal**: the list controller logs them, returns to
//! idle and keeps the list it already has. There is no retry and no on-screen
//! error state. Configuration, logging and terminal errors are fatal at
//! startup and propagate to `main`.

use thiserror::Error;

/// Failure fetching a page from the character source.
///
/// Cloneable so completions can be replayed in tests and carried across the
/// fetcher channel without boxing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// Connection, DNS, TLS or timeout failure.
    #[error("Network error: {0}")]
    Network(String),

    /// Server answered with a non-success status.
    ///
    /// The Rick and Morty API answers 404 with `{"error":"There is nothing
    /// here"}` past the last page.
    #[error("Unexpected status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, possibly empty.
        body: String,
    },

    /// Response body was not a valid page envelope.
    #[error("Invalid response body: {0}")]
    Decode(String),

    /// Request URL could not be built from the configured base.
    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),
}

impl SourceError {
    /// True for the 404 the API returns past the last page.
    pub fn is_past_last_page(&self) -> bool {
        matches!(self, SourceError::Status { status: 404, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_display_includes_code_and_body() {
        let err = SourceError::Status {
            status: 500,
            body: "boom".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("500"));
        assert!(message.contains("boom"));
    }

    #[test]
    fn not_found_is_past_last_page() {
        let err = SourceError::Status {
            status: 404,
            body: r#"{"error":"There is nothing here"}"#.to_string(),
        };
        assert!(err.is_past_last_page());
        assert!(!SourceError::Network("reset".to_string()).is_past_last_page());
    }
}
