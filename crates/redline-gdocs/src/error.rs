//! Google API error types.

use thiserror::Error;

/// Errors that can occur when talking to Google Docs or Drive.
#[derive(Debug, Error)]
pub enum GdocsError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by Google.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// No file id could be found in the given URL.
    #[error("could not find a Google file ID in {0:?}")]
    InvalidUrl(String),

    /// Failed to parse an API response.
    #[error("parse error: {0}")]
    Parse(String),

    /// No access token was configured.
    #[error("no Google access token configured")]
    MissingToken,
}
