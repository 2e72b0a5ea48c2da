//! Shared HTTP response helpers for the Google clients.

use crate::error::GdocsError;

/// Return the response unchanged on success, otherwise
/// [`GdocsError::Api`] with the status code and response body.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, GdocsError> {
    if !resp.status().is_success() {
        return Err(GdocsError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}
