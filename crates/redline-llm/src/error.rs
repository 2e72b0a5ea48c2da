//! Text producer error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LlmError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The stream reported an error event.
    #[error("model stream error: {0}")]
    Stream(String),

    /// Failed to parse a response body.
    #[error("parse error: {0}")]
    Parse(String),

    /// No API key was configured.
    #[error("no LLM API key configured")]
    MissingApiKey,

    /// Every configured response format was rejected.
    #[error("no response format accepted by the endpoint (tried {tried})")]
    NoAcceptedFormat { tried: usize },
}

impl LlmError {
    /// Whether the endpoint rejected the request shape rather than failing.
    ///
    /// Such errors move the producer to the next response format.
    #[must_use]
    pub const fn is_rejected_request(&self) -> bool {
        matches!(self, Self::Api { status: 400 | 422, .. })
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn api(status: u16) -> LlmError {
        LlmError::Api {
            status,
            message: "response_format not supported".into(),
        }
    }

    #[rstest]
    #[case(api(400), true)]
    #[case(api(422), true)]
    #[case(api(401), false)]
    #[case(api(429), false)]
    #[case(api(500), false)]
    #[case(LlmError::Stream("overloaded".into()), false)]
    #[case(LlmError::MissingApiKey, false)]
    fn only_shape_rejections_move_down_the_ladder(#[case] error: LlmError, #[case] rejected: bool) {
        assert_eq!(error.is_rejected_request(), rejected);
    }
}
