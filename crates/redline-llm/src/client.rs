//! Chat-completions text producer.

use std::time::Duration;

use redline_config::{LlmConfig, ResponseFormat};
use redline_engine::collaborators::{ProduceRequest, TextProducer};
use serde::Deserialize;
use serde_json::Value;

use crate::error::LlmError;
use crate::http::check_response;
use crate::request::ChatRequest;
use crate::sse::SseAccumulator;

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: CompletionMessage,
}

#[derive(Debug, Deserialize)]
struct CompletionMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Text of the first choice of a non-streamed completion; empty when absent.
fn completion_text(body: &str) -> Result<String, LlmError> {
    let response: CompletionResponse =
        serde_json::from_str(body).map_err(|e| LlmError::Parse(e.to_string()))?;
    Ok(response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .unwrap_or_default())
}

/// OpenAI-compatible chat-completions client.
///
/// Walks the configured response-format ladder: a format the endpoint
/// rejects with 400/422 moves on to the next one, any other failure is
/// returned as-is.
pub struct OpenAiProducer {
    http: reqwest::Client,
    api_key: String,
    endpoint: String,
    model: String,
    formats: Vec<ResponseFormat>,
}

impl OpenAiProducer {
    /// Build a producer from the `llm` config section.
    ///
    /// # Errors
    ///
    /// [`LlmError::MissingApiKey`] when no key is configured, or
    /// [`LlmError::Http`] if the HTTP client cannot be built.
    pub fn new(config: &LlmConfig) -> Result<Self, LlmError> {
        if !config.is_configured() {
            return Err(LlmError::MissingApiKey);
        }
        let http = reqwest::Client::builder()
            .user_agent(concat!("redline/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        let formats = if config.response_formats.is_empty() {
            vec![ResponseFormat::None]
        } else {
            config.response_formats.clone()
        };
        Ok(Self {
            http,
            api_key: config.api_key.trim().to_string(),
            endpoint: format!(
                "{}/chat/completions",
                config.base_url.trim_end_matches('/')
            ),
            model: config.model.clone(),
            formats,
        })
    }

    async fn complete(&self, body: &ChatRequest<'_>) -> Result<String, LlmError> {
        let resp = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await?;
        let mut resp = check_response(resp).await?;

        if !body.stream {
            return completion_text(&resp.text().await?);
        }

        let mut acc = SseAccumulator::new();
        while let Some(chunk) = resp.chunk().await? {
            acc.push(&chunk)?;
            if acc.is_done() {
                break;
            }
        }
        acc.finish()
    }

    async fn produce_text(&self, request: &ProduceRequest<'_>) -> Result<String, LlmError> {
        let schema: &Value = request.schema_hint;
        for (rung, format) in self.formats.iter().enumerate() {
            let body = ChatRequest::new(
                &self.model,
                request.system_prompt,
                request.user_message,
                request.stream,
            )
            .with_format(*format, schema);

            match self.complete(&body).await {
                Ok(text) => {
                    tracing::info!(
                        model = %self.model,
                        ?format,
                        stream = request.stream,
                        chars = text.len(),
                        "model output received"
                    );
                    return Ok(text);
                }
                Err(error) if error.is_rejected_request() && rung + 1 < self.formats.len() => {
                    tracing::warn!(?format, %error, "response format rejected; trying next");
                }
                Err(error) => return Err(error),
            }
        }
        Err(LlmError::NoAcceptedFormat {
            tried: self.formats.len(),
        })
    }
}

impl TextProducer for OpenAiProducer {
    type Error = LlmError;

    async fn produce(&self, request: &ProduceRequest<'_>) -> Result<String, LlmError> {
        self.produce_text(request).await
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn producer_requires_a_key() {
        assert!(matches!(
            OpenAiProducer::new(&LlmConfig::default()),
            Err(LlmError::MissingApiKey)
        ));
    }

    #[test]
    fn endpoint_and_empty_ladder() {
        let config = LlmConfig {
            api_key: "sk-test".into(),
            base_url: "http://localhost:11434/v1/".into(),
            response_formats: Vec::new(),
            ..LlmConfig::default()
        };
        let producer = OpenAiProducer::new(&config).unwrap();
        assert_eq!(producer.endpoint, "http://localhost:11434/v1/chat/completions");
        assert_eq!(producer.formats, vec![ResponseFormat::None]);
    }

    #[test]
    fn non_streamed_completion_text() {
        let body = r#"{"id":"c1","choices":[{"index":0,"message":{"role":"assistant","content":"{\"plan_id\":\"p\"}"}}]}"#;
        assert_eq!(completion_text(body).unwrap(), r#"{"plan_id":"p"}"#);
        assert_eq!(completion_text(r#"{"choices":[]}"#).unwrap(), "");
        assert!(matches!(completion_text("<html>"), Err(LlmError::Parse(_))));
    }
}
