//! Chat-completions request bodies.

use redline_config::ResponseFormat;
use redline_schema::PLAN_SCHEMA_NAME;
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage<'a> {
    pub role: &'static str,
    pub content: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: [ChatMessage<'a>; 2],
    pub stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<Value>,
}

impl<'a> ChatRequest<'a> {
    #[must_use]
    pub fn new(model: &'a str, system: &'a str, user: &'a str, stream: bool) -> Self {
        Self {
            model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            stream,
            response_format: None,
        }
    }

    /// Constrain the output with `format`, using `schema` for
    /// [`ResponseFormat::JsonSchema`].
    #[must_use]
    pub fn with_format(mut self, format: ResponseFormat, schema: &Value) -> Self {
        self.response_format = response_format(format, schema);
        self
    }
}

/// The `response_format` object for one rung of the ladder.
#[must_use]
pub fn response_format(format: ResponseFormat, schema: &Value) -> Option<Value> {
    match format {
        ResponseFormat::JsonSchema => Some(json!({
            "type": "json_schema",
            "json_schema": {
                "name": PLAN_SCHEMA_NAME,
                "schema": schema,
                "strict": false,
            }
        })),
        ResponseFormat::JsonObject => Some(json!({"type": "json_object"})),
        ResponseFormat::None => None,
    }
}
