//! Text producer (OpenAI-compatible chat completions) configuration.

use serde::{Deserialize, Serialize};

/// One rung of the structured-output fallback ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseFormat {
    /// Constrain output to the plan's JSON Schema.
    JsonSchema,
    /// Constrain output to some JSON object.
    JsonObject,
    /// Rely on the prompt alone.
    None,
}

fn default_base_url() -> String {
    String::from("https://api.openai.com/v1")
}

fn default_model() -> String {
    String::from("gpt-5")
}

const fn default_timeout_secs() -> u64 {
    120
}

fn default_response_formats() -> Vec<ResponseFormat> {
    vec![
        ResponseFormat::JsonSchema,
        ResponseFormat::JsonObject,
        ResponseFormat::None,
    ]
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LlmConfig {
    #[serde(default)]
    pub api_key: String,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Tried in order until the endpoint accepts one.
    #[serde(default = "default_response_formats")]
    pub response_formats: Vec<ResponseFormat>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            model: default_model(),
            timeout_secs: default_timeout_secs(),
            response_formats: default_response_formats(),
        }
    }
}

impl LlmConfig {
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}
