//! Google Docs / Drive access.

use serde::{Deserialize, Serialize};

fn default_docs_api_base() -> String {
    String::from("https://docs.googleapis.com/v1")
}

fn default_drive_api_base() -> String {
    String::from("https://www.googleapis.com/drive/v3")
}

const fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GoogleConfig {
    /// OAuth bearer token with Drive read and Docs write scopes.
    #[serde(default)]
    pub access_token: String,

    #[serde(default = "default_docs_api_base")]
    pub docs_api_base: String,

    #[serde(default = "default_drive_api_base")]
    pub drive_api_base: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for GoogleConfig {
    fn default() -> Self {
        Self {
            access_token: String::new(),
            docs_api_base: default_docs_api_base(),
            drive_api_base: default_drive_api_base(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl GoogleConfig {
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.access_token.trim().is_empty()
    }
}
