//! # redline-config
//!
//! Layered configuration loading for Redline using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`REDLINE_*` prefix, `__` as separator)
//! 2. The conventional `OPENAI_API_KEY`, `OPENAI_MODEL` and
//!    `GOOGLE_ACCESS_TOKEN` variables
//! 3. Project-level `.redline/config.toml`
//! 4. User-level `~/.config/redline/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `REDLINE_LLM__MODEL` -> `llm.model`,
//! `REDLINE_GOOGLE__ACCESS_TOKEN` -> `google.access_token`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use redline_config::RedlineConfig;
//!
//! let config = RedlineConfig::load_with_dotenv().expect("config");
//!
//! if config.llm.is_configured() {
//!     println!("Model: {}", config.llm.model);
//! }
//! ```

mod error;
mod general;
mod google;
mod llm;
mod markup;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use google::GoogleConfig;
pub use llm::{LlmConfig, ResponseFormat};
pub use markup::MarkupConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Conventional variables honoured without the `REDLINE_` prefix.
const CONVENTIONAL_ENV: [(&str, &str); 3] = [
    ("OPENAI_API_KEY", "llm.api_key"),
    ("OPENAI_MODEL", "llm.model"),
    ("GOOGLE_ACCESS_TOKEN", "google.access_token"),
];

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RedlineConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub google: GoogleConfig,
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub markup: MarkupConfig,
}

impl RedlineConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`load_with_dotenv`](Self::load_with_dotenv)
    /// if you need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source cannot be parsed, or
    /// `ConfigError::InvalidValue` if a loaded value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// See [`load`](Self::load).
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".redline/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Conventional provider variables
        let names: Vec<&str> = CONVENTIONAL_ENV.iter().map(|(name, _)| *name).collect();
        figment = figment.merge(Env::raw().only(&names).map(|key| {
            CONVENTIONAL_ENV
                .iter()
                .find(|(name, _)| key == *name)
                .map_or_else(|| key.into(), |(_, path)| (*path).into())
        }));

        // Layer 4: Environment variables (highest priority)
        figment.merge(Env::prefixed("REDLINE_").split("__"))
    }

    /// Check values that deserialize fine but are unusable.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.general.section_marker.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "general.section_marker".into(),
                reason: "must not be blank".into(),
            });
        }
        self.markup.validate()
    }

    /// Fail unless the Google section has a token.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotConfigured` for section `google`.
    pub fn require_google(&self) -> Result<&GoogleConfig, ConfigError> {
        if self.google.is_configured() {
            Ok(&self.google)
        } else {
            Err(ConfigError::NotConfigured {
                section: "google",
                field: "access_token",
                env_var: "GOOGLE_ACCESS_TOKEN",
            })
        }
    }

    /// Fail unless the LLM section has an API key.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotConfigured` for section `llm`.
    pub fn require_llm(&self) -> Result<&LlmConfig, ConfigError> {
        if self.llm.is_configured() {
            Ok(&self.llm)
        } else {
            Err(ConfigError::NotConfigured {
                section: "llm",
                field: "api_key",
                env_var: "OPENAI_API_KEY",
            })
        }
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("redline").join("config.toml"))
    }

    /// Load `.env` from the workspace root, or the current directory.
    ///
    /// Silently does nothing if no `.env` is found.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            // crate -> crates/ -> workspace root
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        let _ = dotenvy::dotenv();
    }
}
