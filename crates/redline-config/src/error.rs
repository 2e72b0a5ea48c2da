//! Configuration error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A layer failed to parse or a value has the wrong type.
    #[error("could not load redline configuration: {0}")]
    Figment(#[from] figment::Error),

    /// A command needs credentials that no layer supplied.
    #[error("'{section}' is not configured; set {env_var} or {section}.{field} in config.toml")]
    NotConfigured {
        section: &'static str,
        field: &'static str,
        env_var: &'static str,
    },

    /// A loaded value is outside its accepted range.
    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}
