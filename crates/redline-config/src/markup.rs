//! Colours used when marking up applied edits.

use redline_core::edits::{ColorTarget, MarkupPalette, RgbColor};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const fn default_removed() -> RgbColor {
    RgbColor::SOFT_RED
}

const fn default_added() -> RgbColor {
    RgbColor::SOFT_GREEN
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct MarkupConfig {
    /// `background` or `foreground`.
    #[serde(default)]
    pub target: ColorTarget,

    #[serde(default = "default_removed")]
    pub removed: RgbColor,

    #[serde(default = "default_added")]
    pub added: RgbColor,
}

impl Default for MarkupConfig {
    fn default() -> Self {
        Self {
            target: ColorTarget::default(),
            removed: default_removed(),
            added: default_added(),
        }
    }
}

impl MarkupConfig {
    #[must_use]
    pub const fn palette(&self) -> MarkupPalette {
        MarkupPalette {
            target: self.target,
            removed: self.removed,
            added: self.added,
        }
    }

    /// Every channel must lie in `0.0..=1.0`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the first bad channel.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, color) in [("removed", self.removed), ("added", self.added)] {
            for (channel, value) in [
                ("red", color.red),
                ("green", color.green),
                ("blue", color.blue),
            ] {
                if !(0.0..=1.0).contains(&value) {
                    return Err(ConfigError::InvalidValue {
                        field: format!("markup.{name}.{channel}"),
                        reason: format!("{value} is outside 0.0..=1.0"),
                    });
                }
            }
        }
        Ok(())
    }
}
