//! Edit operations issued against native index ranges.
//!
//! These are provider-neutral descriptions of the style/insert mutations a
//! document-mutation collaborator submits as one atomic batch.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Half-open range `[start, end)` in native document coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct NativeRange {
    pub start: usize,
    pub end: usize,
}

impl NativeRange {
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub const fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.end <= self.start
    }
}

/// An RGB colour with channels in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RgbColor {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl RgbColor {
    #[must_use]
    pub const fn new(red: f64, green: f64, blue: f64) -> Self {
        Self { red, green, blue }
    }

    /// Soft red that keeps struck-through text readable.
    pub const SOFT_RED: Self = Self::new(1.0, 0.85, 0.85);

    /// Soft green for inserted replacement text.
    pub const SOFT_GREEN: Self = Self::new(0.85, 1.0, 0.85);
}

/// Which colour attribute the markup sets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ColorTarget {
    #[default]
    Background,
    Foreground,
}

/// Colours used for removed and added text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MarkupPalette {
    #[serde(default)]
    pub target: ColorTarget,
    pub removed: RgbColor,
    pub added: RgbColor,
}

impl Default for MarkupPalette {
    fn default() -> Self {
        Self {
            target: ColorTarget::Background,
            removed: RgbColor::SOFT_RED,
            added: RgbColor::SOFT_GREEN,
        }
    }
}

/// Style applied over a range. `strikethrough` is always written explicitly,
/// so `false` clears any strikethrough inherited from adjacent text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TextStyle {
    pub strikethrough: bool,
    pub target: ColorTarget,
    pub color: RgbColor,
}

impl TextStyle {
    /// Struck-through text in the palette's "removed" colour.
    #[must_use]
    pub const fn removed(palette: &MarkupPalette) -> Self {
        Self {
            strikethrough: true,
            target: palette.target,
            color: palette.removed,
        }
    }

    /// Plain text in the palette's "added" colour.
    #[must_use]
    pub const fn added(palette: &MarkupPalette) -> Self {
        Self {
            strikethrough: false,
            target: palette.target,
            color: palette.added,
        }
    }
}

/// A single mutation against the live document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum EditOperation {
    UpdateTextStyle { range: NativeRange, style: TextStyle },
    InsertText { index: usize, text: String },
}
