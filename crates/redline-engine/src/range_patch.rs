//! Markup operations for one located segment.
//!
//! Given the native range of the old text and a replacement string, the
//! builder produces three operations that must be submitted as one batch:
//!
//! 1. strike through `[start, end)` in the "removed" colour;
//! 2. insert `sep + replacement` at `end`;
//! 3. style `[end + len(sep), end + len(sep) + len(replacement))` in the
//!    "added" colour with strikethrough explicitly cleared, since inserted
//!    text inherits the style of the struck text before it.
//!
//! Offsets are computed for this single edit only. Every native index after
//! `end` shifts by `len(sep) + len(replacement)` once the batch is applied, so
//! a further edit in the same document must be located again first.

use redline_core::document::native_len;
use redline_core::edits::{EditOperation, MarkupPalette, NativeRange, TextStyle};
use thiserror::Error;

/// Default separator between the struck text and its replacement.
pub const DEFAULT_SEPARATOR: char = ' ';

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangePatchError {
    #[error("cannot mark up an empty range [{start}, {end})")]
    EmptyRange { start: usize, end: usize },

    #[error("replacement text is empty")]
    EmptyReplacement,
}

/// The batch for one edit plus the native range the new text will occupy.
#[derive(Debug, Clone, PartialEq)]
pub struct RangePatch {
    pub operations: Vec<EditOperation>,
    pub new_text: NativeRange,
}

/// Build the strike/insert/style batch for replacing `original` with
/// `replacement`.
///
/// # Errors
///
/// [`RangePatchError::EmptyRange`] when `original` covers nothing, and
/// [`RangePatchError::EmptyReplacement`] when there is no text to insert.
pub fn build_range_patch(
    original: NativeRange,
    replacement: &str,
    separator: char,
    palette: &MarkupPalette,
) -> Result<RangePatch, RangePatchError> {
    if original.is_empty() {
        return Err(RangePatchError::EmptyRange {
            start: original.start,
            end: original.end,
        });
    }
    if replacement.is_empty() {
        return Err(RangePatchError::EmptyReplacement);
    }

    let new_start = original.end + separator.len_utf16();
    let new_text = NativeRange::new(new_start, new_start + native_len(replacement));

    let mut inserted = String::with_capacity(separator.len_utf8() + replacement.len());
    inserted.push(separator);
    inserted.push_str(replacement);

    Ok(RangePatch {
        operations: vec![
            EditOperation::UpdateTextStyle {
                range: original,
                style: TextStyle::removed(palette),
            },
            EditOperation::InsertText {
                index: original.end,
                text: inserted,
            },
            EditOperation::UpdateTextStyle {
                range: new_text,
                style: TextStyle::added(palette),
            },
        ],
        new_text,
    })
}
