//! Flattening of a native document tree into plain text plus an index map.
//!
//! Tables do not appear contiguously in native index space, so offsets in the
//! flattened text cannot be turned into native indices arithmetically. The
//! mapper records, for every character of the flat text, the native index of
//! that character. Locating a segment is then a substring search in the flat
//! text followed by two lookups.

use redline_core::document::{Block, DocumentBody};
use redline_core::edits::NativeRange;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocateError {
    /// The segment does not occur in the flattened text.
    #[error("segment text not found in document: {0:?}")]
    NotFound(String),

    /// An empty segment has no native extent.
    #[error("segment text is empty")]
    EmptySegment,
}

/// Reading-order text of a document and the native index of each character.
///
/// `index_map[i]` is the native index of the `i`-th character (Unicode scalar
/// value) of `text`. The map has exactly one entry per character.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlatDocument {
    pub text: String,
    pub index_map: Vec<usize>,
}

impl FlatDocument {
    /// Flatten `body`: paragraphs contribute their text runs in order,
    /// tables are walked depth-first (row-major, then cell-major) and
    /// section breaks contribute nothing.
    #[must_use]
    pub fn from_body(body: &DocumentBody) -> Self {
        let mut flat = Self::default();
        flat.push_blocks(&body.content);
        flat
    }

    fn push_blocks(&mut self, blocks: &[Block]) {
        for block in blocks {
            match block {
                Block::Paragraph(paragraph) => {
                    for run in &paragraph.runs {
                        let mut native = run.start_index;
                        for ch in run.content.chars() {
                            self.text.push(ch);
                            self.index_map.push(native);
                            native += ch.len_utf16();
                        }
                    }
                }
                Block::Table(table) => {
                    for row in &table.rows {
                        for cell in &row.cells {
                            self.push_blocks(&cell.content);
                        }
                    }
                }
                Block::SectionBreak => {}
            }
        }
    }

    /// Native range of the first occurrence of `needle`.
    ///
    /// # Errors
    ///
    /// See [`locate_segment`].
    pub fn locate(&self, needle: &str) -> Result<NativeRange, LocateError> {
        locate_segment(&self.text, &self.index_map, needle)
    }
}

/// Translate the first exact occurrence of `needle` in `flat_text` into a
/// native range.
///
/// The start is the native index of the first matched character; the
/// exclusive end is the native index of the last matched character plus its
/// width (`+1` for anything outside the astral planes). Later occurrences are
/// never considered.
///
/// # Errors
///
/// [`LocateError::EmptySegment`] for an empty needle,
/// [`LocateError::NotFound`] when `needle` does not occur.
pub fn locate_segment(
    flat_text: &str,
    idx_map: &[usize],
    needle: &str,
) -> Result<NativeRange, LocateError> {
    let Some(last_char) = needle.chars().last() else {
        return Err(LocateError::EmptySegment);
    };

    let byte_pos = flat_text
        .find(needle)
        .ok_or_else(|| LocateError::NotFound(needle.to_string()))?;

    let first = flat_text[..byte_pos].chars().count();
    let last = first + needle.chars().count() - 1;

    match (idx_map.get(first), idx_map.get(last)) {
        (Some(&start), Some(&end)) => Ok(NativeRange::new(start, end + last_char.len_utf16())),
        _ => Err(LocateError::NotFound(needle.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use redline_core::document::{Paragraph, TableCell, TextRun};

    use super::*;

    fn nested_contract() -> DocumentBody {
        DocumentBody::new(vec![
            Block::SectionBreak,
            Block::text(1, "## 7. Liability\n"),
            Block::table(vec![vec![
                TableCell::new(vec![Block::text(20, "Item\n")]),
                TableCell::new(vec![Block::table(vec![vec![
                    TableCell::new(vec![Block::text(30, "Liability Cap\n")]),
                    TableCell::new(vec![Block::text(48, "USD 1M\n")]),
                ]])]),
            ]]),
            Block::text(60, "End.\n"),
        ])
    }

    #[test]
    fn flattening_skips_section_breaks_and_walks_tables_in_order() {
        let flat = FlatDocument::from_body(&nested_contract());
        assert_eq!(
            flat.text,
            "## 7. Liability\nItem\nLiability Cap\nUSD 1M\nEnd.\n"
        );
        assert_eq!(flat.index_map.len(), flat.text.chars().count());
        assert_eq!(flat.index_map[0], 1);
        assert_eq!(flat.index_map[16], 20);
    }

    #[test]
    fn nested_table_cell_maps_back_to_native_text() {
        let body = nested_contract();
        let flat = FlatDocument::from_body(&body);
        let range = flat.locate("Liability Cap").unwrap();
        assert_eq!(range, NativeRange::new(30, 43));
        assert_eq!(body.text_in_range(range.start, range.end), "Liability Cap");
    }

    #[test]
    fn segment_spanning_runs_uses_each_runs_own_start() {
        let body = DocumentBody::new(vec![Block::Paragraph(Paragraph::new(vec![
            TextRun::new(10, "Payment within "),
            TextRun::new(25, "30 days"),
        ]))]);
        let flat = FlatDocument::from_body(&body);
        assert_eq!(flat.locate("within 30").unwrap(), NativeRange::new(18, 27));
    }

    #[test]
    fn only_the_first_occurrence_is_located() {
        let body = DocumentBody::new(vec![
            Block::text(1, "fee\n"),
            Block::text(40, "fee\n"),
        ]);
        let flat = FlatDocument::from_body(&body);
        assert_eq!(flat.locate("fee").unwrap(), NativeRange::new(1, 4));
    }

    #[test]
    fn missing_and_empty_segments_fail() {
        let flat = FlatDocument::from_body(&nested_contract());
        assert_eq!(
            flat.locate("Indemnity"),
            Err(LocateError::NotFound("Indemnity".into()))
        );
        assert_eq!(flat.locate(""), Err(LocateError::EmptySegment));
    }

    #[test]
    fn astral_characters_widen_native_indices() {
        let body = DocumentBody::new(vec![Block::text(1, "a\u{1F4DD}b\n")]);
        let flat = FlatDocument::from_body(&body);
        assert_eq!(flat.index_map, vec![1, 2, 4, 5]);
        assert_eq!(flat.locate("\u{1F4DD}").unwrap(), NativeRange::new(2, 4));
        assert_eq!(flat.locate("b").unwrap(), NativeRange::new(4, 5));
    }

    #[test]
    fn every_substring_round_trips_through_native_text() {
        let body = nested_contract();
        let flat = FlatDocument::from_body(&body);
        let chars: Vec<char> = flat.text.chars().collect();
        for start in 0..chars.len() {
            for end in start + 1..=chars.len().min(start + 12) {
                let needle: String = chars[start..end].iter().collect();
                if needle.contains('\n') {
                    continue;
                }
                let range = flat.locate(&needle).unwrap();
                assert_eq!(body.text_in_range(range.start, range.end), needle);
            }
        }
    }
}
