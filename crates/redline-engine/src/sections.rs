//! Section indexing over a document's plain-text rendering.
//!
//! A heading is any line whose trimmed content starts with the section
//! marker (`"## "` by default). Each section's body runs from the line after
//! its heading up to, but excluding, the next heading line, or to the end of
//! the document for the last section. Text before the first heading belongs
//! to no section. Lines break on `\n`, `\r\n`, a lone `\r` and the other
//! Unicode line boundaries (see [`split_lines`]).
//!
//! Lookups resolve to the **first** match: repeated heading text is
//! ambiguous and later duplicates are unreachable.

use std::ops::Range;

use redline_core::responses::SectionSummary;

/// Default level-2 heading marker.
pub const SECTION_MARKER: &str = "## ";

/// One heading and the line span of its body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// The heading line with trailing whitespace removed.
    pub heading: String,
    /// Zero-based line index of the heading.
    pub heading_line: usize,
    /// Body lines, `heading_line + 1 .. next heading (or line count)`.
    pub body: Range<usize>,
}

impl Section {
    #[must_use]
    pub fn summary(&self) -> SectionSummary {
        SectionSummary {
            heading: self.heading.clone(),
            heading_line: self.heading_line,
            body_start: self.body.start,
            body_end: self.body.end,
        }
    }
}

/// The lines of a document and its ordered, non-overlapping sections.
#[derive(Debug, Clone)]
pub struct SectionIndex<'a> {
    lines: Vec<&'a str>,
    sections: Vec<Section>,
}

impl<'a> SectionIndex<'a> {
    /// Index `doc_text` using [`SECTION_MARKER`].
    #[must_use]
    pub fn build(doc_text: &'a str) -> Self {
        Self::build_with_marker(doc_text, SECTION_MARKER)
    }

    /// Index `doc_text` treating lines whose trimmed content starts with
    /// `marker` as headings. A leading byte-order mark is ignored, and lines
    /// are split as by [`split_lines`].
    #[must_use]
    pub fn build_with_marker(doc_text: &'a str, marker: &str) -> Self {
        let text = doc_text.strip_prefix('\u{feff}').unwrap_or(doc_text);
        let lines = split_lines(text);

        let heads: Vec<usize> = lines
            .iter()
            .enumerate()
            .filter(|(_, line)| line.trim().starts_with(marker))
            .map(|(i, _)| i)
            .collect();

        let sections = heads
            .iter()
            .enumerate()
            .map(|(n, &line)| {
                let end = heads.get(n + 1).copied().unwrap_or(lines.len());
                Section {
                    heading: lines[line].trim_end().to_string(),
                    heading_line: line,
                    body: line + 1..end,
                }
            })
            .collect();

        Self { lines, sections }
    }

    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Heading lines in document order.
    pub fn headings(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|section| section.heading.as_str())
    }

    /// Body span of the first section whose heading equals `heading` after
    /// trimming both sides.
    #[must_use]
    pub fn range_for(&self, heading: &str) -> Option<Range<usize>> {
        section_range_for(heading, &self.sections)
    }

    /// Whether some line inside `span` equals `text` after trimming both.
    #[must_use]
    pub fn line_exists(&self, text: &str, span: &Range<usize>) -> bool {
        let needle = text.trim();
        let end = span.end.min(self.lines.len());
        let start = span.start.min(end);
        self.lines[start..end]
            .iter()
            .any(|line| line.trim() == needle)
    }

    /// Lines of the section body, untrimmed.
    #[must_use]
    pub fn body_lines(&self, span: &Range<usize>) -> &[&'a str] {
        let end = span.end.min(self.lines.len());
        &self.lines[span.start.min(end)..end]
    }
}

const fn is_line_break(ch: char) -> bool {
    matches!(
        ch,
        '\n' | '\r' | '\u{b}' | '\u{c}' | '\u{1c}'..='\u{1e}' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Split `text` into lines on every Unicode line boundary: `\n`, `\r\n`, a
/// lone `\r`, vertical tab, form feed, the information separators
/// `\x1c`..`\x1e`, NEL, and U+2028/U+2029. Terminators are not included and
/// a trailing terminator does not start an extra empty line.
#[must_use]
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((at, ch)) = chars.next() {
        if !is_line_break(ch) {
            continue;
        }
        lines.push(&text[start..at]);
        start = at + ch.len_utf8();
        if ch == '\r' && chars.next_if(|&(_, next)| next == '\n').is_some() {
            start += 1;
        }
    }
    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

/// Partition `doc_text` into sections by [`SECTION_MARKER`] headings.
///
/// Returns an empty vector when the document has no headings.
#[must_use]
pub fn index_sections(doc_text: &str) -> Vec<Section> {
    SectionIndex::build(doc_text).sections
}

/// Body span of the first section whose heading matches `heading` exactly
/// (after trimming), or `None`.
#[must_use]
pub fn section_range_for(heading: &str, sections: &[Section]) -> Option<Range<usize>> {
    let wanted = heading.trim();
    sections
        .iter()
        .find(|section| section.heading.trim() == wanted)
        .map(|section| section.body.clone())
}

/// Whether a line strictly inside `span` equals `text` after trimming.
///
/// Matching is whole-line: a substring of a longer line does not count.
#[must_use]
pub fn line_exists_in_section(text: &str, span: &Range<usize>, doc_text: &str) -> bool {
    SectionIndex::build(doc_text).line_exists(text, span)
}
