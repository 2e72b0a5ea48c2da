//! Extraction of the reviewer's controls from the document itself.
//!
//! Documents reviewed through the service carry their review instructions in
//! the first level-2 section. The body of that section, up to the next
//! heading, is the controls text.

use crate::sections::{SECTION_MARKER, SectionIndex};

/// Body of the first section of `doc_text`, without surrounding blank lines.
///
/// Returns an empty string when the document has no headings or the first
/// section has no body.
#[must_use]
pub fn extract_controls_block(doc_text: &str) -> String {
    extract_controls_block_with_marker(doc_text, SECTION_MARKER)
}

/// [`extract_controls_block`] for documents using a different heading marker.
#[must_use]
pub fn extract_controls_block_with_marker(doc_text: &str, marker: &str) -> String {
    let index = SectionIndex::build_with_marker(doc_text, marker);

    index.sections().first().map_or_else(String::new, |first| {
        index
            .body_lines(&first.body)
            .join("\n")
            .trim_matches('\n')
            .to_string()
    })
}
