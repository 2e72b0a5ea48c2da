//! Prompt construction for the text producer.

use crate::sections::SectionIndex;

/// Default number of document characters included in the user message.
pub const DEFAULT_MAX_DOC_CHARS: usize = 18_000;

pub const SYSTEM_PROMPT: &str = "You are a careful contract editor. Return ONLY JSON that matches \
the provided JSON schema. Every `section` must be an exact heading line present in the document \
(starts with '## '). Every `orig_text` must be an exact line present under that section. Edits \
should be minimal and localized; preserve formatting and defined terms. Use `choice_group` for \
mutually exclusive alternatives (e.g., uptime), and `topic` for related independent edits.";

/// A system prompt and user message pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub system: String,
    pub user: String,
}

/// Build the user message: the document's headings (to be copied verbatim as
/// `section`), the controls, and the first `max_doc_chars` characters of the
/// document.
#[must_use]
pub fn build_user_message(
    index: &SectionIndex<'_>,
    doc_text: &str,
    controls: Option<&str>,
    max_doc_chars: usize,
) -> String {
    let headings = index.headings().collect::<Vec<_>>().join("\n");
    let headings = if headings.is_empty() {
        "(no headings found)".to_string()
    } else {
        headings
    };

    let controls = controls
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or("(none provided)");

    let snippet: String = doc_text.chars().take(max_doc_chars).collect();

    format!(
        "Document headings (use exactly as `section`):\n{headings}\n\n\
         Controls (may be empty; use to bias suggestions):\n{controls}\n\n\
         Contract text (truncated for context):\n{snippet}\n"
    )
}

/// The full prompt for reviewing `doc_text`.
#[must_use]
pub fn build_prompt(
    index: &SectionIndex<'_>,
    doc_text: &str,
    controls: Option<&str>,
    max_doc_chars: usize,
) -> Prompt {
    Prompt {
        system: SYSTEM_PROMPT.to_string(),
        user: build_user_message(index, doc_text, controls, max_doc_chars),
    }
}
