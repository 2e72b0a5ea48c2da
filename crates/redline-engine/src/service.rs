//! Plan generation and edit application over the collaborator traits.
//!
//! These are the only async entry points of the engine. Each call works on
//! its own inputs and holds no state between calls.

use redline_core::document::DocumentBody;
use redline_core::edits::MarkupPalette;
use redline_core::responses::{AppliedEdit, LocatedEdit, PlanOutcome, PlanStatus};

use crate::collaborators::{DocumentEditor, DocumentFetcher, ProduceRequest, TextProducer};
use crate::controls::extract_controls_block_with_marker;
use crate::error::ServiceError;
use crate::flatten::FlatDocument;
use crate::lint::PlanVerifier;
use crate::parser::recover_plan;
use crate::prompt::{DEFAULT_MAX_DOC_CHARS, build_prompt};
use crate::range_patch::{DEFAULT_SEPARATOR, build_range_patch};
use crate::sections::{SECTION_MARKER, SectionIndex};

/// Parameters for [`generate_plan`].
#[derive(Debug, Clone)]
pub struct PlanRequest {
    pub doc_url: String,
    /// Controls text. When `None`, the body of the document's first section is used.
    pub controls_text: Option<String>,
    pub plan_id: String,
    pub stream: bool,
    pub max_doc_chars: usize,
    pub section_marker: String,
}

impl PlanRequest {
    #[must_use]
    pub fn new(doc_url: impl Into<String>, plan_id: impl Into<String>) -> Self {
        Self {
            doc_url: doc_url.into(),
            controls_text: None,
            plan_id: plan_id.into(),
            stream: true,
            max_doc_chars: DEFAULT_MAX_DOC_CHARS,
            section_marker: SECTION_MARKER.to_string(),
        }
    }
}

/// Fetch a document, ask the producer for a plan, and return it verified.
///
/// # Errors
///
/// Collaborator failures propagate as [`ServiceError::Fetch`] and
/// [`ServiceError::Produce`]. A document without headings fails with
/// [`ServiceError::NoSections`]; missing controls with
/// [`ServiceError::MissingControls`]. A plan in which nothing verified is
/// **not** an error: it is returned with [`PlanStatus::Empty`].
pub async fn generate_plan<F, P>(
    fetcher: &F,
    producer: &P,
    schema_hint: &serde_json::Value,
    request: &PlanRequest,
) -> Result<PlanOutcome, ServiceError>
where
    F: DocumentFetcher + Sync,
    P: TextProducer + Sync,
{
    let fetched = fetcher
        .fetch(&request.doc_url)
        .await
        .map_err(ServiceError::fetch)?;
    let doc_text = fetched.content;
    tracing::info!(
        url = %request.doc_url,
        chars = doc_text.chars().count(),
        mime = %fetched.mime_type,
        "fetched document"
    );

    let index = SectionIndex::build_with_marker(&doc_text, &request.section_marker);
    if index.is_empty() {
        return Err(ServiceError::NoSections {
            marker: request.section_marker.clone(),
        });
    }

    let controls = match &request.controls_text {
        Some(text) => text.clone(),
        None => extract_controls_block_with_marker(&doc_text, &request.section_marker),
    };
    if controls.trim().is_empty() {
        return Err(ServiceError::MissingControls);
    }

    let prompt = build_prompt(&index, &doc_text, Some(&controls), request.max_doc_chars);
    let produce = ProduceRequest {
        system_prompt: &prompt.system,
        user_message: &prompt.user,
        schema_hint,
        stream: request.stream,
    };
    let raw = producer
        .produce(&produce)
        .await
        .map_err(ServiceError::produce)?;

    let plan = recover_plan(&raw, &request.plan_id);
    let outcome = PlanOutcome::from(PlanVerifier::from_index(index).lint_with_report(&plan));
    if outcome.status == PlanStatus::Empty {
        tracing::warn!(plan_id = %outcome.plan.plan_id, "no patch survived verification");
    }
    Ok(outcome)
}

/// Markup options for applying an edit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApplyOptions {
    pub separator: char,
    pub palette: MarkupPalette,
}

impl Default for ApplyOptions {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR,
            palette: MarkupPalette::default(),
        }
    }
}

/// Locate `segment` in `body` and build the batch replacing it.
///
/// # Errors
///
/// [`ServiceError::Locate`] if the segment is absent or empty,
/// [`ServiceError::RangePatch`] if the replacement is empty.
pub fn locate_edit(
    body: &DocumentBody,
    segment: &str,
    replacement: &str,
    options: &ApplyOptions,
) -> Result<LocatedEdit, ServiceError> {
    let original = FlatDocument::from_body(body).locate(segment)?;
    let patch = build_range_patch(original, replacement, options.separator, &options.palette)?;
    Ok(LocatedEdit {
        segment: segment.to_string(),
        original,
        replacement_text: replacement.to_string(),
        new_text: patch.new_text,
        operations: patch.operations,
    })
}

/// Mark up the first occurrence of `segment` in a live document as replaced
/// by `replacement`.
///
/// Applies one edit. Later native indices shift afterwards, so each further
/// edit must go through this function again rather than reuse old ranges.
///
/// # Errors
///
/// Collaborator failures propagate as [`ServiceError::Mutation`]; see
/// [`locate_edit`] for the rest.
pub async fn apply_edit<E>(
    editor: &E,
    document_id: &str,
    segment: &str,
    replacement: &str,
    options: &ApplyOptions,
) -> Result<AppliedEdit, ServiceError>
where
    E: DocumentEditor + Sync,
{
    let body = editor
        .fetch_body(document_id)
        .await
        .map_err(ServiceError::mutation)?;
    let located = locate_edit(&body, segment, replacement, options)?;

    editor
        .submit(document_id, &located.operations)
        .await
        .map_err(ServiceError::mutation)?;

    tracing::info!(
        document_id,
        start = located.original.start,
        end = located.original.end,
        "applied edit"
    );

    Ok(AppliedEdit {
        file_id: document_id.to_string(),
        original_text: segment.to_string(),
        replacement_text: replacement.to_string(),
        original_start: located.original.start,
        original_end: located.original.end,
        new_text_start: located.new_text.start,
        new_text_end: located.new_text.end,
    })
}
