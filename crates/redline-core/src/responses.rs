//! Response types returned as JSON by `redline` commands and the service layer.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::edits::{EditOperation, NativeRange};
use crate::plan::PatchPlan;

/// Why a patch was dropped during linting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    /// `section` matches no heading line in the document.
    UnknownSection,
    /// `orig_text` matches no line inside the section body.
    OrigTextNotFound,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DroppedPatch {
    pub id: String,
    pub reason: RejectReason,
}

/// A linted plan together with the patches that failed verification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LintReport {
    pub plan: PatchPlan,
    pub dropped: Vec<DroppedPatch>,
}

/// Whether a generated plan has anything in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum PlanStatus {
    /// At least one patch survived verification.
    Verified,
    /// Generation succeeded but no patch survived verification.
    Empty,
}

/// Result of generating a verified plan for a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PlanOutcome {
    pub status: PlanStatus,
    pub plan: PatchPlan,
    pub dropped: Vec<DroppedPatch>,
}

impl From<LintReport> for PlanOutcome {
    fn from(report: LintReport) -> Self {
        let status = if report.plan.patches.is_empty() {
            PlanStatus::Empty
        } else {
            PlanStatus::Verified
        };
        Self {
            status,
            plan: report.plan,
            dropped: report.dropped,
        }
    }
}

/// One entry of `redline sections`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SectionSummary {
    pub heading: String,
    /// Zero-based line of the heading.
    pub heading_line: usize,
    /// First body line (inclusive).
    pub body_start: usize,
    /// End of the body (exclusive): the next heading line or the line count.
    pub body_end: usize,
}

/// A segment located in native coordinates, with the batch that would mark it up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LocatedEdit {
    pub segment: String,
    pub original: NativeRange,
    pub replacement_text: String,
    pub new_text: NativeRange,
    pub operations: Vec<EditOperation>,
}

/// Payload describing an edit that was submitted to the live document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AppliedEdit {
    pub file_id: String,
    pub original_text: String,
    pub replacement_text: String,
    pub original_start: usize,
    pub original_end: usize,
    pub new_text_start: usize,
    pub new_text_end: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_lint_report_becomes_empty_outcome() {
        let outcome = PlanOutcome::from(LintReport {
            plan: PatchPlan::empty("p"),
            dropped: vec![DroppedPatch {
                id: "1".into(),
                reason: RejectReason::UnknownSection,
            }],
        });
        assert_eq!(outcome.status, PlanStatus::Empty);
        assert_eq!(outcome.dropped.len(), 1);
    }

    #[test]
    fn reject_reason_serializes_snake_case() {
        let json = serde_json::to_string(&RejectReason::OrigTextNotFound).unwrap();
        assert_eq!(json, "\"orig_text_not_found\"");
    }
}
