//! Verification of a plan against the source document.
//!
//! A patch survives only if its `section` names a heading of the document and
//! its `orig_text` matches, after trimming, a whole line of that section's
//! body. Everything else is dropped silently: one bad suggestion never
//! invalidates the rest of a plan. Linting is pure and idempotent, and keeps
//! `plan_id`, `schema_version` and `preamble` unchanged.

use redline_core::plan::{Patch, PatchPlan};
use redline_core::responses::{DroppedPatch, LintReport, RejectReason};

use crate::sections::SectionIndex;

/// Verifies patches against one document. Build once, reuse per plan.
#[derive(Debug, Clone)]
pub struct PlanVerifier<'a> {
    index: SectionIndex<'a>,
}

impl<'a> PlanVerifier<'a> {
    #[must_use]
    pub fn new(doc_text: &'a str) -> Self {
        Self {
            index: SectionIndex::build(doc_text),
        }
    }

    #[must_use]
    pub const fn from_index(index: SectionIndex<'a>) -> Self {
        Self { index }
    }

    #[must_use]
    pub const fn index(&self) -> &SectionIndex<'a> {
        &self.index
    }

    /// Check a single patch.
    ///
    /// # Errors
    ///
    /// Returns the [`RejectReason`] when the patch cannot be verified.
    pub fn verify(&self, patch: &Patch) -> Result<(), RejectReason> {
        let span = self
            .index
            .range_for(&patch.section)
            .ok_or(RejectReason::UnknownSection)?;
        if self.index.line_exists(&patch.orig_text, &span) {
            Ok(())
        } else {
            Err(RejectReason::OrigTextNotFound)
        }
    }

    /// Keep only the patches that verify, in their original order.
    #[must_use]
    pub fn lint(&self, plan: &PatchPlan) -> PatchPlan {
        self.lint_with_report(plan).plan
    }

    /// [`lint`](Self::lint), also reporting which patches were dropped and why.
    #[must_use]
    pub fn lint_with_report(&self, plan: &PatchPlan) -> LintReport {
        let mut kept = Vec::with_capacity(plan.patches.len());
        let mut dropped = Vec::new();

        for patch in &plan.patches {
            match self.verify(patch) {
                Ok(()) => kept.push(patch.clone()),
                Err(reason) => {
                    tracing::debug!(id = %patch.id, section = %patch.section, ?reason, "dropping patch");
                    dropped.push(DroppedPatch {
                        id: patch.id.clone(),
                        reason,
                    });
                }
            }
        }

        tracing::info!(
            plan_id = %plan.plan_id,
            kept = kept.len(),
            dropped = dropped.len(),
            "linted plan"
        );

        LintReport {
            plan: PatchPlan {
                schema_version: plan.schema_version,
                plan_id: plan.plan_id.clone(),
                preamble: plan.preamble.clone(),
                patches: kept,
            },
            dropped,
        }
    }
}

/// Keep only the patches of `plan` that verify against `doc_text`.
#[must_use]
pub fn lint_plan(plan: &PatchPlan, doc_text: &str) -> PatchPlan {
    PlanVerifier::new(doc_text).lint(plan)
}
