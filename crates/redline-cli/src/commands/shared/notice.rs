use redline_core::responses::{PlanOutcome, PlanStatus};

use crate::cli::GlobalFlags;

const EMPTY_OUTCOME: &str = "warning: no suggested patch verified against the document";

/// Warning for an outcome in which no patch verified; `None` under `--quiet`.
pub fn empty_outcome_warning(outcome: &PlanOutcome, flags: &GlobalFlags) -> Option<&'static str> {
    (outcome.status == PlanStatus::Empty && !flags.quiet).then_some(EMPTY_OUTCOME)
}

/// Print [`empty_outcome_warning`] to stderr when it applies.
pub fn warn_if_empty(outcome: &PlanOutcome, flags: &GlobalFlags) {
    if let Some(warning) = empty_outcome_warning(outcome, flags) {
        eprintln!("{warning}");
    }
}
