use redline_config::RedlineConfig;
use redline_core::responses::PlanOutcome;
use redline_engine::{PlanVerifier, SectionIndex, recover_plan};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ParseArgs;
use crate::commands::shared::input::read_text;
use crate::commands::shared::notice::warn_if_empty;
use crate::output::output;

/// Recover a plan from raw model output and verify it against `doc_text`.
pub fn parse_outcome(raw: &str, doc_text: &str, plan_id: &str, marker: &str) -> PlanOutcome {
    let verifier = PlanVerifier::from_index(SectionIndex::build_with_marker(doc_text, marker));
    PlanOutcome::from(verifier.lint_with_report(&recover_plan(raw, plan_id)))
}

/// Handle `redline parse`.
pub fn handle(args: &ParseArgs, config: &RedlineConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let raw = read_text(&args.raw)?;
    let doc_text = read_text(&args.doc_file)?;
    let plan_id = args.plan_id.as_deref().unwrap_or(&config.general.plan_id);

    let outcome = parse_outcome(&raw, &doc_text, plan_id, &config.general.section_marker);
    warn_if_empty(&outcome, flags);
    output(&outcome, flags.format)
}
