use anyhow::Context;
use redline_config::RedlineConfig;
use redline_core::plan::PatchPlan;
use redline_core::responses::LintReport;
use redline_engine::{PlanVerifier, SectionIndex};
use redline_schema::SchemaRegistry;
use serde_json::Value;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::LintArgs;
use crate::commands::shared::input::{read_json, read_text};
use crate::output::output;

/// Validate `plan_json` against the plan schema, then lint it against `doc_text`.
pub fn lint_report(plan_json: &Value, doc_text: &str, marker: &str) -> anyhow::Result<LintReport> {
    SchemaRegistry::new()
        .validate_plan(plan_json)
        .context("plan does not match the patch plan schema")?;
    let plan = PatchPlan::from_value(plan_json).context("plan is malformed")?;

    let verifier = PlanVerifier::from_index(SectionIndex::build_with_marker(doc_text, marker));
    Ok(verifier.lint_with_report(&plan))
}

/// Handle `redline lint`.
pub fn handle(args: &LintArgs, config: &RedlineConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let plan_json = read_json(&args.plan)?;
    let doc_text = read_text(&args.doc_file)?;
    let report = lint_report(&plan_json, &doc_text, &config.general.section_marker)?;
    if !report.dropped.is_empty() {
        tracing::warn!(dropped = report.dropped.len(), "some patches did not verify");
    }
    output(&report, flags.format)
}
