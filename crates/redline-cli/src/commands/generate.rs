use std::path::Path;

use anyhow::Context;
use redline_config::RedlineConfig;
use redline_core::responses::PlanOutcome;
use redline_engine::collaborators::DocumentFetcher;
use redline_engine::{PlanRequest, generate_plan};
use redline_gdocs::GoogleDocsClient;
use redline_llm::OpenAiProducer;
use redline_schema::plan_output_schema;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::GenerateArgs;
use crate::commands::shared::input::read_text;
use crate::commands::shared::local::LocalFileFetcher;
use crate::commands::shared::notice::warn_if_empty;
use crate::output::output;

/// Build the plan request from arguments and configuration.
pub fn plan_request(
    args: &GenerateArgs,
    config: &RedlineConfig,
    doc_url: &str,
) -> anyhow::Result<PlanRequest> {
    let plan_id = args.plan_id.as_deref().unwrap_or(&config.general.plan_id);
    let mut request = PlanRequest::new(doc_url, plan_id);
    request.stream = config.general.stream && !args.no_stream;
    request.max_doc_chars = config.general.max_doc_chars;
    request.section_marker.clone_from(&config.general.section_marker);
    request.controls_text = args.controls.as_deref().map(read_text).transpose()?;
    Ok(request)
}

async fn run_with<F: DocumentFetcher + Sync>(
    fetcher: &F,
    config: &RedlineConfig,
    request: &PlanRequest,
) -> anyhow::Result<PlanOutcome> {
    let producer = OpenAiProducer::new(config.require_llm()?)?;
    let outcome = generate_plan(fetcher, &producer, &plan_output_schema(), request).await?;
    Ok(outcome)
}

/// Handle `redline generate`.
pub async fn handle(
    args: &GenerateArgs,
    config: &RedlineConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let outcome = if let Some(url) = &args.source.doc_url {
        let client = GoogleDocsClient::new(config.require_google()?)?;
        run_with(&client, config, &plan_request(args, config, url)?).await?
    } else if let Some(path) = &args.source.doc_file {
        let path = path.to_string_lossy();
        run_with(&LocalFileFetcher, config, &plan_request(args, config, &path)?).await?
    } else {
        anyhow::bail!("either --doc-url or --doc-file is required");
    };

    warn_if_empty(&outcome, flags);

    match &args.out {
        Some(path) => write_plan(path, &outcome),
        None => output(&outcome, flags.format),
    }
}

fn write_plan(path: &Path, outcome: &PlanOutcome) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(&outcome.plan)?;
    std::fs::write(path, json + "\n")
        .with_context(|| format!("failed to write plan to {}", path.display()))?;
    tracing::info!(path = %path.display(), patches = outcome.plan.patches.len(), "plan written");
    Ok(())
}
