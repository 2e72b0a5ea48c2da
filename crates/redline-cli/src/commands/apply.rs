use redline_config::RedlineConfig;
use redline_engine::apply_edit;
use redline_gdocs::{GoogleDocsClient, extract_file_id};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ApplyArgs;
use crate::commands::locate::apply_options;
use crate::output::output;

/// Handle `redline apply`.
pub async fn handle(args: &ApplyArgs, config: &RedlineConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let Some(document_id) = extract_file_id(&args.doc) else {
        anyhow::bail!("could not find a document id in '{}'", args.doc);
    };
    let client = GoogleDocsClient::new(config.require_google()?)?;

    let applied = apply_edit(
        &client,
        &document_id,
        &args.segment,
        &args.replacement,
        &apply_options(config),
    )
    .await?;
    tracing::info!(
        document_id = %document_id,
        start = applied.original_start,
        end = applied.original_end,
        "edit applied"
    );
    output(&applied, flags.format)
}
