use anyhow::Context;
use redline_config::RedlineConfig;
use redline_core::responses::LocatedEdit;
use redline_engine::{ApplyOptions, locate_edit};
use redline_gdocs::model::Document;
use serde_json::Value;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::LocateArgs;
use crate::commands::shared::input::read_json;
use crate::output::output;

/// Markup options from the `general` and `markup` config sections.
pub fn apply_options(config: &RedlineConfig) -> ApplyOptions {
    ApplyOptions {
        separator: config.general.separator,
        palette: config.markup.palette(),
    }
}

/// Locate `segment` in a `documents.get` payload.
pub fn locate_in_export(
    document: Value,
    segment: &str,
    replacement: &str,
    options: &ApplyOptions,
) -> anyhow::Result<LocatedEdit> {
    let document: Document =
        serde_json::from_value(document).context("not a Google Docs document export")?;
    Ok(locate_edit(&document.into_body(), segment, replacement, options)?)
}

/// Handle `redline locate`.
pub fn handle(args: &LocateArgs, config: &RedlineConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let document = read_json(&args.document)?;
    let located = locate_in_export(
        document,
        &args.segment,
        &args.replacement,
        &apply_options(config),
    )?;
    output(&located, flags.format)
}
