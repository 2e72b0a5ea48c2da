use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// List the level-2 sections of a plain-text document.
    Sections(SectionsArgs),
    /// Validate a plan file and keep only patches that verify against a document.
    Lint(LintArgs),
    /// Recover a plan from raw model output and verify it against a document.
    Parse(ParseArgs),
    /// Locate a segment in a Google Docs JSON export and show the markup batch.
    Locate(LocateArgs),
    /// Print a JSON Schema.
    Schema(SchemaArgs),
    /// Generate a verified patch plan for a document.
    Generate(GenerateArgs),
    /// Mark up one segment of a live Google Doc as replaced.
    Apply(ApplyArgs),
}

#[derive(Clone, Debug, Args)]
pub struct SectionsArgs {
    /// Plain-text document (`-` for stdin).
    #[arg(long)]
    pub doc_file: PathBuf,

    /// Heading prefix (defaults to the configured marker).
    #[arg(long)]
    pub marker: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct LintArgs {
    /// Plan JSON file (`-` for stdin).
    #[arg(long)]
    pub plan: PathBuf,

    /// Plain-text document the plan targets.
    #[arg(long)]
    pub doc_file: PathBuf,
}

#[derive(Clone, Debug, Args)]
pub struct ParseArgs {
    /// Raw model output (`-` for stdin).
    #[arg(long)]
    pub raw: PathBuf,

    /// Plain-text document the plan targets.
    #[arg(long)]
    pub doc_file: PathBuf,

    /// Plan id used when the output carries none.
    #[arg(long)]
    pub plan_id: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct LocateArgs {
    /// Google Docs `documents.get` JSON (`-` for stdin).
    #[arg(long)]
    pub document: PathBuf,

    /// Exact text to find.
    #[arg(long)]
    pub segment: String,

    /// Text that will replace the segment.
    #[arg(long)]
    pub replacement: String,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Registered schema name.
    #[arg(default_value = "patch_plan")]
    pub type_name: String,

    /// List registered schema names instead.
    #[arg(long, conflicts_with = "hint")]
    pub list: bool,

    /// Print the structured-output hint sent to the model instead.
    #[arg(long)]
    pub hint: bool,
}

/// Where the document text comes from.
#[derive(Clone, Debug, Args)]
#[group(required = true, multiple = false)]
pub struct DocSourceArgs {
    /// Google Docs / Drive URL.
    #[arg(long)]
    pub doc_url: Option<String>,

    /// Local plain-text document.
    #[arg(long)]
    pub doc_file: Option<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub source: DocSourceArgs,

    /// Controls file; defaults to the document's first section.
    #[arg(long)]
    pub controls: Option<PathBuf>,

    /// Plan id to stamp (defaults to the configured id).
    #[arg(long)]
    pub plan_id: Option<String>,

    /// Write the plan to this path instead of printing the outcome.
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Disable streaming.
    #[arg(long)]
    pub no_stream: bool,
}

#[derive(Clone, Debug, Args)]
pub struct ApplyArgs {
    /// Google Doc URL or document id.
    #[arg(long)]
    pub doc: String,

    /// Exact text currently in the document.
    #[arg(long)]
    pub segment: String,

    /// Text to insert after it.
    #[arg(long)]
    pub replacement: String,
}
