use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `redline` binary.
#[derive(Debug, Parser)]
#[command(
    name = "redline",
    version,
    about = "Redline - verified contract edits for Google Docs"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "redline",
            "--format",
            "table",
            "--verbose",
            "sections",
            "--doc-file",
            "contract.txt",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert!(cli.verbose);
        match cli.command {
            Commands::Sections(args) => assert_eq!(args.doc_file, PathBuf::from("contract.txt")),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["redline", "schema", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Schema(_)));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["redline", "--format", "xml", "schema"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn generate_requires_exactly_one_document_source() {
        assert!(Cli::try_parse_from(["redline", "generate"]).is_err());
        assert!(
            Cli::try_parse_from([
                "redline",
                "generate",
                "--doc-url",
                "https://docs.google.com/document/d/x/edit",
                "--doc-file",
                "contract.txt",
            ])
            .is_err()
        );

        let cli = Cli::try_parse_from(["redline", "generate", "--doc-file", "c.txt", "--no-stream"])
            .expect("cli should parse");
        match cli.command {
            Commands::Generate(args) => {
                assert!(args.no_stream);
                assert_eq!(args.source.doc_file, Some(PathBuf::from("c.txt")));
                assert!(args.plan_id.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn apply_takes_segment_and_replacement() {
        let cli = Cli::try_parse_from([
            "redline",
            "apply",
            "--doc",
            "https://docs.google.com/document/d/1AbCdEfGhIjKlMnOpQrStUvWxYz/edit",
            "--segment",
            "60 days",
            "--replacement",
            "30 days",
        ])
        .expect("cli should parse");
        assert!(matches!(cli.command, Commands::Apply(args) if args.segment == "60 days"));
    }
}
