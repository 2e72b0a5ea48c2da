use redline_config::RedlineConfig;

use crate::cli::{Commands, GlobalFlags};
use crate::commands;

/// Dispatch a parsed command to its handler.
pub async fn dispatch(
    command: Commands,
    config: &RedlineConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Sections(args) => commands::sections::handle(&args, config, flags),
        Commands::Lint(args) => commands::lint::handle(&args, config, flags),
        Commands::Parse(args) => commands::parse::handle(&args, config, flags),
        Commands::Locate(args) => commands::locate::handle(&args, config, flags),
        Commands::Schema(args) => commands::schema::handle(&args, flags),
        Commands::Generate(args) => commands::generate::handle(&args, config, flags).await,
        Commands::Apply(args) => commands::apply::handle(&args, config, flags).await,
    }
}
