use redline_schema::{SchemaRegistry, plan_output_schema};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

/// Handle `redline schema`. Needs no configuration.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let registry = SchemaRegistry::new();

    if args.list {
        return output(&registry.list(), flags.format);
    }
    if args.hint {
        return output(&plan_output_schema(), flags.format);
    }

    let Some(schema) = registry.get(&args.type_name) else {
        anyhow::bail!(
            "unknown schema '{}'; run `redline schema --list` for names",
            args.type_name
        );
    };
    output(schema, flags.format)
}
