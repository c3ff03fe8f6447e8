//! Init command - writes a default typebuilder.toml.

use super::workspace_root;
use crate::cli::{Cli, InitArgs};
use std::fs;
use tracing::info;
use typebuilder_core::config::CONFIG_FILE_NAME;
use typebuilder_core::{Result, TypeBuilderError};

/// Template written by `typebuilder init`. Parses to the default configuration.
pub const CONFIG_TEMPLATE: &str = r#"# typebuilder configuration

[generator]
# Prefix of every fluent setter method
setter_prefix = "with"
# "capitalize" upper-cases the first character, "pascal" converts snake_case too
setter_case = "capitalize"
# Initial value of every private field
field_initializer = "undefined"
indent_width = 2
export_class = true

[output]
# Builder files are written as <name>.<suffix>.<ext>
suffix = "builder"
"#;

/// Runs the init command.
pub fn run(cli: &Cli, args: InitArgs) -> Result<()> {
    let workspace = match workspace_root(cli) {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    let config_path = workspace.join(CONFIG_FILE_NAME);

    if config_path.exists() && !args.force {
        return Err(TypeBuilderError::config(format!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        )));
    }

    fs::write(&config_path, CONFIG_TEMPLATE)?;
    info!("Created {:?}", config_path);
    if !cli.quiet {
        println!("Created {}", config_path.display());
    }

    Ok(())
}
