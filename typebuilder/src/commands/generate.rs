//! Generate command - writes the builder file for a type alias file.

use super::{load_config, workspace_root};
use crate::cli::{Cli, GenerateArgs};
use crate::terminal::TerminalHost;
use tracing::{debug, info};
use typebuilder_core::{BuilderConfig, ExecutionContext, Result, execute};

/// Runs the generate command.
///
/// Builder failures have already been shown to the user by the host when
/// they come back as `TypeBuilderError::Builder`.
pub fn run(cli: &Cli, args: GenerateArgs) -> Result<()> {
    let workspace = workspace_root(cli);
    // Without a workspace the run stops before any setting is read
    let config = match &workspace {
        Some(dir) => load_config(cli, dir)?,
        None => {
            debug!("No workspace, skipping configuration");
            BuilderConfig::default()
        }
    };

    info!("Generating builder for {:?}", args.file);
    let context = ExecutionContext::new(workspace);
    let mut host = TerminalHost::new(args.file, cli.quiet);

    execute(&context, &mut host, &config)?;
    Ok(())
}
