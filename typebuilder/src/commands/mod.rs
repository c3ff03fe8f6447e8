//! Command handlers for the typebuilder CLI.

pub mod generate;
pub mod init;
pub mod preview;

use crate::cli::Cli;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use typebuilder_core::{BuilderConfig, Result};

/// The workspace the command runs in, or `None` when it cannot be resolved.
///
/// An explicit `--workspace` must be an existing directory.
fn workspace_root(cli: &Cli) -> Option<PathBuf> {
    match &cli.workspace {
        Some(dir) if dir.is_dir() => Some(dir.clone()),
        Some(dir) => {
            warn!("Workspace {:?} is not a directory", dir);
            None
        }
        None => std::env::current_dir().ok(),
    }
}

/// Loads the configuration, searching upwards from `workspace`.
fn load_config(cli: &Cli, workspace: &Path) -> Result<BuilderConfig> {
    debug!("Loading configuration from {:?}", workspace);
    BuilderConfig::load(cli.config.as_deref(), workspace)
}
