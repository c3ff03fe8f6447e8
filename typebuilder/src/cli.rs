//! Command-line interface definitions for typebuilder.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// typebuilder - fluent builder classes from TypeScript type aliases
#[derive(Parser, Debug)]
#[command(name = "typebuilder")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Workspace directory (defaults to the current directory)
    #[arg(short, long, global = true)]
    pub workspace: Option<PathBuf>,

    /// Path to typebuilder.toml configuration file
    #[arg(short, long, global = true, env = "TYPEBUILDER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output (-v, -vv, -vvv for increasing verbosity)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a builder file next to a type alias file
    Generate(GenerateArgs),

    /// Print the generated builder without writing it
    Preview(PreviewArgs),

    /// Initialize a new typebuilder.toml configuration file
    Init(InitArgs),
}

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// TypeScript file containing an exported type alias
    pub file: PathBuf,
}

#[derive(Args, Debug, Clone)]
pub struct PreviewArgs {
    /// TypeScript file containing an exported type alias
    pub file: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: PreviewFormat,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum PreviewFormat {
    /// The generated class as TypeScript source
    Text,
    /// Alias name, members and class text as JSON
    Json,
}

#[derive(Args, Debug, Clone)]
pub struct InitArgs {
    /// Overwrite existing typebuilder.toml if present
    #[arg(short, long)]
    pub force: bool,
}
