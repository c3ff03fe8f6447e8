//! Preview command - prints the generated builder without writing it.

use super::{load_config, workspace_root};
use crate::cli::{Cli, PreviewArgs, PreviewFormat};
use crate::terminal::TerminalHost;
use std::path::Path;
use tracing::debug;
use typebuilder_core::{
    BuilderFailure, ExecutionContext, Host, Result, TypeBuilderError, active_document_text,
    generate_builder,
};

/// Runs the preview command.
///
/// Failures are reported with the same messages as `generate`.
pub fn run(cli: &Cli, args: PreviewArgs) -> Result<()> {
    let context = ExecutionContext::new(workspace_root(cli));
    let mut host = TerminalHost::new(&args.file, cli.quiet);

    let text = match active_document_text(&context, &host) {
        Ok(text) => text,
        Err(failure) => return Err(report(&mut host, failure)),
    };

    let workspace = context.workspace_root.as_deref().unwrap_or(Path::new("."));
    let config = load_config(cli, workspace)?;
    let builder = match generate_builder(&text, &config.generator) {
        Ok(builder) => builder,
        Err(failure) => return Err(report(&mut host, failure)),
    };
    debug!(
        alias_name = %builder.alias_name,
        member_count = builder.members.len(),
        "Preview generated"
    );

    match args.format {
        PreviewFormat::Text => print!("{}", builder.class_text),
        PreviewFormat::Json => println!("{}", builder.to_json()?),
    }
    Ok(())
}

fn report(host: &mut TerminalHost, failure: BuilderFailure) -> TypeBuilderError {
    debug!("Preview failed: {:?}", failure);
    host.report_error(&failure.to_string());
    TypeBuilderError::Builder(failure)
}
