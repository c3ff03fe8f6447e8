//! Sequencing of one builder generation run.

use crate::config::{BuilderConfig, GeneratorConfig};
use crate::error::{BuilderFailure, Result};
use crate::extract::{Member, contains_method_signature, extract_alias_name, extract_members};
use crate::generate::{generate_class, generate_property_output};
use crate::host::{ExecutionContext, Host};
use crate::output_path::builder_output_path;
use serde::Serialize;
use tracing::{debug, info};

/// The result of running the text pipeline on one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedBuilder {
    pub alias_name: String,
    pub members: Vec<Member>,
    pub class_text: String,
}

impl GeneratedBuilder {
    /// Pretty-printed JSON of the alias name, members and class text.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Runs the pure text pipeline: validation, extraction and generation.
///
/// No notification is sent; the first failure is returned and no later stage
/// runs.
pub fn generate_builder(
    text: &str,
    config: &GeneratorConfig,
) -> std::result::Result<GeneratedBuilder, BuilderFailure> {
    if text.trim().is_empty() {
        return Err(BuilderFailure::EmptyDocument);
    }
    if contains_method_signature(text) {
        return Err(BuilderFailure::MethodsNotSupported);
    }

    let alias_name = extract_alias_name(text)?;
    let members = extract_members(text)?;

    let property_output = generate_property_output(&members, config);
    let class_text = generate_class(&alias_name, &property_output, config);

    Ok(GeneratedBuilder {
        alias_name,
        members,
        class_text,
    })
}

/// Text of the host's active document, provided a workspace is open.
///
/// These are the checks every run makes before looking at the text.
pub fn active_document_text<H: Host + ?Sized>(
    context: &ExecutionContext,
    host: &H,
) -> std::result::Result<String, BuilderFailure> {
    let Some(workspace_root) = &context.workspace_root else {
        return Err(BuilderFailure::NoWorkspace);
    };
    debug!("Workspace root: {:?}", workspace_root);

    host.active_document_text()
        .ok_or(BuilderFailure::NoActiveDocument)
}

/// Creates the builder file for the host's active document.
///
/// Exactly one notification is sent through `host`: an info message naming
/// the written file, or the error that stopped the run. The returned value
/// carries the same outcome for callers that need an exit status.
pub fn execute<H: Host + ?Sized>(
    context: &ExecutionContext,
    host: &mut H,
    config: &BuilderConfig,
) -> std::result::Result<String, BuilderFailure> {
    match run(context, host, config) {
        Ok(output_path) => {
            info!("Builder file written to {}", output_path);
            host.report_info(&format!("Builder created: {}", output_path));
            Ok(output_path)
        }
        Err(failure) => {
            info!("Builder generation stopped: {:?}", failure);
            host.report_error(&failure.to_string());
            Err(failure)
        }
    }
}

fn run<H: Host + ?Sized>(
    context: &ExecutionContext,
    host: &mut H,
    config: &BuilderConfig,
) -> std::result::Result<String, BuilderFailure> {
    let text = active_document_text(context, host)?;
    let source_path = host
        .active_document_path()
        .ok_or(BuilderFailure::MissingDocumentPath)?;
    info!("Creating builder for {}", source_path);

    let builder = generate_builder(&text, &config.generator)?;
    debug!(
        alias_name = %builder.alias_name,
        member_count = builder.members.len(),
        "Builder class generated"
    );

    let output_path = builder_output_path(&source_path, &config.output.suffix);
    host.write_file(&output_path, &builder.class_text)
        .map_err(BuilderFailure::save_failed)?;

    Ok(output_path)
}
