use crate::error::BuilderFailure;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, trace};

static ALIAS_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bexport type\s(\w+)").expect("Invalid alias name regex"));

/// Extracts the name of the first exported type alias.
///
/// The name is the first word that directly follows `export type` and a
/// single whitespace character. Generic parameters after the name are left
/// alone, so `export type Page<T> = ...` yields `Page`.
pub fn extract_alias_name(text: &str) -> Result<String, BuilderFailure> {
    trace!("Searching for type alias name in {} bytes", text.len());

    let Some(captures) = ALIAS_NAME_RE.captures(text) else {
        debug!("No `export type` declaration found");
        return Err(BuilderFailure::AliasNameNotFound);
    };

    let name = captures[1].to_string();
    debug!(alias_name = %name, "Found type alias name");
    Ok(name)
}
