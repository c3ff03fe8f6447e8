use crate::error::BuilderFailure;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use tracing::{debug, trace, warn};

/// A word ending in one non-whitespace character, directly before a colon.
static PROPERTY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\w*[^\s][ \t]*):").expect("Invalid property regex"));

/// The annotation after a colon, up to a line end, `,`, `;` or `}`.
static DATA_TYPE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r":[ \t]*([^\s,;}][^,;}\r\n]*)").expect("Invalid data type regex")
});

/// Property and annotation matched together, so the pair cannot drift apart.
static MEMBER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\w*[^\s][ \t]*):[ \t]*([^\s,;}][^,;}\r\n]*)").expect("Invalid member regex")
});

/// `name(params):`, optionally with `?` and type parameters before the `(`.
static METHOD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\w+\??\s*(?:<[^>]*>\s*)?\([^)]*\)\s*:").expect("Invalid method regex")
});

/// One property of the type alias and its declared type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Member {
    pub name: String,
    pub data_type: String,
    /// Declared as `name?: type`.
    pub optional: bool,
}

impl Member {
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
            optional: false,
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

/// Splits a raw property match into its clean name and optional marker.
fn clean_property_name(raw: &str) -> (String, bool) {
    let trimmed = raw.trim();
    match trimmed.strip_suffix('?') {
        Some(name) => (name.trim_end().to_string(), true),
        None => (trimmed.to_string(), false),
    }
}

/// Returns true when the text declares something shaped like a method,
/// e.g. `greet(name: string): string`.
pub fn contains_method_signature(text: &str) -> bool {
    let found = METHOD_RE.is_match(text);
    if found {
        debug!("Method signature found in type alias text");
    }
    found
}

/// Extracts the property names of the type alias, in source order.
pub fn extract_properties(text: &str) -> Result<Vec<String>, BuilderFailure> {
    let properties: Vec<String> = PROPERTY_RE
        .captures_iter(text)
        .map(|caps| clean_property_name(&caps[1]).0)
        .collect();

    if properties.is_empty() {
        debug!("No properties found in type alias");
        return Err(BuilderFailure::NoProperties);
    }

    trace!(?properties, "Extracted properties");
    Ok(properties)
}

/// Extracts the declared type of every property, in source order.
///
/// Only simple annotations are supported; generic or nested object types
/// are captured as raw text at best.
pub fn extract_data_types(text: &str) -> Result<Vec<String>, BuilderFailure> {
    let data_types: Vec<String> = DATA_TYPE_RE
        .captures_iter(text)
        .map(|caps| caps[1].trim().to_string())
        .collect();

    if data_types.is_empty() {
        debug!("No data types found in type alias");
        return Err(BuilderFailure::NoDataTypes);
    }

    trace!(?data_types, "Extracted data types");
    Ok(data_types)
}

/// Extracts every property together with its declared type.
///
/// When no complete pair is found the failure names what is missing: the
/// properties themselves, or only their types.
pub fn extract_members(text: &str) -> Result<Vec<Member>, BuilderFailure> {
    let members: Vec<Member> = MEMBER_RE
        .captures_iter(text)
        .map(|caps| {
            let (name, optional) = clean_property_name(&caps[1]);
            Member {
                name,
                data_type: caps[2].trim().to_string(),
                optional,
            }
        })
        .collect();

    if members.is_empty() {
        extract_properties(text)?;
        extract_data_types(text)?;
        warn!("Properties and data types were found but could not be paired");
        return Err(BuilderFailure::NoDataTypes);
    }

    debug!(member_count = members.len(), "Extracted type alias members");
    Ok(members)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const MULTILINE: &str = "export type Test = {
      foo: string
      bar: number
    }";

    #[test]
    fn test_extract_properties() {
        assert_eq!(
            extract_properties(MULTILINE),
            Ok(vec!["foo".to_string(), "bar".to_string()])
        );
    }

    #[test]
    fn test_extract_properties_none_found() {
        assert_eq!(extract_properties("foo bar"), Err(BuilderFailure::NoProperties));
    }

    #[test]
    fn test_extract_properties_empty_body() {
        assert_eq!(
            extract_properties("export type Test = {}"),
            Err(BuilderFailure::NoProperties)
        );
    }

    #[test]
    fn test_extract_data_types() {
        assert_eq!(
            extract_data_types(MULTILINE),
            Ok(vec!["string".to_string(), "number".to_string()])
        );
    }

    #[test]
    fn test_extract_data_types_empty_body() {
        assert_eq!(
            extract_data_types("export type Test = {}"),
            Err(BuilderFailure::NoDataTypes)
        );
    }

    #[test]
    fn test_extract_data_types_stops_at_delimiters() {
        let text = "export type Test = { a: string, b: number; c: boolean }";
        assert_eq!(
            extract_data_types(text),
            Ok(vec![
                "string".to_string(),
                "number".to_string(),
                "boolean".to_string()
            ])
        );
    }

    #[test]
    fn test_extract_members_single_line() {
        assert_eq!(
            extract_members("export type Test = { foo: string }"),
            Ok(vec![Member::new("foo", "string")])
        );
    }

    #[test]
    fn test_extract_members_keeps_source_order() {
        let text = "export type Person = {
            firstName: string;
            lastName: string;
            age: number;
            active: boolean;
        }";
        let members = extract_members(text).unwrap();
        let names: Vec<&str> = members.iter().map(|m| m.name.as_str()).collect();
        let types: Vec<&str> = members.iter().map(|m| m.data_type.as_str()).collect();
        assert_eq!(names, vec!["firstName", "lastName", "age", "active"]);
        assert_eq!(types, vec!["string", "string", "number", "boolean"]);
    }

    #[test]
    fn test_extract_members_matches_independent_scans() {
        let members = extract_members(MULTILINE).unwrap();
        let names: Vec<String> = members.iter().map(|m| m.name.clone()).collect();
        let types: Vec<String> = members.iter().map(|m| m.data_type.clone()).collect();
        assert_eq!(names, extract_properties(MULTILINE).unwrap());
        assert_eq!(types, extract_data_types(MULTILINE).unwrap());
    }

    #[test]
    fn test_extract_members_optional_marker() {
        let text = "export type Test = {
            nickname?: string
            age: number
        }";
        assert_eq!(
            extract_members(text),
            Ok(vec![
                Member::new("nickname", "string").optional(),
                Member::new("age", "number"),
            ])
        );
    }

    #[test]
    fn test_extract_members_empty_body_reports_missing_properties() {
        assert_eq!(
            extract_members("export type Test = {}"),
            Err(BuilderFailure::NoProperties)
        );
    }

    #[test]
    fn test_extract_members_without_types_reports_missing_types() {
        assert_eq!(
            extract_members("export type Test = { foo: }"),
            Err(BuilderFailure::NoDataTypes)
        );
    }

    #[test]
    fn test_method_signature_detection() {
        assert!(contains_method_signature(
            "export type Test = { foo(bar: string): string }"
        ));
        assert!(contains_method_signature(
            "export type Test = {\n  maybe?(): void\n}"
        ));
        assert!(!contains_method_signature(
            "export type Test = { foo: string }"
        ));
        assert!(!contains_method_signature(
            "export type Test = { onClick: (event: string) => void }"
        ));
    }

    #[test]
    fn test_generic_method_signature_detection() {
        assert!(contains_method_signature(
            "export type Test = {\n  foo<T>(x: T): T\n}"
        ));
        assert!(contains_method_signature(
            "export type Test = {\n  pick?<K extends string>(key: K): K\n}"
        ));
        assert!(!contains_method_signature(
            "export type Test = {\n  items: Array<string>\n}"
        ));
    }
}
