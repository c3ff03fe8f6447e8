use crate::config::{GeneratorConfig, SetterCase};
use crate::extract::Member;
use convert_case::{Case, Casing};
use tracing::debug;

/// Per-property text fragments, all three sequences in member order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyOutput {
    /// `private name: type = undefined`
    pub definitions: Vec<String>,
    /// Public fluent setter, one full method per entry
    pub external_setters: Vec<String>,
    /// `name: this.name`, the entries of the object returned by `build`
    pub local_setters: Vec<String>,
}

impl PropertyOutput {
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

/// Name of the fluent setter for `property`, e.g. `withFirstName`.
pub fn setter_name(property: &str, config: &GeneratorConfig) -> String {
    let suffix = match config.setter_case {
        SetterCase::Capitalize => capitalize(property),
        SetterCase::Pascal => property.to_case(Case::Pascal),
    };
    format!("{}{}", config.setter_prefix, suffix)
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn generate_property_output(members: &[Member], config: &GeneratorConfig) -> PropertyOutput {
    let indent = config.indent();
    let mut output = PropertyOutput::default();

    for member in members {
        let name = &member.name;
        let data_type = &member.data_type;
        let marker = if member.optional { "?" } else { "" };

        output.definitions.push(format!(
            "private {}{}: {} = {}",
            name, marker, data_type, config.field_initializer
        ));
        output.external_setters.push(format!(
            "public {}(value: {}) {{\n{indent}this.{} = value\n{indent}return this\n}}",
            setter_name(name, config),
            data_type,
            name,
        ));
        output.local_setters.push(format!("{}: this.{}", name, name));
    }

    debug!(property_count = output.len(), "Generated property output");
    output
}
