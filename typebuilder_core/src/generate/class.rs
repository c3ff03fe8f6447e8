use super::property_output::PropertyOutput;
use crate::config::GeneratorConfig;
use tracing::debug;

/// Assembles the builder class for `alias_name`.
///
/// Fields come first, then `build`, then one setter per property. Every
/// section keeps the order of `output`, which is the source order of the
/// type alias members.
pub fn generate_class(alias_name: &str, output: &PropertyOutput, config: &GeneratorConfig) -> String {
    let indent = config.indent();
    let export = if config.export_class { "export " } else { "" };
    let mut class = String::new();

    class.push_str(&format!("{}class {}Builder {{\n", export, alias_name));
    for definition in &output.definitions {
        class.push_str(&format!("{}{}\n", indent, definition));
    }

    class.push('\n');
    class.push_str(&format!("{}public build(): {} {{\n", indent, alias_name));
    class.push_str(&format!("{}return {{\n", indent.repeat(2)));
    if !output.local_setters.is_empty() {
        let entries = output
            .local_setters
            .iter()
            .map(|entry| format!("{}{}", indent.repeat(3), entry))
            .collect::<Vec<_>>()
            .join(",\n");
        class.push_str(&entries);
        class.push('\n');
    }
    class.push_str(&format!("{}}}\n", indent.repeat(2)));
    class.push_str(&format!("{}}}\n", indent));

    for setter in &output.external_setters {
        class.push('\n');
        class.push_str(&indent_lines(setter, &indent));
    }

    class.push_str("}\n");

    debug!(
        class_name = %format!("{}Builder", alias_name),
        output_length = class.len(),
        "Generated builder class"
    );
    class
}

fn indent_lines(block: &str, indent: &str) -> String {
    block
        .lines()
        .map(|line| {
            if line.is_empty() {
                "\n".to_string()
            } else {
                format!("{}{}\n", indent, line)
            }
        })
        .collect()
}
