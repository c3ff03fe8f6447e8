/// Derives the path of the generated builder file from the source path.
///
/// Backslashes are normalized to `/` first, then `<suffix>` is inserted
/// before the final extension: `src/bar.type.ts` becomes
/// `src/bar.type.builder.ts`. A file without an extension gets the suffix
/// appended (`bar` becomes `bar.builder`).
pub fn builder_output_path(source_path: &str, suffix: &str) -> String {
    let normalized = source_path.replace('\\', "/");
    let (directory, file_name) = match normalized.rfind('/') {
        Some(index) => normalized.split_at(index + 1),
        None => ("", normalized.as_str()),
    };

    let builder_file_name = match file_name.rfind('.') {
        Some(index) if index > 0 => {
            let (stem, extension) = file_name.split_at(index);
            format!("{}.{}{}", stem, suffix, extension)
        }
        _ => format!("{}.{}", file_name, suffix),
    };

    format!("{}{}", directory, builder_file_name)
}
