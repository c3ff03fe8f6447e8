use crate::error::{Result, TypeBuilderError};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use tracing::{debug, error, info, trace, warn};

/// Name of the configuration file searched for in the workspace.
pub const CONFIG_FILE_NAME: &str = "typebuilder.toml";

/// Pattern to match ${VAR_NAME} or ${VAR_NAME:-default}
static ENV_VAR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$\{([^}:]+)(?::-([^}]*))?\}")
        .expect("Invalid regex for environment variable substitution")
});

/// How the property name is turned into the setter suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SetterCase {
    /// Upper-case the first character only: `firstName` -> `withFirstName`
    #[default]
    Capitalize,
    /// Full PascalCase conversion: `first_name` -> `withFirstName`
    Pascal,
}

/// Settings that shape the generated builder class.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Prefix of every fluent setter method
    pub setter_prefix: String,
    /// Casing applied to the property name after the prefix
    pub setter_case: SetterCase,
    /// Initial value assigned to every private field
    pub field_initializer: String,
    /// Number of spaces per indentation level
    pub indent_width: usize,
    /// Whether the class is declared with `export`
    pub export_class: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            setter_prefix: "with".to_string(),
            setter_case: SetterCase::default(),
            field_initializer: "undefined".to_string(),
            indent_width: 2,
            export_class: true,
        }
    }
}

impl GeneratorConfig {
    /// One level of indentation.
    pub fn indent(&self) -> String {
        " ".repeat(self.indent_width)
    }
}

/// Settings for the generated file name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Inserted before the source extension: `<base>.<suffix>.<ext>`
    pub suffix: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            suffix: "builder".to_string(),
        }
    }
}

/// Root configuration, read from `typebuilder.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
pub struct BuilderConfig {
    #[serde(default)]
    pub generator: GeneratorConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl BuilderConfig {
    /// Loads the configuration.
    ///
    /// An explicit path must exist. Without one, `typebuilder.toml` is searched
    /// for in `search_root` and its ancestors; when none is found the defaults
    /// are used.
    pub fn load(explicit_path: Option<&Path>, search_root: &Path) -> Result<BuilderConfig> {
        let config_path = match explicit_path {
            Some(path) => {
                if !path.is_file() {
                    error!("Configuration file not found: {:?}", path);
                    return Err(TypeBuilderError::invalid_path(path));
                }
                Some(path.to_path_buf())
            }
            None => Self::find_config_file(search_root),
        };

        let Some(config_path) = config_path else {
            info!("No {} found, using default configuration", CONFIG_FILE_NAME);
            return Ok(BuilderConfig::default());
        };

        info!("Found configuration file at: {:?}", config_path);
        let contents = fs::read_to_string(&config_path).map_err(|e| {
            error!("Failed to read configuration file: {}", e);
            TypeBuilderError::from(e)
        })?;
        debug!("Configuration file size: {} bytes", contents.len());

        Self::from_toml_str(&contents)
    }

    /// Parses, substitutes environment variables and validates a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<BuilderConfig> {
        let mut config: BuilderConfig = toml::from_str(contents).map_err(|e| {
            error!("Failed to parse TOML configuration: {}", e);
            TypeBuilderError::config(e.to_string())
        })?;

        config.generator.setter_prefix = Self::substitute_env_vars(&config.generator.setter_prefix)?;
        config.generator.field_initializer =
            Self::substitute_env_vars(&config.generator.field_initializer)?;
        config.output.suffix = Self::substitute_env_vars(&config.output.suffix)?;

        config.validate()?;
        debug!(
            "Generator: prefix={}, case={:?}, indent={}, export={}; output suffix={}",
            config.generator.setter_prefix,
            config.generator.setter_case,
            config.generator.indent_width,
            config.generator.export_class,
            config.output.suffix
        );
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.generator.indent_width == 0 {
            return Err(TypeBuilderError::invalid_config_value(
                "generator.indent_width",
                "0",
            ));
        }
        if self.generator.setter_prefix.trim().is_empty() {
            return Err(TypeBuilderError::invalid_config_value(
                "generator.setter_prefix",
                &self.generator.setter_prefix,
            ));
        }
        if self.output.suffix.trim().is_empty() || self.output.suffix.contains(['/', '\\']) {
            return Err(TypeBuilderError::invalid_config_value(
                "output.suffix",
                &self.output.suffix,
            ));
        }
        Ok(())
    }

    /// Searches for `typebuilder.toml` starting from `start` and traversing up
    /// to the root.
    fn find_config_file(start: &Path) -> Option<PathBuf> {
        debug!("Starting config file search from: {:?}", start);
        for path in start.ancestors() {
            let config_path = path.join(CONFIG_FILE_NAME);
            trace!("Checking for config at: {:?}", config_path);
            if config_path.is_file() {
                return Some(config_path);
            }
        }
        None
    }

    /// Expands `${VAR}` and `${VAR:-default}` references in `value`.
    fn substitute_env_vars(value: &str) -> Result<String> {
        let mut expanded = String::with_capacity(value.len());
        let mut copied_up_to = 0;

        for caps in ENV_VAR_RE.captures_iter(value) {
            let Some(reference) = caps.get(0) else {
                continue;
            };
            let name = &caps[1];
            let resolved = match (env::var(name), caps.get(2)) {
                (Ok(set), _) => set,
                (Err(_), Some(fallback)) => {
                    warn!(variable = name, "Unset variable in configuration, using its default");
                    fallback.as_str().to_string()
                }
                (Err(_), None) => return Err(TypeBuilderError::EnvVarNotSet(name.to_string())),
            };

            expanded.push_str(&value[copied_up_to..reference.start()]);
            expanded.push_str(&resolved);
            copied_up_to = reference.end();
        }

        expanded.push_str(&value[copied_up_to..]);
        Ok(expanded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    // ==================== Defaults ====================

    #[test]
    fn test_default_config() {
        let config = BuilderConfig::default();
        assert_eq!(config.generator.setter_prefix, "with");
        assert_eq!(config.generator.setter_case, SetterCase::Capitalize);
        assert_eq!(config.generator.field_initializer, "undefined");
        assert_eq!(config.generator.indent(), "  ");
        assert!(config.generator.export_class);
        assert_eq!(config.output.suffix, "builder");
    }

    #[test]
    fn test_deserialize_empty_document() {
        let config = BuilderConfig::from_toml_str("").unwrap();
        assert_eq!(config, BuilderConfig::default());
    }

    #[test]
    fn test_deserialize_partial_sections() {
        let toml_str = r#"
            [generator]
            setter_prefix = "set"
            setter_case = "pascal"
            indent_width = 4
        "#;
        let config = BuilderConfig::from_toml_str(toml_str).unwrap();
        assert_eq!(config.generator.setter_prefix, "set");
        assert_eq!(config.generator.setter_case, SetterCase::Pascal);
        assert_eq!(config.generator.indent(), "    ");
        assert_eq!(config.generator.field_initializer, "undefined");
        assert_eq!(config.output.suffix, "builder");
    }

    // ==================== Validation ====================

    #[test]
    fn test_zero_indent_is_rejected() {
        let err = BuilderConfig::from_toml_str("[generator]\nindent_width = 0").unwrap_err();
        assert!(matches!(err, TypeBuilderError::InvalidConfigValue { ref key, .. } if key == "generator.indent_width"));
    }

    #[test]
    fn test_empty_prefix_is_rejected() {
        let err = BuilderConfig::from_toml_str("[generator]\nsetter_prefix = \"\"").unwrap_err();
        assert!(matches!(err, TypeBuilderError::InvalidConfigValue { .. }));
    }

    #[test]
    fn test_suffix_with_separator_is_rejected() {
        let err = BuilderConfig::from_toml_str("[output]\nsuffix = \"a/b\"").unwrap_err();
        assert!(matches!(err, TypeBuilderError::InvalidConfigValue { ref key, .. } if key == "output.suffix"));
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = BuilderConfig::from_toml_str("invalid toml content {{{").unwrap_err();
        assert!(matches!(err, TypeBuilderError::Config(_)));
    }

    #[test]
    fn test_unknown_setter_case_is_rejected() {
        assert!(BuilderConfig::from_toml_str("[generator]\nsetter_case = \"snake\"").is_err());
    }

    // ==================== substitute_env_vars ====================

    #[test]
    fn test_substitute_env_vars_basic() {
        temp_env::with_var("TYPEBUILDER_TEST_PREFIX", Some("using"), || {
            let result = BuilderConfig::substitute_env_vars("${TYPEBUILDER_TEST_PREFIX}").unwrap();
            assert_eq!(result, "using");
        });
    }

    #[test]
    fn test_substitute_env_vars_default() {
        temp_env::with_var_unset("TYPEBUILDER_TEST_UNSET", || {
            let result =
                BuilderConfig::substitute_env_vars("${TYPEBUILDER_TEST_UNSET:-fallback}").unwrap();
            assert_eq!(result, "fallback");
        });
    }

    #[test]
    fn test_substitute_env_vars_missing_returns_error() {
        temp_env::with_var_unset("TYPEBUILDER_TEST_MISSING", || {
            let result = BuilderConfig::substitute_env_vars("${TYPEBUILDER_TEST_MISSING}");
            assert!(matches!(result, Err(TypeBuilderError::EnvVarNotSet(_))));
        });
    }

    #[test]
    fn test_substitute_env_vars_keeps_surrounding_text() {
        temp_env::with_vars(
            [("TYPEBUILDER_TEST_A", Some("x")), ("TYPEBUILDER_TEST_B", None::<&str>)],
            || {
                let result = BuilderConfig::substitute_env_vars(
                    "pre_${TYPEBUILDER_TEST_A}_${TYPEBUILDER_TEST_B:-y}_post",
                )
                .unwrap();
                assert_eq!(result, "pre_x_y_post");
            },
        );
    }

    #[test]
    fn test_substitute_env_vars_no_match() {
        let result = BuilderConfig::substitute_env_vars("no variables here").unwrap();
        assert_eq!(result, "no variables here");
    }

    #[test]
    fn test_env_vars_applied_on_parse() {
        temp_env::with_var("TYPEBUILDER_TEST_SUFFIX", Some("fluent"), || {
            let config =
                BuilderConfig::from_toml_str("[output]\nsuffix = \"${TYPEBUILDER_TEST_SUFFIX}\"")
                    .unwrap();
            assert_eq!(config.output.suffix, "fluent");
        });
    }

    // ==================== load ====================

    #[test]
    fn test_load_without_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = BuilderConfig::load(None, temp_dir.path()).unwrap();
        assert_eq!(config, BuilderConfig::default());
    }

    #[test]
    fn test_load_finds_config_in_ancestor() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("src").join("models");
        fs::create_dir_all(&nested).unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "[generator]\nsetter_prefix = \"set\"\n",
        )
        .unwrap();

        let config = BuilderConfig::load(None, &nested).unwrap();
        assert_eq!(config.generator.setter_prefix, "set");
    }

    #[test]
    fn test_load_explicit_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("custom.toml");
        fs::write(&path, "[output]\nsuffix = \"fluent\"\n").unwrap();

        let config = BuilderConfig::load(Some(&path), Path::new("/")).unwrap();
        assert_eq!(config.output.suffix, "fluent");
    }

    #[test]
    fn test_load_missing_explicit_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.toml");
        let err = BuilderConfig::load(Some(&path), temp_dir.path()).unwrap_err();
        assert!(matches!(err, TypeBuilderError::InvalidPath { .. }));
    }
}
