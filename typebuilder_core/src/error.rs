use std::path::PathBuf;
use thiserror::Error;

/// Infrastructure errors: configuration loading, I/O, serialization.
#[derive(Error, Debug)]
pub enum TypeBuilderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value: {key} = {value}")]
    InvalidConfigValue { key: String, value: String },

    #[error("Environment variable not set: {0}")]
    EnvVarNotSet(String),

    #[error("Invalid path: {path}")]
    InvalidPath { path: PathBuf },

    #[error("{0}")]
    Builder(#[from] BuilderFailure),
}

pub type Result<T> = std::result::Result<T, TypeBuilderError>;

impl TypeBuilderError {
    pub fn config(message: impl Into<String>) -> Self {
        TypeBuilderError::Config(message.into())
    }

    pub fn invalid_config_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        TypeBuilderError::InvalidConfigValue {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn invalid_path(path: impl Into<PathBuf>) -> Self {
        TypeBuilderError::InvalidPath { path: path.into() }
    }
}

/// A terminal failure of one builder generation run.
///
/// The `Display` text of each variant is the exact message shown to the user,
/// so these strings must stay stable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuilderFailure {
    #[error("Please open a directory before creating a builder.")]
    NoWorkspace,

    #[error("No open text editor. Please open a type alias file.")]
    NoActiveDocument,

    #[error("No text found. Please open a type alias file.")]
    EmptyDocument,

    #[error("Methods defined in types are not currently supported.")]
    MethodsNotSupported,

    #[error("Could not determine the path of the open type alias file.")]
    MissingDocumentPath,

    #[error("Could not find the type alias name.")]
    AliasNameNotFound,

    #[error("Could not find any properties defined in the type alias.")]
    NoProperties,

    #[error("Could not find any data types defined in the type alias.")]
    NoDataTypes,

    #[error("File save failed: {0}")]
    SaveFailed(String),
}

impl BuilderFailure {
    pub fn save_failed(detail: impl std::fmt::Display) -> Self {
        BuilderFailure::SaveFailed(detail.to_string())
    }
}
