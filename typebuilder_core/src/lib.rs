// typebuilder - fluent builder classes generated from TypeScript type aliases

pub mod config;
pub mod error;
pub mod execute;
pub mod extract;
pub mod generate;
pub mod host;
pub mod output_path;

// Re-export commonly used items for convenience
pub use config::BuilderConfig;
pub use error::{BuilderFailure, Result, TypeBuilderError};
pub use execute::{GeneratedBuilder, active_document_text, execute, generate_builder};
pub use host::{ExecutionContext, Host};
