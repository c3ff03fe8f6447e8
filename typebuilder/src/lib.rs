pub mod cli;
pub mod commands;
pub mod terminal;

pub use typebuilder_core::{config, error, extract, generate, host, output_path};
