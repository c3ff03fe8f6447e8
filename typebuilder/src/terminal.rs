//! Host implementation backed by the filesystem and the terminal.

use std::fs;
use std::path::PathBuf;
use tracing::debug;
use typebuilder_core::Host;

/// Treats a file on disk as the active document.
///
/// Info notifications go to stdout (suppressed when `quiet`), errors to
/// stderr.
#[derive(Debug, Clone)]
pub struct TerminalHost {
    document: PathBuf,
    quiet: bool,
}

impl TerminalHost {
    pub fn new(document: impl Into<PathBuf>, quiet: bool) -> Self {
        Self {
            document: document.into(),
            quiet,
        }
    }
}

impl Host for TerminalHost {
    fn report_error(&mut self, message: &str) {
        eprintln!("{}", message);
    }

    fn report_info(&mut self, message: &str) {
        if !self.quiet {
            println!("{}", message);
        }
    }

    fn active_document_text(&self) -> Option<String> {
        match fs::read_to_string(&self.document) {
            Ok(text) => {
                debug!("Read {} bytes from {:?}", text.len(), self.document);
                Some(text)
            }
            Err(e) => {
                debug!("Could not read {:?}: {}", self.document, e);
                None
            }
        }
    }

    fn active_document_path(&self) -> Option<String> {
        self.document.to_str().map(str::to_string)
    }

    fn write_file(&mut self, path: &str, content: &str) -> std::io::Result<()> {
        fs::write(path, content)
    }
}
