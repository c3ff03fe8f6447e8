//! The capabilities a builder run needs from its surroundings.

use std::path::PathBuf;

/// Ambient state of the invoking environment, passed explicitly to
/// [`crate::execute::execute`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionContext {
    /// Root directory of the open workspace, if any
    pub workspace_root: Option<PathBuf>,
}

impl ExecutionContext {
    pub fn new(workspace_root: Option<PathBuf>) -> Self {
        Self { workspace_root }
    }
}

/// Host environment: notifications, the active document, and file output.
#[cfg_attr(test, mockall::automock)]
pub trait Host {
    /// Shows an error notification.
    fn report_error(&mut self, message: &str);

    /// Shows an informational notification.
    fn report_info(&mut self, message: &str);

    /// Full text of the active document, or `None` when no document is open.
    fn active_document_text(&self) -> Option<String>;

    /// Path of the active document. Separators may be `/` or `\`.
    fn active_document_path(&self) -> Option<String>;

    /// Writes `content` to `path`, replacing any existing file.
    fn write_file(&mut self, path: &str, content: &str) -> std::io::Result<()>;
}
