//! # Commands
//!
//! One module per operation. Each `run` takes a [`DocumentStore`] plus plain
//! Rust arguments and returns plain Rust types; nothing here knows about HTTP.
//! Path-like names arriving here have been through the API layer, which
//! sanitizes them. Names that only some outcomes need (an upload's
//! alternative name, a rename target) are sanitized by the command itself, so
//! that the failure order stays "missing source" before "bad input".
//!
//! [`DocumentStore`]: crate::store::DocumentStore

pub mod delete;
pub mod diff;
pub mod list;
pub mod read;
pub mod rename;
pub mod save;
pub mod upload;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// Outcome of a command that creates, changes or removes a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdResult {
    /// The document's name after the command ran.
    pub filename: String,
    pub message: CmdMessage,
}

impl CmdResult {
    pub fn new(filename: impl Into<String>, message: CmdMessage) -> Self {
        Self {
            filename: filename.into(),
            message,
        }
    }
}
