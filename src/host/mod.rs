//! The environment a docs command runs in.
//!
//! The command itself never touches a terminal, a browser or an editor
//! buffer. It asks a [`Host`] for the active editor and hands side effects
//! back to it:
//!
//! - read the active document and cursor
//! - open a URL in an external application
//! - show a transient status message
//! - show an error message
//!
//! [`TerminalHost`] is the host used by the `tfdoc` binary.

mod document;
mod terminal;

pub use document::{Document, TextDocument};
pub use terminal::TerminalHost;

use crate::types::Position;
use async_trait::async_trait;
use std::time::Duration;

/// A document together with the cursor placed in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Editor {
    document: TextDocument,
    cursor: Position,
}

impl Editor {
    /// Create an editor. The cursor is clamped into the document.
    #[must_use]
    pub fn new(document: TextDocument, cursor: Position) -> Self {
        let cursor = document.validate_position(cursor);
        Self { document, cursor }
    }

    /// The document being edited.
    #[must_use]
    pub const fn document(&self) -> &TextDocument {
        &self.document
    }

    /// The active cursor position.
    #[must_use]
    pub const fn cursor(&self) -> Position {
        self.cursor
    }
}

/// Services the docs command needs from its environment.
#[async_trait]
pub trait Host: Send + Sync {
    /// The editor that has focus, if any.
    fn active_editor(&self) -> Option<&Editor>;

    /// Open `url` in an external application. Returns whether it worked.
    async fn open_external(&self, url: &str) -> bool;

    /// Show a message that disappears after `duration`.
    fn set_status_bar_message(&self, message: &str, duration: Duration);

    /// Show an error notification.
    fn show_error_message(&self, message: &str);
}
