//! Clipboard collaborator seam.
//!
//! Phone-number copy actions go through this trait so the engine stays
//! renderer-agnostic: a browser host backs it with the async clipboard API, a
//! desktop host with the system clipboard, tests with an in-memory buffer.
//! Failures are absorbed at the call site with a log record and never
//! propagate into the engine.

use crate::domain::{LocatorError, Result};
use std::cell::RefCell;

/// Clipboard collaborator interface.
pub trait Clipboard {
    /// Places `text` on the clipboard.
    ///
    /// # Errors
    ///
    /// Returns [`LocatorError::Clipboard`] when the underlying clipboard is
    /// unavailable or rejects the write.
    fn copy(&self, text: &str) -> Result<()>;
}

/// Copies `text`, swallowing any failure with a log record.
///
/// This is the engine-boundary wrapper: no clipboard failure may break page
/// rendering, so the error is reported through tracing and dropped.
pub fn copy_best_effort(clipboard: &dyn Clipboard, text: &str) {
    match clipboard.copy(text) {
        Ok(()) => tracing::debug!(text = %text, "copied to clipboard"),
        Err(error) => tracing::warn!(error = %error, "clipboard copy failed"),
    }
}

/// In-memory clipboard for tests and headless hosts.
///
/// Stores the last copied value; `fail` makes every copy return an error to
/// exercise the swallow-and-log path.
#[derive(Debug, Default)]
pub struct BufferClipboard {
    contents: RefCell<Option<String>>,
    fail: bool,
}

impl BufferClipboard {
    /// A clipboard that accepts every write.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard that rejects every write.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            contents: RefCell::new(None),
            fail: true,
        }
    }

    /// The most recently copied value, if any.
    #[must_use]
    pub fn contents(&self) -> Option<String> {
        self.contents.borrow().clone()
    }
}

impl Clipboard for BufferClipboard {
    fn copy(&self, text: &str) -> Result<()> {
        if self.fail {
            return Err(LocatorError::Clipboard("clipboard unavailable".to_string()));
        }
        *self.contents.borrow_mut() = Some(text.to_string());
        Ok(())
    }
}
