//! Clipboard seam.
//!
//! The widget copies the display text to the clipboard through this trait,
//! so tests can observe and fail the copy without a browser.

use thiserror::Error;

/// The clipboard could not be written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("clipboard unavailable")]
pub struct ClipboardUnavailable;

/// Write access to a clipboard.
pub trait Clipboard: std::fmt::Debug {
    /// Writes text to the clipboard.
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardUnavailable>;
}

/// In-memory clipboard for tests.
#[derive(Debug, Clone, Default)]
pub struct MockClipboard {
    contents: Option<String>,
    fail: bool,
}

impl MockClipboard {
    /// Creates an empty mock clipboard.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a clipboard that rejects every write.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            contents: None,
            fail: true,
        }
    }

    /// The last text written, if any.
    #[must_use]
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl Clipboard for MockClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardUnavailable> {
        if self.fail {
            return Err(ClipboardUnavailable);
        }
        self.contents = Some(text.to_string());
        Ok(())
    }
}
