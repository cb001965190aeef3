//! The "copy data" action.

use crate::ports::{Clipboard, Notification, Notifier};

/// Title and description shown after a successful copy.
pub const COPIED: (&str, &str) = ("Copied!", "QR code data copied to clipboard");
/// Title and description shown when the clipboard refuses the text.
pub const COPY_FAILED: (&str, &str) = ("Error", "Failed to copy to clipboard");

/// What happened to a copy request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    /// The text is on the clipboard.
    Copied,
    /// The clipboard write failed, with the reason.
    Failed(String),
}

impl CopyOutcome {
    /// Whether the copy succeeded.
    #[must_use]
    pub fn is_copied(&self) -> bool {
        matches!(self, Self::Copied)
    }
}

/// Writes `text` to the clipboard and tells the user how it went.
///
/// Failure is reported through a destructive notification and never retried.
pub async fn copy_to_clipboard(
    clipboard: &dyn Clipboard,
    notifier: &dyn Notifier,
    text: &str,
) -> CopyOutcome {
    match clipboard.write_text(text).await {
        Ok(()) => {
            notifier.notify(&Notification::success(COPIED.0, COPIED.1));
            CopyOutcome::Copied
        }
        Err(err) => {
            tracing::warn!(error = %err, "clipboard write failed");
            notifier.notify(&Notification::destructive(COPY_FAILED.0, COPY_FAILED.1));
            CopyOutcome::Failed(err.to_string())
        }
    }
}
