//! Clipboard port for handing text to the platform clipboard.

use std::future::Future;
use std::pin::Pin;

use super::PortError;

/// Boxed future returned by [`Clipboard::write_text`], keeping the trait dyn-compatible.
pub type ClipboardFuture<'a> = Pin<Box<dyn Future<Output = Result<(), PortError>> + Send + 'a>>;

/// Writes text to the system clipboard.
///
/// Each call is independent; a slow write finishing after later form edits
/// only reports on the text it was given.
pub trait Clipboard: Send + Sync {
    /// Places `text` on the clipboard.
    ///
    /// # Errors
    ///
    /// Resolves to an error if no clipboard is reachable or the write is refused.
    fn write_text(&self, text: &str) -> ClipboardFuture<'_>;
}
