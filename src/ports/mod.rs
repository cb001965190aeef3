//! Port traits defining external boundaries.
//!
//! Each trait is one collaborator the payment-request core talks to
//! (clipboard, user notifications, files). Implementations live in
//! `src/adapters/`.

pub mod clipboard;
pub mod filesystem;
pub mod notifier;

pub use clipboard::{Clipboard, ClipboardFuture};
pub use filesystem::FileSystem;
pub use notifier::{Notification, NotificationKind, Notifier};

/// Error type shared by fallible port methods.
pub type PortError = Box<dyn std::error::Error + Send + Sync>;
