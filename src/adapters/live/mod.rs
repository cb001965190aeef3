//! Live adapters for real external interactions.

pub mod clipboard;
pub mod filesystem;
pub mod notifier;
