//! Live notifier printing to the terminal.

use crate::ports::notifier::{Notification, NotificationKind, Notifier};

/// Prints notifications as single lines on stderr.
pub struct TerminalNotifier;

/// Formats a notification the way [`TerminalNotifier`] prints it.
#[must_use]
pub fn format_line(notification: &Notification) -> String {
    let marker = match notification.kind {
        NotificationKind::Default => "✔",
        NotificationKind::Destructive => "✖",
    };
    format!("{marker} {}: {}", notification.title, notification.description)
}

impl Notifier for TerminalNotifier {
    fn notify(&self, notification: &Notification) {
        eprintln!("{}", format_line(notification));
    }
}
