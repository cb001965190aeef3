//! Notifier port for transient user-facing messages.

use serde::{Deserialize, Serialize};

/// Visual weight of a notification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// Neutral or positive confirmation.
    #[default]
    Default,
    /// Something the user asked for did not happen.
    Destructive,
}

/// A short-lived message for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Visual weight.
    pub kind: NotificationKind,
    /// Headline.
    pub title: String,
    /// One-line detail.
    pub description: String,
}

impl Notification {
    /// A positive confirmation.
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Default,
            title: title.into(),
            description: description.into(),
        }
    }

    /// An error report.
    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Destructive,
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Delivers notifications to whatever presents them. Delivery cannot fail.
pub trait Notifier: Send + Sync {
    /// Shows `notification` to the user.
    fn notify(&self, notification: &Notification);
}
