//! Replaying adapter for the `Notifier` port.

use std::sync::Mutex;

use super::next_output;
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::{Notification, Notifier};

/// Consumes one recorded notification per call and keeps what it was shown.
pub struct ReplayingNotifier {
    replayer: Mutex<CassetteReplayer>,
    shown: Mutex<Vec<Notification>>,
}

impl ReplayingNotifier {
    /// Serves notifications from `replayer`.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer), shown: Mutex::new(Vec::new()) }
    }

    /// Notifications received so far, oldest first.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock was poisoned.
    #[must_use]
    pub fn shown(&self) -> Vec<Notification> {
        self.shown.lock().expect("notifier lock poisoned").clone()
    }
}

impl Notifier for ReplayingNotifier {
    fn notify(&self, notification: &Notification) {
        let _ = next_output(&self.replayer, "notifier", "notify");
        self.shown.lock().expect("notifier lock poisoned").push(notification.clone());
    }
}
