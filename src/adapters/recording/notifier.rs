//! Recording adapter for the `Notifier` port.

use super::record_interaction;
use crate::cassette::session::SharedRecorder;
use crate::ports::{Notification, Notifier};

/// Records notifications while delegating to an inner notifier.
pub struct RecordingNotifier {
    inner: Box<dyn Notifier>,
    recorder: SharedRecorder,
}

impl RecordingNotifier {
    /// Wraps `inner`, appending each notification to `recorder`.
    pub fn new(inner: Box<dyn Notifier>, recorder: SharedRecorder) -> Self {
        Self { inner, recorder }
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: &Notification) {
        self.inner.notify(notification);
        record_interaction(&self.recorder, "notifier", "notify", notification, &());
    }
}
