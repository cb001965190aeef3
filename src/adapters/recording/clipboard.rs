//! Recording adapter for the `Clipboard` port.

use serde::Serialize;

use super::record_result;
use crate::cassette::session::SharedRecorder;
use crate::ports::{Clipboard, ClipboardFuture};

/// Records clipboard writes while delegating to an inner clipboard.
pub struct RecordingClipboard {
    inner: Box<dyn Clipboard>,
    recorder: SharedRecorder,
}

impl RecordingClipboard {
    /// Wraps `inner`, appending each write to `recorder`.
    pub fn new(inner: Box<dyn Clipboard>, recorder: SharedRecorder) -> Self {
        Self { inner, recorder }
    }
}

#[derive(Serialize)]
struct WriteTextInput<'a> {
    text: &'a str,
}

impl Clipboard for RecordingClipboard {
    fn write_text(&self, text: &str) -> ClipboardFuture<'_> {
        let text = text.to_string();
        Box::pin(async move {
            let result = self.inner.write_text(&text).await;
            let input = WriteTextInput { text: &text };
            record_result(&self.recorder, "clipboard", "write_text", &input, &result);
            result
        })
    }
}

#[cfg(all(test, unix))]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::adapters::live::clipboard::LiveClipboard;
    use crate::cassette::format::Cassette;
    use crate::cassette::recorder::CassetteRecorder;

    #[tokio::test]
    async fn records_success_and_failure() {
        let dir = std::env::temp_dir().join("payqr_rec_clipboard_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("clipboard.cassette.yaml");
        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(&path, "clip")));

        {
            let ok = RecordingClipboard::new(
                Box::new(LiveClipboard::new(Some("cat > /dev/null"))),
                Arc::clone(&recorder),
            );
            ok.write_text("ethereum:0x1@1?value=1").await.unwrap();
            let failing = RecordingClipboard::new(
                Box::new(LiveClipboard::new(Some("exit 1"))),
                Arc::clone(&recorder),
            );
            assert!(failing.write_text("x").await.is_err());
        }

        let recorder = Arc::try_unwrap(recorder).unwrap().into_inner().unwrap();
        recorder.finish().unwrap();

        let cassette = Cassette::load(&path).unwrap();
        assert_eq!(cassette.interactions.len(), 2);
        assert_eq!(cassette.interactions[0].input["text"], "ethereum:0x1@1?value=1");
        assert!(cassette.interactions[0].output.get("Ok").is_some());
        assert!(cassette.interactions[1].output.get("Err").is_some());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
