//! Replaying adapter for the `Clipboard` port.

use std::sync::Mutex;

use super::{next_output, replay_result};
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::{Clipboard, ClipboardFuture};

/// Answers clipboard writes with recorded outcomes.
pub struct ReplayingClipboard {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingClipboard {
    /// Serves outcomes from `replayer`.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl Clipboard for ReplayingClipboard {
    fn write_text(&self, _text: &str) -> ClipboardFuture<'_> {
        let output = next_output(&self.replayer, "clipboard", "write_text");
        Box::pin(async move { replay_result::<()>(output) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::format::{Cassette, Interaction};
    use chrono::Utc;
    use serde_json::json;

    fn replayer(outputs: &[serde_json::Value]) -> CassetteReplayer {
        let interactions = outputs
            .iter()
            .enumerate()
            .map(|(seq, output)| Interaction {
                seq: seq as u64,
                port: "clipboard".into(),
                method: "write_text".into(),
                input: json!({"text": "x"}),
                output: output.clone(),
            })
            .collect();
        CassetteReplayer::new(&Cassette {
            name: "test".into(),
            recorded_at: Utc::now(),
            tool_version: "0.0.0".into(),
            interactions,
        })
    }

    #[tokio::test]
    async fn replays_recorded_outcomes_in_order() {
        let clipboard =
            ReplayingClipboard::new(replayer(&[json!({"Ok": null}), json!({"Err": "denied"})]));
        assert!(clipboard.write_text("x").await.is_ok());
        let err = clipboard.write_text("x").await.unwrap_err();
        assert_eq!(err.to_string(), "denied");
    }
}
