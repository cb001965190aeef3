//! Replaying adapters that serve recorded interactions.

pub mod clipboard;
pub mod filesystem;
pub mod notifier;

pub use clipboard::ReplayingClipboard;
pub use filesystem::ReplayingFileSystem;
pub use notifier::ReplayingNotifier;

use std::sync::Mutex;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::cassette::replayer::CassetteReplayer;
use crate::ports::PortError;

/// Takes the output of the next recorded `port`/`method` interaction.
fn next_output(replayer: &Mutex<CassetteReplayer>, port: &str, method: &str) -> Value {
    let mut replayer = replayer.lock().expect("replayer lock poisoned");
    replayer.next_interaction(port, method).output
}

/// Rebuilds a `Result` recorded as `{"Ok": value}` or `{"Err": message}`.
fn replay_result<T: DeserializeOwned>(output: Value) -> Result<T, PortError> {
    match output {
        Value::Object(mut map) => {
            if let Some(err) = map.remove("Err") {
                let message = err.as_str().map_or_else(|| err.to_string(), str::to_string);
                return Err(message.into());
            }
            let ok = map.remove("Ok").ok_or("recorded output has neither Ok nor Err")?;
            Ok(serde_json::from_value(ok)?)
        }
        other => Err(format!("recorded output is not a result: {other}").into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn replays_ok_and_err() {
        let ok: Result<(), PortError> = replay_result(json!({"Ok": null}));
        assert!(ok.is_ok());
        let err: Result<(), PortError> = replay_result(json!({"Err": "clipboard busy"}));
        assert_eq!(err.unwrap_err().to_string(), "clipboard busy");
    }

    #[test]
    fn malformed_output_is_an_error() {
        let bare: Result<(), PortError> = replay_result(json!("oops"));
        assert!(bare.is_err());
        let empty: Result<(), PortError> = replay_result(json!({}));
        assert!(empty.is_err());
    }
}
