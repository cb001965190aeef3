//! Recording adapters that capture interactions to cassettes.

pub mod clipboard;
pub mod filesystem;
pub mod notifier;

pub use clipboard::RecordingClipboard;
pub use filesystem::RecordingFileSystem;
pub use notifier::RecordingNotifier;

use serde::Serialize;
use serde_json::Value;

use crate::cassette::session::SharedRecorder;

fn to_json<T: Serialize>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "failed to serialize cassette value");
        Value::Null
    })
}

fn push(recorder: &SharedRecorder, port: &str, method: &str, input: Value, output: Value) {
    match recorder.lock() {
        Ok(mut guard) => guard.record(port, method, input, output),
        Err(e) => tracing::warn!(port, method, error = %e, "recorder lock poisoned"),
    }
}

/// Records an infallible call.
pub(crate) fn record_interaction<I, O>(
    recorder: &SharedRecorder,
    port: &str,
    method: &str,
    input: &I,
    output: &O,
) where
    I: Serialize,
    O: Serialize,
{
    push(recorder, port, method, to_json(input), to_json(output));
}

/// Records a fallible call as `{"Ok": value}` or `{"Err": message}`.
pub(crate) fn record_result<I, T, E>(
    recorder: &SharedRecorder,
    port: &str,
    method: &str,
    input: &I,
    result: &Result<T, E>,
) where
    I: Serialize,
    T: Serialize,
    E: std::fmt::Display,
{
    let output = match result {
        Ok(value) => serde_json::json!({ "Ok": to_json(value) }),
        Err(e) => serde_json::json!({ "Err": e.to_string() }),
    };
    push(recorder, port, method, to_json(input), output);
}
