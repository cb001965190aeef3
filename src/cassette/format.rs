//! On-disk cassette layout.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One call made through a port.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Interaction {
    /// Position in the recording, starting at zero.
    pub seq: u64,
    /// Port name (`clipboard`, `notifier`, `fs`).
    pub port: String,
    /// Port method invoked.
    pub method: String,
    /// Arguments passed to the method.
    pub input: serde_json::Value,
    /// Value returned, using `{"Ok": ..}` / `{"Err": ..}` for fallible methods.
    pub output: serde_json::Value,
}

/// An ordered list of interactions plus provenance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cassette {
    /// Label chosen by the recorder.
    pub name: String,
    /// When recording finished.
    pub recorded_at: DateTime<Utc>,
    /// Version of the tool that produced the recording.
    pub tool_version: String,
    /// Interactions in call order.
    pub interactions: Vec<Interaction>,
}

impl Cassette {
    /// Parses a cassette from YAML text.
    ///
    /// # Errors
    ///
    /// Returns the parser's message if the YAML does not describe a cassette.
    pub fn from_yaml(text: &str) -> Result<Self, String> {
        serde_yaml::from_str(text).map_err(|e| e.to_string())
    }

    /// Reads and parses a cassette file.
    ///
    /// # Errors
    ///
    /// Returns an error naming the path if reading or parsing fails.
    pub fn load(path: &std::path::Path) -> Result<Self, String> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read cassette file {}: {e}", path.display()))?;
        Self::from_yaml(&text)
            .map_err(|e| format!("Failed to parse cassette file {}: {e}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_hand_written_yaml() {
        let yaml = r#"
name: copy-flow
recorded_at: 2026-01-02T03:04:05Z
tool_version: 0.1.0
interactions:
  - seq: 0
    port: clipboard
    method: write_text
    input: { text: "ethereum:0x1@1?value=1" }
    output: { Ok: null }
  - seq: 1
    port: notifier
    method: notify
    input: { kind: default, title: "Copied!", description: "QR code data copied to clipboard" }
    output: null
"#;
        let cassette = Cassette::from_yaml(yaml).unwrap();
        assert_eq!(cassette.name, "copy-flow");
        assert_eq!(cassette.interactions.len(), 2);
        assert_eq!(cassette.interactions[0].output, json!({"Ok": null}));
        assert_eq!(cassette.interactions[1].input["title"], json!("Copied!"));
    }

    #[test]
    fn load_reports_missing_file() {
        let err = Cassette::load(std::path::Path::new("/nonexistent/payqr.cassette.yaml"))
            .unwrap_err();
        assert!(err.contains("Failed to read cassette file"));
    }
}
