//! A recording session writing one cassette per port.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use super::recorder::CassetteRecorder;

/// Shared handle to one port's recorder.
pub type SharedRecorder = Arc<Mutex<CassetteRecorder>>;

/// Recorders for every port, writing `<port>.cassette.yaml` files into one
/// directory.
pub struct RecordingSession {
    /// Recorder for clipboard writes.
    pub clipboard: SharedRecorder,
    /// Recorder for notifications.
    pub notifier: SharedRecorder,
    /// Recorder for file writes.
    pub fs: SharedRecorder,
    output_dir: PathBuf,
}

impl RecordingSession {
    /// Creates `dir` if needed and prepares a recorder per port.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn new_in(dir: &Path) -> Result<Self, String> {
        std::fs::create_dir_all(dir)
            .map_err(|e| format!("Failed to create cassette directory {}: {e}", dir.display()))?;
        let stamp = chrono::Utc::now().format("%Y-%m-%dT%H-%M-%S");
        let recorder = |port: &str| -> SharedRecorder {
            Arc::new(Mutex::new(CassetteRecorder::new(
                dir.join(format!("{port}.cassette.yaml")),
                format!("{stamp}-{port}"),
            )))
        };
        Ok(Self {
            clipboard: recorder("clipboard"),
            notifier: recorder("notifier"),
            fs: recorder("fs"),
            output_dir: dir.to_path_buf(),
        })
    }

    /// Writes every cassette and returns the output directory.
    ///
    /// All recording adapters must have been dropped first.
    ///
    /// # Errors
    ///
    /// Returns an error if an adapter still holds a recorder or a file
    /// cannot be written.
    pub fn finish(self) -> Result<PathBuf, String> {
        let ports = [("clipboard", self.clipboard), ("notifier", self.notifier), ("fs", self.fs)];
        for (port, shared) in ports {
            let recorder = Arc::try_unwrap(shared)
                .map_err(|_| format!("Recording adapter for {port} still has references"))?
                .into_inner()
                .map_err(|e| format!("Recorder lock for {port} poisoned: {e}"))?;
            recorder.finish().map_err(|e| format!("Failed to write {port} cassette: {e}"))?;
        }
        Ok(self.output_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::format::Cassette;
    use serde_json::json;

    #[test]
    fn finish_writes_a_cassette_per_port() {
        let dir = std::env::temp_dir().join("payqr_session_test");
        let _ = std::fs::remove_dir_all(&dir);

        let session = RecordingSession::new_in(&dir).unwrap();
        assert!(dir.exists());
        session.clipboard.lock().unwrap().record(
            "clipboard",
            "write_text",
            json!({"text": "x"}),
            json!({"Ok": null}),
        );

        assert_eq!(session.finish().unwrap(), dir);
        let clip = Cassette::load(&dir.join("clipboard.cassette.yaml")).unwrap();
        assert_eq!(clip.interactions.len(), 1);
        let notes = Cassette::load(&dir.join("notifier.cassette.yaml")).unwrap();
        assert!(notes.interactions.is_empty());
        assert!(dir.join("fs.cassette.yaml").exists());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn finish_refuses_while_adapter_holds_recorder() {
        let dir = std::env::temp_dir().join("payqr_session_busy_test");
        let session = RecordingSession::new_in(&dir).unwrap();
        let _held = Arc::clone(&session.fs);
        let err = session.finish().unwrap_err();
        assert!(err.contains("fs still has references"));
        let _ = std::fs::remove_dir_all(&dir);
    }
}
