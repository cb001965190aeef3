//! Service context bundling all port trait objects.

use std::path::Path;

use crate::adapters::live::clipboard::LiveClipboard;
use crate::adapters::live::filesystem::LiveFileSystem;
use crate::adapters::live::notifier::TerminalNotifier;
use crate::adapters::recording::{RecordingClipboard, RecordingFileSystem, RecordingNotifier};
use crate::adapters::replaying::{ReplayingClipboard, ReplayingFileSystem, ReplayingNotifier};
use crate::cassette::config::CassetteConfig;
use crate::cassette::format::Cassette;
use crate::cassette::replayer::CassetteReplayer;
use crate::cassette::session::RecordingSession;
use crate::config::Settings;
use crate::ports::{Clipboard, ClipboardFuture, FileSystem, Notification, Notifier, PortError};

/// Every collaborator the commands talk to.
pub struct ServiceContext {
    /// Platform clipboard.
    pub clipboard: Box<dyn Clipboard>,
    /// User-facing notifications.
    pub notifier: Box<dyn Notifier>,
    /// Output files.
    pub fs: Box<dyn FileSystem>,
}

impl ServiceContext {
    /// Real clipboard, terminal notifications and disk.
    #[must_use]
    pub fn live(settings: &Settings) -> Self {
        Self {
            clipboard: Box::new(LiveClipboard::new(settings.clipboard_command.as_deref())),
            notifier: Box::new(TerminalNotifier),
            fs: Box::new(LiveFileSystem),
        }
    }

    /// Live adapters wrapped in recorders writing per-port cassettes into `dir`.
    ///
    /// Drop the context before calling [`RecordingSession::finish`].
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette directory cannot be created.
    pub fn recording_at(
        dir: &Path,
        settings: &Settings,
    ) -> Result<(Self, RecordingSession), String> {
        let session = RecordingSession::new_in(dir)?;
        let live = Self::live(settings);
        let ctx = Self {
            clipboard: Box::new(RecordingClipboard::new(live.clipboard, session.clipboard.clone())),
            notifier: Box::new(RecordingNotifier::new(live.notifier, session.notifier.clone())),
            fs: Box::new(RecordingFileSystem::new(live.fs, session.fs.clone())),
        };
        Ok((ctx, session))
    }

    /// Every port served from one cassette file.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, String> {
        let cassette = Cassette::load(path)?;
        Ok(Self {
            clipboard: Box::new(ReplayingClipboard::new(CassetteReplayer::new(&cassette))),
            notifier: Box::new(ReplayingNotifier::new(CassetteReplayer::new(&cassette))),
            fs: Box::new(ReplayingFileSystem::new(CassetteReplayer::new(&cassette))),
        })
    }

    /// Each port served from its own cassette; unconfigured ports panic when used.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured cassette cannot be read or parsed.
    pub fn replaying_from(config: &CassetteConfig) -> Result<Self, String> {
        let replayers = config.load_all()?;
        Ok(Self {
            clipboard: match replayers.clipboard {
                Some(r) => Box::new(ReplayingClipboard::new(r)),
                None => Box::new(Unconfigured),
            },
            notifier: match replayers.notifier {
                Some(r) => Box::new(ReplayingNotifier::new(r)),
                None => Box::new(Unconfigured),
            },
            fs: match replayers.fs {
                Some(r) => Box::new(ReplayingFileSystem::new(r)),
                None => Box::new(Unconfigured),
            },
        })
    }
}

/// Stand-in for a port that has no cassette.
struct Unconfigured;

impl Clipboard for Unconfigured {
    fn write_text(&self, _text: &str) -> ClipboardFuture<'_> {
        panic!("clipboard port not configured in CassetteConfig");
    }
}

impl Notifier for Unconfigured {
    fn notify(&self, _notification: &Notification) {
        panic!("notifier port not configured in CassetteConfig");
    }
}

impl FileSystem for Unconfigured {
    fn write(&self, _path: &Path, _contents: &str) -> Result<(), PortError> {
        panic!("fs port not configured in CassetteConfig");
    }

    fn write_bytes(&self, _path: &Path, _contents: &[u8]) -> Result<(), PortError> {
        panic!("fs port not configured in CassetteConfig");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::recorder::CassetteRecorder;
    use serde_json::json;

    #[tokio::test]
    async fn replaying_serves_all_ports_from_one_cassette() {
        let dir = std::env::temp_dir().join("payqr_ctx_mono");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("all.cassette.yaml");
        let mut recorder = CassetteRecorder::new(&path, "all");
        recorder.record("clipboard", "write_text", json!({"text": "x"}), json!({"Ok": null}));
        recorder.record(
            "fs",
            "write",
            json!({"path": "/a", "bytes": 1}),
            json!({"Err": "read-only"}),
        );
        recorder.finish().unwrap();

        let ctx = ServiceContext::replaying(&path).unwrap();
        assert!(ctx.clipboard.write_text("x").await.is_ok());
        assert!(ctx.fs.write(Path::new("/a"), "x").is_err());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    #[should_panic(expected = "not configured in CassetteConfig")]
    fn unconfigured_port_panics() {
        let ctx = ServiceContext::replaying_from(&CassetteConfig::default()).unwrap();
        ctx.notifier.notify(&Notification::success("a", "b"));
    }

    #[test]
    fn recording_context_writes_cassettes_after_drop() {
        let dir = std::env::temp_dir().join("payqr_ctx_recording");
        let _ = std::fs::remove_dir_all(&dir);
        let (ctx, session) = ServiceContext::recording_at(&dir, &Settings::default()).unwrap();
        ctx.fs.write(&dir.join("out.txt"), "hello").unwrap();
        drop(ctx);

        let out = session.finish().unwrap();
        let fs = Cassette::load(&out.join("fs.cassette.yaml")).unwrap();
        assert_eq!(fs.interactions.len(), 1);
        assert_eq!(std::fs::read_to_string(dir.join("out.txt")).unwrap(), "hello");

        let _ = std::fs::remove_dir_all(&dir);
    }
}
