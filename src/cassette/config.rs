//! Per-port cassette selection for replay.

use std::path::{Path, PathBuf};

use super::format::Cassette;
use super::replayer::CassetteReplayer;

/// Optional cassette file for each port. A port left as `None` is served by
/// an adapter that panics if the code under test calls it.
#[derive(Debug, Clone, Default)]
pub struct CassetteConfig {
    /// Cassette for the clipboard port.
    pub clipboard: Option<PathBuf>,
    /// Cassette for the notifier port.
    pub notifier: Option<PathBuf>,
    /// Cassette for the filesystem port.
    pub fs: Option<PathBuf>,
}

/// Replayers loaded from a [`CassetteConfig`].
#[derive(Debug, Default)]
pub struct PortReplayers {
    /// Clipboard replayer.
    pub clipboard: Option<CassetteReplayer>,
    /// Notifier replayer.
    pub notifier: Option<CassetteReplayer>,
    /// Filesystem replayer.
    pub fs: Option<CassetteReplayer>,
}

impl CassetteConfig {
    /// Points every port at the per-port files a recording session writes
    /// into `dir` (`clipboard.cassette.yaml` and so on), skipping missing ones.
    #[must_use]
    pub fn from_dir(dir: &Path) -> Self {
        let existing = |port: &str| {
            let path = dir.join(format!("{port}.cassette.yaml"));
            path.exists().then_some(path)
        };
        Self {
            clipboard: existing("clipboard"),
            notifier: existing("notifier"),
            fs: existing("fs"),
        }
    }

    /// Loads every configured cassette.
    ///
    /// # Errors
    ///
    /// Returns an error if any configured file cannot be read or parsed.
    pub fn load_all(&self) -> Result<PortReplayers, String> {
        let load = |path: &Option<PathBuf>| -> Result<Option<CassetteReplayer>, String> {
            path.as_deref()
                .map(|p| Cassette::load(p).map(|c| CassetteReplayer::new(&c)))
                .transpose()
        };
        Ok(PortReplayers {
            clipboard: load(&self.clipboard)?,
            notifier: load(&self.notifier)?,
            fs: load(&self.fs)?,
        })
    }
}
