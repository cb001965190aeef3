//! Replaying adapter for the `FileSystem` port.

use std::path::Path;
use std::sync::Mutex;

use super::{next_output, replay_result};
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::{FileSystem, PortError};

/// Answers file writes with recorded outcomes without touching the disk.
pub struct ReplayingFileSystem {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingFileSystem {
    /// Serves outcomes from `replayer`.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl FileSystem for ReplayingFileSystem {
    fn write(&self, _path: &Path, _contents: &str) -> Result<(), PortError> {
        replay_result(next_output(&self.replayer, "fs", "write"))
    }

    fn write_bytes(&self, _path: &Path, _contents: &[u8]) -> Result<(), PortError> {
        replay_result(next_output(&self.replayer, "fs", "write_bytes"))
    }
}
