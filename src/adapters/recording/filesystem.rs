//! Recording adapter for the `FileSystem` port.

use std::path::Path;

use serde::Serialize;

use super::record_result;
use crate::cassette::session::SharedRecorder;
use crate::ports::{FileSystem, PortError};

/// Records file writes while delegating to an inner filesystem.
pub struct RecordingFileSystem {
    inner: Box<dyn FileSystem>,
    recorder: SharedRecorder,
}

impl RecordingFileSystem {
    /// Wraps `inner`, appending each write to `recorder`.
    pub fn new(inner: Box<dyn FileSystem>, recorder: SharedRecorder) -> Self {
        Self { inner, recorder }
    }
}

// File contents stay out of the cassette; PNG bytes would bloat it.
#[derive(Serialize)]
struct WriteInput {
    path: String,
    bytes: usize,
}

impl WriteInput {
    fn new(path: &Path, bytes: usize) -> Self {
        Self { path: path.display().to_string(), bytes }
    }
}

impl FileSystem for RecordingFileSystem {
    fn write(&self, path: &Path, contents: &str) -> Result<(), PortError> {
        let result = self.inner.write(path, contents);
        record_result(
            &self.recorder,
            "fs",
            "write",
            &WriteInput::new(path, contents.len()),
            &result,
        );
        result
    }

    fn write_bytes(&self, path: &Path, contents: &[u8]) -> Result<(), PortError> {
        let result = self.inner.write_bytes(path, contents);
        record_result(
            &self.recorder,
            "fs",
            "write_bytes",
            &WriteInput::new(path, contents.len()),
            &result,
        );
        result
    }
}
