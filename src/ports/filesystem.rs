//! Filesystem port for writing rendered codes to disk.

use std::path::Path;

use super::PortError;

/// Writes output files.
pub trait FileSystem: Send + Sync {
    /// Writes UTF-8 text to `path`, creating parent directories and
    /// replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails (permissions, disk full, etc.).
    fn write(&self, path: &Path, contents: &str) -> Result<(), PortError>;

    /// Writes raw bytes to `path`, with the same semantics as [`FileSystem::write`].
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn write_bytes(&self, path: &Path, contents: &[u8]) -> Result<(), PortError>;
}
