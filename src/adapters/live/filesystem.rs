//! Live filesystem adapter using `std::fs`.

use std::path::Path;

use crate::ports::filesystem::FileSystem;
use crate::ports::PortError;

/// Writes to the real disk.
pub struct LiveFileSystem;

impl FileSystem for LiveFileSystem {
    fn write(&self, path: &Path, contents: &str) -> Result<(), PortError> {
        self.write_bytes(path, contents.as_bytes())
    }

    fn write_bytes(&self, path: &Path, contents: &[u8]) -> Result<(), PortError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, contents)?;
        tracing::info!(path = %path.display(), bytes = contents.len(), "wrote file");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_into_new_directory() {
        let dir = std::env::temp_dir().join("payqr_live_fs_test");
        let path = dir.join("nested").join("code.svg");

        LiveFileSystem.write(&path, "<svg/>").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<svg/>");

        LiveFileSystem.write_bytes(&path, &[1, 2, 3]).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), vec![1, 2, 3]);

        let _ = std::fs::remove_dir_all(&dir);
    }
}
