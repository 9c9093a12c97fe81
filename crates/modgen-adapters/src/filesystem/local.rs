//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use modgen_core::{application::ports::Filesystem, error::ModgenResult};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir(&self, path: &Path) -> ModgenResult<()> {
        std::fs::create_dir(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn create_dir_all(&self, path: &Path) -> ModgenResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> ModgenResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

/// Permission failures get their own variant; everything else keeps the
/// underlying message.
fn map_io_error(path: &Path, e: io::Error, operation: &str) -> modgen_core::error::ModgenError {
    use modgen_core::application::ApplicationError;

    match e.kind() {
        io::ErrorKind::PermissionDenied => ApplicationError::PermissionDenied {
            path: path.to_path_buf(),
        }
        .into(),
        _ => ApplicationError::Filesystem {
            path: path.to_path_buf(),
            reason: format!("failed to {}: {}", operation, e),
        }
        .into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use modgen_core::application::ApplicationError;
    use modgen_core::error::ModgenError;

    #[test]
    fn permission_denied_maps_to_distinct_variant() {
        let err = map_io_error(
            Path::new("/protected"),
            io::Error::from(io::ErrorKind::PermissionDenied),
            "create directory",
        );
        assert!(matches!(
            err,
            ModgenError::Application(ApplicationError::PermissionDenied { .. })
        ));
    }

    #[test]
    fn other_errors_carry_the_underlying_message() {
        let err = map_io_error(
            Path::new("/full"),
            io::Error::new(io::ErrorKind::StorageFull, "disk full"),
            "write file",
        );
        match err {
            ModgenError::Application(ApplicationError::Filesystem { reason, .. }) => {
                assert!(reason.contains("write file"));
                assert!(reason.contains("disk full"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
