//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `modgen-adapters` implement these.

use std::path::Path;

use crate::error::ModgenResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `modgen_adapters::filesystem::LocalFilesystem` (production)
/// - `modgen_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - `create_dir` is deliberately non-recursive: a lost creation race must
///   surface as "already exists", not silent success
/// - No removal operations — there is no rollback of partial scaffolds
pub trait Filesystem: Send + Sync {
    /// Create a single directory. Fails if it already exists or the parent
    /// is missing.
    fn create_dir(&self, path: &Path) -> ModgenResult<()>;

    /// Create a directory and all parent directories, idempotently.
    fn create_dir_all(&self, path: &Path) -> ModgenResult<()>;

    /// Write content to a file, truncating any existing file.
    fn write_file(&self, path: &Path, content: &str) -> ModgenResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}
