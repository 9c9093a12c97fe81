//! Upward project-root search.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::application::ports::Filesystem;
use crate::domain::ROOT_MARKERS;

/// Walk from `start` towards the filesystem root, returning the first
/// directory that directly contains any marker file.
///
/// `start` should be an absolute path (the CLI passes the current working
/// directory). The walk performs only read-only existence checks and is
/// deterministic for a fixed filesystem snapshot. Returns `None` when the
/// filesystem root is reached without a match — including when `start`
/// itself is the root.
pub fn find_project_root(filesystem: &dyn Filesystem, start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        if ROOT_MARKERS
            .iter()
            .any(|marker| filesystem.exists(&current.join(marker)))
        {
            debug!(root = %current.display(), "marker found");
            return Some(current);
        }

        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => {
                debug!(start = %start.display(), "no marker up to filesystem root");
                return None;
            }
        }
    }
}
