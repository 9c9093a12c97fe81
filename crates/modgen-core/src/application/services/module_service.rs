//! Module Service - main application orchestrator.
//!
//! This service coordinates the entire scaffolding workflow:
//! 1. Locate the project root (once, at construction)
//! 2. Validate that the module does not already exist
//! 3. Create the module directory and its six empty files
//!
//! It implements the driving port (incoming) and uses the driven
//! `Filesystem` port (outgoing).

use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use crate::{
    application::{ApplicationError, ports::Filesystem, services::find_project_root},
    domain::{MODULE_BASE_DIR, ModuleName, module_file_names},
    error::ModgenResult,
};

/// The paths written by a successful [`ModuleService::create_module`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedModule {
    /// The module directory itself.
    pub path: PathBuf,
    /// The six created files, in creation order.
    pub files: Vec<PathBuf>,
}

/// Main scaffolding service.
///
/// Holds the resolved base output directory, established once at
/// construction by the root locator. Construction fails when no project
/// root can be found; the caller must abort before attempting any creation.
pub struct ModuleService {
    filesystem: Box<dyn Filesystem>,
    base_path: PathBuf,
}

impl ModuleService {
    /// Create a service rooted at the project containing `start_dir`.
    #[instrument(skip_all, fields(start = %start_dir.display()))]
    pub fn new(filesystem: Box<dyn Filesystem>, start_dir: &Path) -> ModgenResult<Self> {
        let project_root = find_project_root(filesystem.as_ref(), start_dir).ok_or_else(|| {
            ApplicationError::RootNotFound {
                searched_from: start_dir.to_path_buf(),
            }
        })?;

        let base_path = project_root.join(MODULE_BASE_DIR);
        info!(root = %project_root.display(), "project root found");
        info!(base = %base_path.display(), "modules will be created here");

        Ok(Self {
            filesystem,
            base_path,
        })
    }

    /// The resolved base output directory (`<project_root>/src/modules`).
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// The paths `create_module` would write for `name`, without touching
    /// the filesystem. Used for dry-run previews.
    pub fn plan_module(&self, name: &ModuleName) -> CreatedModule {
        let path = self.base_path.join(name.as_str());
        let files = module_file_names(name)
            .iter()
            .map(|file_name| path.join(file_name))
            .collect();
        CreatedModule { path, files }
    }

    /// Create the module directory and its six empty files.
    ///
    /// The base directory is created idempotently first. If the module
    /// directory already exists, fails with `ModuleExists` and performs no
    /// mutation. A failure mid-way leaves what was already created in
    /// place — there is no rollback.
    #[instrument(skip_all, fields(module = %name))]
    pub fn create_module(&self, name: &ModuleName) -> ModgenResult<CreatedModule> {
        self.filesystem.create_dir_all(&self.base_path)?;

        let module_path = self.base_path.join(name.as_str());
        if self.filesystem.exists(&module_path) {
            return Err(ApplicationError::ModuleExists {
                name: name.to_string(),
                path: module_path,
            }
            .into());
        }

        // Non-recursive create: a racing invocation loses here instead of
        // silently sharing the directory.
        self.filesystem.create_dir(&module_path)?;
        info!(path = %module_path.display(), "created directory");

        let file_names = module_file_names(name);
        let mut files = Vec::with_capacity(file_names.len());
        for file_name in file_names {
            let file_path = module_path.join(&file_name);
            self.filesystem.write_file(&file_path, "")?;
            info!(path = %file_path.display(), "created file");
            files.push(file_path);
        }

        info!(module = %name, "module created");
        Ok(CreatedModule {
            path: module_path,
            files,
        })
    }
}
