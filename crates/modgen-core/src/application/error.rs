//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// No ancestor of the starting directory contains a marker file.
    ///
    /// Fatal at service construction time; nothing has been written when
    /// this is returned.
    #[error("could not find project root (no package.json or tsconfig.json found)")]
    RootNotFound { searched_from: PathBuf },

    /// A module with this name already exists under the base path.
    #[error("module '{name}' already exists at {path}")]
    ModuleExists { name: String, path: PathBuf },

    /// The OS refused a creation call.
    #[error("permission denied: unable to create directory or files")]
    PermissionDenied { path: PathBuf },

    /// Any other OS-level filesystem failure, with the underlying message.
    #[error("filesystem error at {path}: {reason}")]
    Filesystem { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::RootNotFound { searched_from } => vec![
                format!(
                    "No package.json or tsconfig.json found in {} or any parent directory",
                    searched_from.display()
                ),
                "Run this command from inside a project".into(),
            ],
            Self::ModuleExists { path, .. } => vec![
                format!("Directory already exists: {}", path.display()),
                "Choose a different module name".into(),
                format!("Or remove the existing directory: rm -rf {}", path.display()),
            ],
            Self::PermissionDenied { path } => vec![
                format!("Failed to write under: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::Filesystem { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::RootNotFound { .. } => ErrorCategory::NotFound,
            Self::ModuleExists { .. } => ErrorCategory::Validation,
            Self::PermissionDenied { .. } | Self::Filesystem { .. } => ErrorCategory::Internal,
        }
    }
}
