//! Module name value object.
//!
//! A [`ModuleName`] is used verbatim as a directory name and as a filename
//! prefix, so construction is the single validation point: a value that
//! parses is safe to join onto the base path.

use std::fmt;
use std::str::FromStr;

use crate::domain::error::DomainError;

/// A validated module name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModuleName(String);

impl ModuleName {
    /// Validate and wrap a raw name.
    ///
    /// Rejected: empty names, names containing path separators, the
    /// traversal components `.` and `..`, and names starting with `.`.
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();

        let reason = if name.is_empty() {
            Some("name cannot be empty")
        } else if name.contains('/') || name.contains('\\') {
            Some("name cannot contain path separators")
        } else if name == "." || name == ".." {
            Some("name cannot be a path traversal component")
        } else if name.starts_with('.') {
            Some("name cannot start with '.'")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(DomainError::InvalidModuleName {
                name,
                reason: reason.into(),
            }),
            None => Ok(Self(name)),
        }
    }

    /// The validated name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ModuleName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for ModuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ModuleName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
