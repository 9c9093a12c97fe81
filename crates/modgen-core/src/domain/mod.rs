//! Core domain layer for Modgen.
//!
//! This module contains pure business logic with ZERO external dependencies.
//! All I/O concerns are handled via ports (traits) defined in the application
//! layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library + thiserror
//! - **Immutable entities**: All domain objects are Clone + PartialEq

pub mod error;
pub mod layout;
pub mod module_name;

// Re-exports for convenience
pub use error::{DomainError, ErrorCategory};
pub use layout::{
    MODULE_BASE_DIR, MODULE_FILE_EXT, MODULE_FILE_SUFFIXES, ROOT_MARKERS, module_file_names,
};
pub use module_name::ModuleName;
