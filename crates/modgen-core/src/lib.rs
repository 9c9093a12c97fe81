//! Modgen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Modgen
//! module scaffolding tool, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           modgen-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │      (ModuleService, RootLocator)       │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │           (Driven: Filesystem)          │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     modgen-adapters (Infrastructure)    │
//! │   (LocalFilesystem, MemoryFilesystem)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Domain Layer (Pure Logic)         │
//! │    (ModuleName, layout conventions)     │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use modgen_core::{application::ModuleService, domain::ModuleName};
//!
//! // 1. Validate the requested name
//! let name = ModuleName::new("billing").unwrap();
//!
//! // 2. Use the application service (with an injected filesystem adapter)
//! let service = ModuleService::new(filesystem, &std::env::current_dir()?)?;
//! service.create_module(&name)?;
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{CreatedModule, ModuleService, ports::Filesystem};
    pub use crate::domain::{
        MODULE_BASE_DIR, MODULE_FILE_SUFFIXES, ModuleName, ROOT_MARKERS, module_file_names,
    };
    pub use crate::error::{ModgenError, ModgenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
