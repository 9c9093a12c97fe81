//! Application services.

mod module_service;
mod root_locator;

pub use module_service::{CreatedModule, ModuleService};
pub use root_locator::find_project_root;
