//! Naming conventions for project roots and module scaffolds.
//!
//! Everything in this file is fixed at build time. The marker set identifies
//! a project root during the upward search; the suffix list defines the six
//! files every module scaffold contains.

use crate::domain::ModuleName;

/// Filenames whose presence marks a directory as the project root.
///
/// Checked in order; the first directory containing any of them wins.
pub const ROOT_MARKERS: [&str; 2] = ["package.json", "tsconfig.json"];

/// Where modules live, relative to the project root.
pub const MODULE_BASE_DIR: &str = "src/modules";

/// Suffixes of the files created inside a new module, in creation order.
pub const MODULE_FILE_SUFFIXES: [&str; 6] = [
    "interface",
    "model",
    "routes",
    "service",
    "controller",
    "utils",
];

/// Source file extension for generated files.
pub const MODULE_FILE_EXT: &str = "ts";

/// The six conventional filenames for a module, in creation order.
///
/// `billing` yields `billing.interface.ts`, `billing.model.ts`, and so on.
pub fn module_file_names(name: &ModuleName) -> Vec<String> {
    MODULE_FILE_SUFFIXES
        .iter()
        .map(|suffix| format!("{}.{suffix}.{MODULE_FILE_EXT}", name.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_files_in_fixed_order() {
        let name = ModuleName::new("billing").unwrap();
        let files = module_file_names(&name);
        assert_eq!(
            files,
            vec![
                "billing.interface.ts",
                "billing.model.ts",
                "billing.routes.ts",
                "billing.service.ts",
                "billing.controller.ts",
                "billing.utils.ts",
            ]
        );
    }

    #[test]
    fn file_names_use_name_verbatim() {
        let name = ModuleName::new("apiKeys").unwrap();
        let files = module_file_names(&name);
        assert!(files.iter().all(|f| f.starts_with("apiKeys.")));
        assert!(files.iter().all(|f| f.ends_with(".ts")));
    }

    #[test]
    fn markers_are_the_two_project_descriptors() {
        assert_eq!(ROOT_MARKERS, ["package.json", "tsconfig.json"]);
    }
}
