//! Implementation of the module-creation command.
//!
//! Responsibility: translate CLI arguments into a validated `ModuleName`,
//! call the core module service, and display results. No business logic
//! lives here.

use tracing::{debug, info, instrument};

use modgen_adapters::LocalFilesystem;
use modgen_core::{application::ModuleService, domain::ModuleName};

use crate::{
    cli::GlobalArgs,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute module creation.
///
/// Dispatch sequence:
/// 1. Validate the module name (domain rules)
/// 2. Construct the service — locates the project root, fatal if absent
/// 3. Early-exit if `--dry-run`
/// 4. Create the module directory and files
/// 5. Print the created paths
#[instrument(skip_all, fields(module = %raw_name))]
pub fn execute(
    raw_name: &str,
    dry_run: bool,
    global: &GlobalArgs,
    output: &OutputManager,
) -> CliResult<()> {
    // 1. Validate name before touching the filesystem.
    let name = ModuleName::new(raw_name).map_err(|e| CliError::Core(e.into()))?;

    // 2. Locate the project root from the working directory.
    let cwd = std::env::current_dir().map_err(|e| CliError::IoError {
        message: "failed to resolve current working directory".into(),
        source: e,
    })?;

    let filesystem = Box::new(LocalFilesystem::new());
    let service = ModuleService::new(filesystem, &cwd)?;

    debug!(
        base = %service.base_path().display(),
        "module base directory resolved"
    );

    // 3. Dry run: describe but do not write.
    if dry_run {
        let plan = service.plan_module(&name);
        output.info(&format!(
            "Dry run: would create module '{}' at {}",
            name,
            plan.path.display(),
        ))?;
        for file in &plan.files {
            output.print(&format!("  {}", file.display()))?;
        }
        return Ok(());
    }

    // 4. Create.
    output.header(&format!("Creating module '{name}'..."))?;
    info!(module = %name, "module creation started");

    let created = service.create_module(&name)?;

    // 5. Success summary.
    output.success(&format!("Module '{name}' created!"))?;

    if !global.quiet {
        output.print("")?;
        output.print(&format!("Created under {}:", created.path.display()))?;
        for file in &created.files {
            let file_name = file
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| file.display().to_string());
            output.print(&format!("  {file_name}"))?;
        }
    }

    Ok(())
}
