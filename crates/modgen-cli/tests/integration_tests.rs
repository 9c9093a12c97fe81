//! Integration tests for modgen-cli.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const MODULE_FILES: [&str; 6] = [
    "billing.interface.ts",
    "billing.model.ts",
    "billing.routes.ts",
    "billing.service.ts",
    "billing.controller.ts",
    "billing.utils.ts",
];

fn modgen() -> Command {
    let mut cmd = Command::cargo_bin("modgen").unwrap();
    cmd.env("NO_COLOR", "1");
    cmd
}

/// A project directory with `package.json` at the root and a nested
/// working directory three levels deep, no markers in between.
fn project_with_nested_cwd() -> (TempDir, std::path::PathBuf) {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("package.json"), "{}").unwrap();
    let nested = temp.path().join("src").join("routes").join("v1");
    fs::create_dir_all(&nested).unwrap();
    (temp, nested)
}

fn assert_module_files(module_dir: &Path) {
    for file in MODULE_FILES {
        let path = module_dir.join(file);
        let metadata = fs::metadata(&path)
            .unwrap_or_else(|_| panic!("missing file: {}", path.display()));
        assert!(metadata.is_file());
        assert_eq!(metadata.len(), 0, "{} should be empty", path.display());
    }
}

#[test]
fn help_mentions_module_flag() {
    modgen()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--module"))
        .stdout(predicate::str::contains("--dry-run"));
}

#[test]
fn version_flag() {
    modgen()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn creates_module_at_project_root_from_nested_cwd() {
    let (temp, nested) = project_with_nested_cwd();

    modgen()
        .current_dir(&nested)
        .args(["--module", "billing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Module 'billing' created!"));

    // Created at the project root, not the nested working directory.
    let module_dir = temp.path().join("src").join("modules").join("billing");
    assert!(module_dir.is_dir());
    assert!(!nested.join("src").exists());
    assert_module_files(&module_dir);
}

#[test]
fn tsconfig_marker_is_sufficient() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("tsconfig.json"), "{}").unwrap();

    modgen()
        .current_dir(temp.path())
        .args(["--module", "billing"])
        .assert()
        .success();

    assert_module_files(&temp.path().join("src/modules/billing"));
}

#[test]
fn second_run_fails_and_leaves_module_intact() {
    let (temp, nested) = project_with_nested_cwd();

    modgen()
        .current_dir(&nested)
        .args(["--module", "billing"])
        .assert()
        .success();

    modgen()
        .current_dir(&nested)
        .args(["--module", "billing"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("already exists"));

    assert_module_files(&temp.path().join("src/modules/billing"));
}

#[test]
fn dry_run_creates_nothing() {
    let (temp, nested) = project_with_nested_cwd();

    modgen()
        .current_dir(&nested)
        .args(["--module", "billing", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"))
        .stdout(predicate::str::contains("billing.interface.ts"));

    assert!(!temp.path().join("src/modules").exists());
}

#[test]
fn quiet_suppresses_stdout() {
    let (_temp, nested) = project_with_nested_cwd();

    modgen()
        .current_dir(&nested)
        .args(["-q", "--module", "billing"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn verbose_logs_created_paths_to_stderr() {
    let (_temp, nested) = project_with_nested_cwd();

    modgen()
        .current_dir(&nested)
        .args(["-v", "--module", "billing"])
        .assert()
        .success()
        .stderr(predicate::str::contains("INFO"))
        .stderr(predicate::str::contains("created file"));
}
