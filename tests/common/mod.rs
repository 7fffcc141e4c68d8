//! Shared helpers for the integration tests.
//!
//! Each test builds a throwaway `services/` tree inside a temp directory and
//! runs the binaries with the working directory set to the tree's parent,
//! the same way the tools are invoked for real.

use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Creates a temp directory containing an empty `services/` root.
pub fn services_tree() -> (TempDir, PathBuf) {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("services");
    fs::create_dir(&root).unwrap();
    (temp, root)
}

/// Adds a service directory under the root.
#[allow(unused)]
pub fn add_service(root: &Path, name: &str) -> PathBuf {
    let dir = root.join(name);
    fs::create_dir_all(&dir).unwrap();
    dir
}

/// Writes the service's pyproject.toml.
#[allow(unused)]
pub fn write_manifest(service: &Path, content: &str) {
    fs::write(service.join("pyproject.toml"), content).unwrap();
}

/// Reads the service's pyproject.toml.
#[allow(unused)]
pub fn read_manifest(service: &Path) -> String {
    fs::read_to_string(service.join("pyproject.toml")).unwrap()
}

/// Asserts that the manifest declares exactly `[{ include = "app", from = "src" }]`.
#[allow(unused)]
pub fn assert_packages_declared(service: &Path) {
    let doc: toml_edit::DocumentMut = read_manifest(service).parse().unwrap();
    let packages = doc["tool"]["poetry"]["packages"].as_array().unwrap();
    assert_eq!(packages.len(), 1);
    let entry = packages.get(0).unwrap().as_inline_table().unwrap();
    assert_eq!(entry.get("include").and_then(|v| v.as_str()), Some("app"));
    assert_eq!(entry.get("from").and_then(|v| v.as_str()), Some("src"));
}

/// Runs `fix-poetry-packages` with `cwd` as the working directory.
#[allow(unused)]
pub fn run_fix(cwd: &Path) -> assert_cmd::assert::Assert {
    let mut cmd = cargo_bin_cmd!("fix-poetry-packages");
    cmd.current_dir(cwd);
    cmd.assert()
}

/// Runs `migrate-app-to-src` with `cwd` as the working directory.
#[allow(unused)]
pub fn run_migrate(cwd: &Path) -> assert_cmd::assert::Assert {
    let mut cmd = cargo_bin_cmd!("migrate-app-to-src");
    cmd.current_dir(cwd);
    cmd.assert()
}
