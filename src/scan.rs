//! Recursive scanner that backfills `packages` declarations.
//!
//! Walks every directory under the services root and patches each manifest
//! whose service already follows the `src/app` convention. Re-running the
//! scan is a no-op: manifests that are already correct are reported and left
//! untouched.

use std::path::Path;

use colored::Colorize;
use walkdir::WalkDir;

use crate::SERVICES_ROOT;
use crate::error::Result;
use crate::manifest::{self, PatchOutcome};

/// Scans the hardcoded services root.
pub fn run() -> Result<()> {
    scan_tree(Path::new(SERVICES_ROOT))
}

/// Visits every directory under `root` that contains a manifest.
///
/// A failing directory is reported on stderr and does not stop the scan.
pub fn scan_tree(root: &Path) -> Result<()> {
    log::debug!("Scanning {}", root.display());

    for entry in WalkDir::new(root).into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_dir() {
            continue;
        }
        let dir = entry.path();
        if !manifest::manifest_path(dir).is_file() {
            continue;
        }
        if let Err(e) = patch_service(dir) {
            eprintln!("{:>12} {}: {:#}", "Failed".red().bold(), dir.display(), e);
        }
    }

    println!("{:>12} package scan", "Finished".green().bold());
    Ok(())
}

fn patch_service(dir: &Path) -> Result<()> {
    let path = manifest::manifest_path(dir);
    let mut doc = manifest::load(&path)?;

    match manifest::ensure_packages_declaration(&mut doc) {
        PatchOutcome::MissingPoetry => {
            println!(
                "{:>12} {} (no [tool.poetry] section)",
                "Skipped".yellow().bold(),
                path.display()
            );
        }
        PatchOutcome::AlreadyDeclared => {
            println!(
                "{:>12} {} (packages already declared)",
                "Skipped".yellow().bold(),
                path.display()
            );
        }
        PatchOutcome::Added => {
            if !dir.join("src").join("app").is_dir() {
                // Convention not met: drop the in-memory edit, leave the file alone.
                println!(
                    "{:>12} {} (no src/app directory)",
                    "Skipped".yellow().bold(),
                    dir.display()
                );
                return Ok(());
            }
            manifest::store(&path, &doc)?;
            println!("{:>12} {}", "Patched".green().bold(), path.display());
        }
    }

    Ok(())
}
