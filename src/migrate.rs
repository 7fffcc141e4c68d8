//! One-shot migration of top-level `app/` directories into the `src/` layout.
//!
//! Only the immediate children of the services root are considered. A
//! leftover `src/app/` from an earlier partial run is removed and replaced
//! by the fresh move.

use std::fs;
use std::path::Path;

use anyhow::Context;
use colored::Colorize;

use crate::SERVICES_ROOT;
use crate::error::Result;
use crate::manifest::{self, PatchOutcome};

/// Migrates the hardcoded services root.
pub fn run() -> Result<()> {
    migrate_tree(Path::new(SERVICES_ROOT))
}

/// Visits the immediate subdirectories of `root` and migrates each one.
///
/// A failing service is reported on stderr and does not stop the batch.
pub fn migrate_tree(root: &Path) -> Result<()> {
    let entries = fs::read_dir(root)
        .with_context(|| format!("Failed to read services root {}", root.display()))?;

    for entry in entries {
        let entry =
            entry.with_context(|| format!("Failed to read entry under {}", root.display()))?;
        let service = entry.path();
        if !service.is_dir() {
            continue;
        }
        if let Err(e) = migrate_service(&service) {
            eprintln!(
                "{:>12} {}: {:#}",
                "Failed".red().bold(),
                service.display(),
                e
            );
        }
    }

    println!("{:>12} service migration", "Finished".green().bold());
    Ok(())
}

/// Moves `app/` to `src/app/` and updates the manifest of one service.
pub fn migrate_service(service: &Path) -> Result<()> {
    let app_dir = service.join("app");
    let src_dir = service.join("src");
    let dest_dir = src_dir.join("app");

    if !app_dir.is_dir() {
        println!(
            "{:>12} {} (no app/ directory)",
            "Skipped".yellow().bold(),
            service.display()
        );
        return Ok(());
    }

    log::debug!("Migrating {}", service.display());

    fs::create_dir_all(&src_dir)
        .with_context(|| format!("Failed to create {}", src_dir.display()))?;

    if dest_dir.exists() {
        println!(
            "{:>12} existing {}",
            "Replacing".yellow().bold(),
            dest_dir.display()
        );
        fs::remove_dir_all(&dest_dir)
            .with_context(|| format!("Failed to remove {}", dest_dir.display()))?;
    }

    fs::rename(&app_dir, &dest_dir).with_context(|| {
        format!(
            "Failed to move {} to {}",
            app_dir.display(),
            dest_dir.display()
        )
    })?;
    println!(
        "{:>12} {} to {}",
        "Moved".green().bold(),
        app_dir.display(),
        dest_dir.display()
    );

    let path = manifest::manifest_path(service);
    if !path.is_file() {
        // The move already happened; the manifest has to be fixed by hand.
        println!(
            "{:>12} {} (no pyproject.toml)",
            "Skipped".yellow().bold(),
            service.display()
        );
        log::warn!(
            "{} was moved but {} has no manifest to update",
            app_dir.display(),
            service.display()
        );
        return Ok(());
    }

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
            manifest::store(&path, &doc)?;
            println!("{:>12} {}", "Updated".green().bold(), path.display());
        }
    }

    Ok(())
}
