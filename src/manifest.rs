//! Shared `pyproject.toml` handling.
//!
//! Both tools funnel through [`ensure_packages_declaration`] so the patch
//! semantics cannot drift between them. The document is edited with
//! `toml_edit`, which keeps unrelated keys, comments, and formatting intact
//! across a rewrite.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use toml_edit::{Array, DocumentMut, InlineTable, Item, Value};

use crate::error::Result;

/// Manifest file name expected at the root of every service directory.
pub const MANIFEST_FILE: &str = "pyproject.toml";

/// Result of applying the packaging patch to a parsed manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOutcome {
    /// The declaration was inserted; the document needs to be written back.
    Added,
    /// `packages` is already declared; the document is untouched.
    AlreadyDeclared,
    /// There is no `[tool.poetry]` section; the document is untouched.
    MissingPoetry,
}

/// Path to the manifest inside a service directory.
pub fn manifest_path(service: &Path) -> PathBuf {
    service.join(MANIFEST_FILE)
}

/// Reads and parses a service manifest.
pub fn load(path: &Path) -> Result<DocumentMut> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let doc = content.parse::<DocumentMut>()?;
    Ok(doc)
}

/// Writes a patched manifest back to disk.
pub fn store(path: &Path, doc: &DocumentMut) -> Result<()> {
    fs::write(path, doc.to_string())
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Declares `packages = [{ include = "app", from = "src" }]` under
/// `[tool.poetry]` unless a `packages` entry is already present.
///
/// An existing declaration is never modified, whatever its value. An empty
/// `[tool.poetry]` table counts as present and receives the declaration.
pub fn ensure_packages_declaration(doc: &mut DocumentMut) -> PatchOutcome {
    let Some(poetry) = doc
        .get_mut("tool")
        .and_then(|t| t.get_mut("poetry"))
        .and_then(|p| p.as_table_like_mut())
    else {
        return PatchOutcome::MissingPoetry;
    };

    if poetry.get("packages").is_some() {
        return PatchOutcome::AlreadyDeclared;
    }

    let mut entry = InlineTable::new();
    entry.insert("include", Value::from("app"));
    entry.insert("from", Value::from("src"));

    let mut packages = Array::new();
    packages.push(entry);

    poetry.insert("packages", Item::Value(Value::Array(packages)));
    PatchOutcome::Added
}
