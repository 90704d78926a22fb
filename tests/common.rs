//! Shared test utilities for integration tests.
//!
//! Provides helpers for creating temporary documentation directories.

use anyhow::Result;
use std::path::Path;
use tempfile::TempDir;

/// Writes file below root, creating parent directories as needed.
///
/// # Errors
///
/// Returns error if directory creation or file write fails
pub fn write_file(root: &Path, path: &str, content: &str) -> Result<()> {
    let file_path = root.join(path);
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file_path, content)?;
    Ok(())
}

/// Creates temporary documentation directory with a small nested tree.
///
/// Layout:
/// - `intro.md` with a title, list and link to the setup guide
/// - `guides/setup.md` with a fenced code block and a link back
/// - `notes.txt` which is not a document
///
/// # Errors
///
/// Returns error if the directory or files cannot be created
pub fn create_docs_dir() -> Result<TempDir> {
    let dir = TempDir::new()?;
    let root = dir.path();

    write_file(
        root,
        "intro.md",
        "# Introduction\n\nWelcome to the **docs**.\n\n- fast\n- small\n\nNext: [setup](guides/setup.md)\n",
    )?;
    write_file(
        root,
        "guides/setup.md",
        "# Setup\n\n```sh\ncargo install docfolio\n```\n\nBack to [intro](../intro.md).\n",
    )?;
    write_file(root, "notes.txt", "not markdown")?;

    Ok(dir)
}
