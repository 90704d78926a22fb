//! Static asset bundling

use anyhow::{Context, Result};
use std::{fs, path::Path};

const BASE: &str = include_str!("../assets/base.css");
const DOCS: &str = include_str!("../assets/docs.css");
const MARKDOWN: &str = include_str!("../assets/markdown.css");
const COPY_SCRIPT: &str = include_str!("../assets/copy.js");

/// Stylesheets every page links, relative to the assets directory.
pub const STYLESHEETS: &[&str] = &["docs.css", "markdown.css"];

/// Client script binding the copy buttons.
pub const SCRIPT: &str = "copy.js";

/// Writes all bundled CSS and script assets to output directory
///
/// # Errors
///
/// Returns error if the directory cannot be created or a file cannot be written
pub fn write_assets(assets_dir: &Path) -> Result<()> {
    fs::create_dir_all(assets_dir).with_context(|| {
        format!(
            "Failed to create assets directory: {}",
            assets_dir.display()
        )
    })?;

    write_bundled(assets_dir, "docs.css", &[BASE, DOCS])?;
    write_bundled(assets_dir, "markdown.css", &[MARKDOWN])?;
    write_bundled(assets_dir, SCRIPT, &[COPY_SCRIPT])?;
    Ok(())
}

fn write_bundled(dir: &Path, name: &str, parts: &[&str]) -> Result<()> {
    let content = parts.join("\n");
    fs::write(dir.join(name), content)
        .with_context(|| format!("Failed to write asset: {}", name))?;
    Ok(())
}
