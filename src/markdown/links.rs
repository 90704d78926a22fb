//! Link resolution between documentation pages.

use anyhow::{Context, Result, bail};
use std::path::{Component, Path, PathBuf};

use crate::path::{calculate_depth, root_prefix};

/// Resolves relative `.md` links to generated documentation pages.
///
/// Transforms links such as `./setup.md` or `../intro.md#install` into
/// paths to the rendered pages (`setup.html`, `../intro.html#install`),
/// relative to the page currently being rendered.
pub struct LinkResolver {
    current_slug: String,
}

impl LinkResolver {
    /// Creates link resolver for the document being rendered.
    ///
    /// # Arguments
    ///
    /// * `current_slug`: Slug of the current document (e.g. `guides/setup`)
    pub fn new(current_slug: impl Into<String>) -> Self {
        Self {
            current_slug: current_slug.into(),
        }
    }

    /// Resolves link to a relative URL within the generated site.
    ///
    /// Handles different link types:
    /// - Absolute URLs (http://, https://, mailto:, //host) remain unchanged
    /// - Anchor links (#section) remain unchanged
    /// - Targets that are not `.md` files remain unchanged
    /// - Relative `.md` paths resolve against the current document directory
    ///
    /// # Arguments
    ///
    /// * `link`: Link href from rendered markdown
    ///
    /// # Returns
    ///
    /// Resolved URL for the static site
    ///
    /// # Errors
    ///
    /// Returns error if the link escapes the documentation root or is not
    /// valid UTF8 after normalization
    pub fn resolve(&self, link: &str) -> Result<String> {
        if is_external(link) || link.starts_with('#') {
            return Ok(link.to_string());
        }

        let (target, fragment) = match link.split_once('#') {
            Some((target, fragment)) => (target, Some(fragment)),
            None => (link, None),
        };

        let Some(target) = target.strip_suffix(".md") else {
            return Ok(link.to_string());
        };

        let current_dir = Path::new(&self.current_slug)
            .parent()
            .unwrap_or_else(|| Path::new(""));

        let normalized = normalize_path(&current_dir.join(target))
            .with_context(|| format!("Failed to resolve link: {}", link))?;
        let slug = normalized.to_str().context("Path contains invalid UTF8")?;

        let depth = calculate_depth(&self.current_slug);
        let mut resolved = format!("{}{}.html", root_prefix(depth), slug);
        if let Some(fragment) = fragment {
            resolved.push('#');
            resolved.push_str(fragment);
        }

        Ok(resolved)
    }
}

fn is_external(link: &str) -> bool {
    link.starts_with("http://")
        || link.starts_with("https://")
        || link.starts_with("mailto:")
        || link.starts_with("//")
}

/// Normalizes path by resolving `..` and `.` components.
///
/// # Errors
///
/// Returns error if path attempts to escape the documentation root
fn normalize_path(path: &Path) -> Result<PathBuf> {
    let mut components = Vec::new();

    for component in path.components() {
        match component {
            Component::Normal(c) => components.push(c),
            Component::ParentDir => {
                if components.pop().is_none() {
                    bail!("Path escapes documentation root: {}", path.display());
                }
            }
            Component::CurDir => {}
            Component::RootDir | Component::Prefix(_) => {
                bail!("Path is absolute, must be relative: {}", path.display());
            }
        }
    }

    if components.is_empty() {
        bail!("Path resolves to documentation root: {}", path.display());
    }

    Ok(components.iter().collect())
}
