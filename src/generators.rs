//! Static site generation for a documentation store.

use anyhow::{Context, Result, bail};
use std::fs;
use std::path::{Path, PathBuf};

use crate::assets::write_assets;
use crate::components::doc_list::DocEntry;
use crate::markdown::extract_title;
use crate::pages;
use crate::store::DocumentStore;

/// Root level slugs whose pages the generator writes itself.
const RESERVED_SLUGS: [&str; 2] = ["index", "404"];

/// Outcome of a site generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteSummary {
    /// Slugs written as document pages, in generation order
    pub documents: Vec<String>,
    /// Path of the generated index page
    pub index_path: PathBuf,
}

impl SiteSummary {
    /// Number of document pages written.
    pub fn document_count(&self) -> usize {
        self.documents.len()
    }
}

/// Generates the complete static site for a document store.
///
/// Writes bundled assets, one `<slug>.html` page per document (nested slugs
/// create directories), `index.html` listing every document, and `404.html`
/// for hosts that serve a fallback page.
///
/// # Arguments
///
/// * `store`: Source of raw markdown documents
/// * `output`: Output directory, created if missing
/// * `site_title`: Site name used in titles, headings and breadcrumbs
///
/// # Returns
///
/// Summary of the generated pages
///
/// # Errors
///
/// Returns error if:
/// - The store holds a root level `index` or `404` document, whose page
///   would collide with the generated listing or fallback page
/// - The store cannot list or read a document
/// - An output directory or file cannot be written
///
/// # Examples
///
/// ```no_run
/// use docfolio::{FsStore, generate_site};
/// use std::path::Path;
///
/// let store = FsStore::new("docs");
/// let summary = generate_site(&store, Path::new("dist"), "Docs")?;
/// println!("{} pages", summary.document_count());
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn generate_site(
    store: &dyn DocumentStore,
    output: &Path,
    site_title: &str,
) -> Result<SiteSummary> {
    let slugs = store.slugs().context("Failed to list documents")?;
    log::info!("Found {} documents", slugs.len());

    if let Some(slug) = slugs.iter().find(|slug| RESERVED_SLUGS.contains(&slug.as_str())) {
        bail!(
            "Document {:?} collides with a generated page, rename {}.md",
            slug,
            slug
        );
    }

    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory: {}", output.display()))?;

    write_assets(&output.join("assets")).context("Failed to write assets")?;

    let mut entries = Vec::with_capacity(slugs.len());
    for slug in &slugs {
        let content = store
            .load(slug)
            .with_context(|| format!("Failed to load document: {}", slug))?;

        let html = pages::doc::page(slug, &content, site_title);

        let path = page_path(output, slug);
        write_page(&path, &html.into_string())?;
        log::debug!("Generated: {}", path.display());

        entries.push(DocEntry {
            slug: slug.clone(),
            title: extract_title(&content).unwrap_or_else(|| slug.clone()),
        });
    }

    let index_path = output.join("index.html");
    write_page(
        &index_path,
        &pages::index::generate(&entries, site_title).into_string(),
    )?;
    log::info!("Generated: {}", index_path.display());

    write_page(
        &output.join("404.html"),
        &pages::not_found::page(None, site_title, "").into_string(),
    )?;

    Ok(SiteSummary {
        documents: slugs,
        index_path,
    })
}

/// Output path of the page for a slug.
pub fn page_path(output: &Path, slug: &str) -> PathBuf {
    let mut path = output.to_path_buf();
    path.extend(slug.split('/'));
    path.as_mut_os_string().push(".html");
    path
}

fn write_page(path: &Path, html: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, html).with_context(|| format!("Failed to write page: {}", path.display()))
}
