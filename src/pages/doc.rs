//! Document page generation

use anyhow::{Context, Result};
use maud::{Markup, PreEscaped, html};

use crate::components::layout::page_wrapper;
use crate::components::nav::breadcrumb;
use crate::decorate::decorate_code_blocks;
use crate::markdown::{MarkdownRenderer, extract_title};
use crate::pages::not_found;
use crate::path::{calculate_depth, root_prefix};
use crate::store::{DocumentStore, StoreError};

/// Renders the HTML fragment for one document
///
/// Loads markdown from the store, renders it with links between documents
/// resolved relative to `slug`, and decorates code blocks with copy buttons.
///
/// # Errors
///
/// Returns the store error unchanged (including the not found signal)
pub fn render_fragment(store: &dyn DocumentStore, slug: &str) -> Result<String, StoreError> {
    let content = store.load(slug)?;
    Ok(render_content(slug, &content))
}

fn render_content(slug: &str, content: &str) -> String {
    let html = MarkdownRenderer::with_link_resolver(slug).render(content);
    decorate_code_blocks(&html)
}

/// Generates HTML document page
///
/// A slug with no document produces the not found page rather than an
/// error, so callers can always write the result.
///
/// # Arguments
///
/// * `store`: Source of raw markdown
/// * `slug`: Document slug to render
/// * `site_title`: Site name for title and breadcrumb
///
/// # Returns
///
/// HTML markup ready for writing to disk
///
/// # Errors
///
/// Returns error if the slug is invalid or the store fails to read it
///
/// # Examples
///
/// ```
/// use docfolio::MemoryStore;
/// use docfolio::pages::doc::generate;
///
/// let store = MemoryStore::new().with_document("intro", "# Hello");
/// let html = generate(&store, "intro", "Docs")?.into_string();
/// assert!(html.contains("<h1>Hello</h1>"));
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn generate(store: &dyn DocumentStore, slug: &str, site_title: &str) -> Result<Markup> {
    let root = root_prefix(calculate_depth(slug));

    let content = match store.load(slug) {
        Ok(content) => content,
        Err(e) if e.is_not_found() => {
            log::warn!("{}", e);
            return Ok(not_found::page(Some(slug), site_title, &root));
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to load document: {}", slug));
        }
    };

    Ok(page(slug, &content, site_title))
}

/// Builds the document page from already loaded markdown
///
/// # Arguments
///
/// * `slug`: Document slug, used for links, breadcrumb and title fallback
/// * `content`: Raw markdown of the document
/// * `site_title`: Site name for title and breadcrumb
pub fn page(slug: &str, content: &str, site_title: &str) -> Markup {
    let root = root_prefix(calculate_depth(slug));
    let title = extract_title(content).unwrap_or_else(|| slug.to_string());
    let decorated = render_content(slug, content);

    let body = html! {
        (breadcrumb(site_title, &format!("{}index.html", root), slug))
        article class="markdown-body" {
            (PreEscaped(decorated))
        }
    };

    page_wrapper(&title, site_title, &root, body)
}
