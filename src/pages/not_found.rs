//! Not found page generation

use maud::{Markup, html};

use crate::components::layout::page_wrapper;

/// Generates the page shown for a slug with no document
///
/// # Arguments
///
/// * `slug`: Requested slug, or `None` for the generic 404 page
/// * `site_title`: Site name for the title and home link
/// * `root`: Relative prefix from the page to the output root
pub fn page(slug: Option<&str>, site_title: &str, root: &str) -> Markup {
    let body = html! {
        div class="not-found" {
            h1 { "Document not found" }
            @if let Some(slug) = slug {
                p { "No document exists for " code { (slug) } "." }
            }
            p { a href=(format!("{}index.html", root)) { "Back to " (site_title) } }
        }
    };

    page_wrapper("Not found", site_title, root, body)
}
