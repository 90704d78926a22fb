//! Page layout wrapper component

use maud::{DOCTYPE, Markup, html};

use super::footer::footer;
use crate::assets::{SCRIPT, STYLESHEETS};

/// Wraps page content with standard HTML structure
///
/// Provides consistent DOCTYPE, html, head, and container structure across
/// all page types. Asset links are prefixed with `root` so nested pages
/// reach the shared `assets/` directory.
///
/// # Arguments
///
/// * `title`: Page title text
/// * `site_title`: Site name appended to the title
/// * `root`: Relative prefix from the page to the output root (`""`, `"../"`)
/// * `body`: Page-specific body markup
///
/// # Returns
///
/// Complete HTML document with wrapped content
pub fn page_wrapper(title: &str, site_title: &str, root: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - " (site_title) }
                @for stylesheet in STYLESHEETS {
                    link rel="stylesheet" href=(format!("{}assets/{}", root, stylesheet));
                }
                script src=(format!("{}assets/{}", root, SCRIPT)) defer {}
            }
            body {
                div class="container" {
                    (body)
                }
                (footer())
            }
        }
    }
}
