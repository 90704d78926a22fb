//! Documentation index page generation

use maud::{Markup, html};

use crate::components::doc_list::{DocEntry, doc_list};
use crate::components::layout::page_wrapper;

/// Generates the index page listing every document
///
/// # Arguments
///
/// * `entries`: Documents in display order
/// * `site_title`: Site name shown as heading and title
///
/// # Returns
///
/// Complete HTML markup for index page
pub fn generate(entries: &[DocEntry], site_title: &str) -> Markup {
    let body = html! {
        header class="site-header" {
            h1 { (site_title) }
            p class="doc-count" { (entries.len()) " documents" }
        }
        main {
            (doc_list(entries))
        }
    };

    page_wrapper("Index", site_title, "", body)
}
