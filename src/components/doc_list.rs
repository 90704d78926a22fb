//! Document listing components

use maud::{Markup, html};

/// Document shown on the index page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocEntry {
    pub slug: String,
    pub title: String,
}

impl DocEntry {
    /// Relative link to the generated page from the output root.
    pub fn href(&self) -> String {
        format!("{}.html", self.slug)
    }
}

/// Renders the list of documents
///
/// Each row links the document title to its page and shows the slug.
/// An empty list renders an empty state message instead.
pub fn doc_list(entries: &[DocEntry]) -> Markup {
    html! {
        @if entries.is_empty() {
            p class="empty-state" { "No documents found" }
        } @else {
            ul class="doc-list" {
                @for entry in entries {
                    li {
                        a href=(entry.href()) { (entry.title) }
                        span class="doc-slug" { (entry.slug) }
                    }
                }
            }
        }
    }
}
