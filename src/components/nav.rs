//! Navigation breadcrumb component

use maud::{Markup, html};

/// Renders breadcrumb navigation
///
/// Displays the site name as root link followed by the slug components of
/// the current document. Intermediate components are plain text since
/// directories have no page of their own.
///
/// # Arguments
///
/// * `site_title`: Site name for root breadcrumb link
/// * `index_path`: Relative path back to index.html
/// * `slug`: Slug of the current document
///
/// # Returns
///
/// Breadcrumb navigation markup with separators
pub fn breadcrumb(site_title: &str, index_path: &str, slug: &str) -> Markup {
    let components = slug_components(slug);
    let last = components.len().saturating_sub(1);

    html! {
        nav class="breadcrumb" {
            a href=(index_path) class="breadcrumb-link" { (site_title) }
            @for (i, component) in components.iter().enumerate() {
                span class="breadcrumb-separator" { "/" }
                @if i == last {
                    span class="breadcrumb-current" { (*component) }
                } @else {
                    span class="breadcrumb-dir" { (*component) }
                }
            }
        }
    }
}

/// Splits slug on forward slashes, dropping empty components.
pub fn slug_components(slug: &str) -> Vec<&str> {
    slug.split('/').filter(|s| !s.is_empty()).collect()
}
