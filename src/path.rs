//! Path utilities for HTML generation

/// Calculates relative path depth for a document page.
///
/// Pages are written to `<slug>.html` under the output root, so a slug with
/// `n` separators lives `n` directories below the root
/// (e.g., "guides/setup" is one level deep).
///
/// # Arguments
///
/// * `slug`: Document slug with `/` separators
///
/// # Returns
///
/// Number of directory levels needed to traverse back to root
pub fn calculate_depth(slug: &str) -> usize {
    slug.matches('/').count()
}

/// Returns the `../` prefix that leads from a page at `depth` to the root.
///
/// Empty for pages at the root so generated links stay plain relative paths.
pub fn root_prefix(depth: usize) -> String {
    "../".repeat(depth)
}
