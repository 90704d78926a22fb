//! Static documentation site generator with a lightweight markdown renderer.

mod assets;
pub mod components;
mod config;
mod decorate;
mod generators;
mod markdown;
pub mod pages;
mod path;
mod store;

pub use assets::write_assets;
pub use config::Config;
pub use decorate::{COPY_MARKER, decorate_code_blocks};
pub use generators::{SiteSummary, generate_site, page_path};
pub use markdown::{
    BlockParser, BlockState, LineKind, LinkResolver, MarkdownRenderer, classify, escape_html,
    extract_title, format_inline, render_markdown,
};
pub use store::{DocumentStore, FsStore, MemoryStore, StoreError, validate_slug};
