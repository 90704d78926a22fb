//! Lightweight markdown rendering for documentation pages.
//!
//! This module provides a single pass, line oriented renderer covering
//! headings, fenced code blocks, unordered lists, paragraphs and a fixed set
//! of inline constructs, plus link resolution between documents.

mod inline;
mod links;
mod renderer;

pub use inline::{escape_html, format_inline};
pub use links::LinkResolver;
pub use renderer::{
    BlockParser, BlockState, LineKind, MarkdownRenderer, classify, extract_title, render_markdown,
};
