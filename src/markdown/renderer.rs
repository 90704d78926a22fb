//! Line oriented markdown to HTML rendering.

use anyhow::{Context, Result};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

use super::LinkResolver;
use super::inline::{escape_html, format_inline};

static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,6})\s+(.*\S.*)$").expect("valid heading pattern"));

static LIST_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[-*]\s+(.*\S.*)$").expect("valid list item pattern"));

const FENCE: &str = "```";

/// Block level classification of a single source line.
///
/// Only meaningful outside a code block; inside one every line except a
/// fence is buffered verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Triple backtick delimiter with its trimmed trailing text
    Fence(&'a str),
    /// ATX heading with level 1 to 6
    Heading { level: usize, text: &'a str },
    /// `-` or `*` bullet item
    ListItem(&'a str),
    /// Empty or whitespace only
    Blank,
    /// Anything else, rendered as a paragraph
    Text(&'a str),
}

/// Classifies a line by the first matching block rule.
///
/// Priority order: fence, heading, list item, blank, paragraph.
pub fn classify(line: &str) -> LineKind<'_> {
    let trimmed = line.trim();

    if let Some(rest) = trimmed.strip_prefix(FENCE) {
        return LineKind::Fence(rest.trim());
    }

    if let Some(caps) = HEADING_RE.captures(line)
        && let (Some(marks), Some(text)) = (caps.get(1), caps.get(2))
    {
        return LineKind::Heading {
            level: marks.as_str().len(),
            text: text.as_str().trim(),
        };
    }

    if let Some(item) = LIST_ITEM_RE.captures(line).and_then(|caps| caps.get(1)) {
        return LineKind::ListItem(item.as_str().trim());
    }

    if trimmed.is_empty() {
        return LineKind::Blank;
    }

    LineKind::Text(trimmed)
}

/// Parser state between lines.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BlockState {
    /// Between blocks
    #[default]
    Normal,
    /// A `<ul>` is open and awaits more items
    InList,
    /// Inside a fenced block, collecting escaped lines
    InCode { language: String, lines: Vec<String> },
}

/// Single pass block parser.
///
/// Feed lines in order with [`BlockParser::push_line`], then call
/// [`BlockParser::finish`] to close whatever is still open. Every list and
/// code block opened is closed in the output.
#[derive(Debug, Default)]
pub struct BlockParser {
    state: BlockState,
    html: String,
}

impl BlockParser {
    /// Creates parser in the normal state with empty output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current block state.
    pub fn state(&self) -> &BlockState {
        &self.state
    }

    /// Consumes one source line.
    pub fn push_line(&mut self, line: &str) {
        if matches!(self.state, BlockState::InCode { .. }) {
            if line.trim_start().starts_with(FENCE) {
                self.flush_code();
            } else if let BlockState::InCode { lines, .. } = &mut self.state {
                lines.push(escape_html(line));
            }
            return;
        }

        match classify(line) {
            LineKind::Fence(language) => {
                self.flush_list();
                self.state = BlockState::InCode {
                    language: language.to_string(),
                    lines: Vec::new(),
                };
            }
            LineKind::Heading { level, text } => {
                self.flush_list();
                self.html.push_str(&format!(
                    "<h{level}>{}</h{level}>\n",
                    format_inline(text)
                ));
            }
            LineKind::ListItem(text) => {
                if self.state != BlockState::InList {
                    self.html.push_str("<ul>\n");
                    self.state = BlockState::InList;
                }
                self.html
                    .push_str(&format!("<li>{}</li>\n", format_inline(text)));
            }
            LineKind::Blank => self.flush_list(),
            LineKind::Text(text) => {
                self.flush_list();
                self.html
                    .push_str(&format!("<p>{}</p>\n", format_inline(text)));
            }
        }
    }

    /// Closes any open list or code block and returns the HTML.
    ///
    /// An unterminated fence is treated as closed at end of input.
    pub fn finish(mut self) -> String {
        self.flush_list();
        self.flush_code();
        self.html
    }

    fn flush_list(&mut self) {
        if self.state == BlockState::InList {
            self.html.push_str("</ul>\n");
            self.state = BlockState::Normal;
        }
    }

    fn flush_code(&mut self) {
        if !matches!(self.state, BlockState::InCode { .. }) {
            return;
        }
        let BlockState::InCode { language, lines } = std::mem::take(&mut self.state) else {
            return;
        };

        // Only the first word names the language; the rest is fence metadata
        match language.split_whitespace().next() {
            Some(name) => self.html.push_str(&format!(
                "<pre><code class=\"language-{}\">",
                escape_html(name).replace('"', "&quot;")
            )),
            None => self.html.push_str("<pre><code>"),
        }
        self.html.push_str(&lines.join("\n"));
        self.html.push_str("</code></pre>\n");
    }
}

/// Renders markdown text to HTML.
///
/// Total over all inputs: malformed or unterminated constructs degrade to
/// literal text or a best effort element. `\r\n` and bare `\r` line endings
/// are treated as `\n`.
///
/// # Examples
///
/// ```
/// use docfolio::render_markdown;
///
/// assert_eq!(render_markdown("# Title"), "<h1>Title</h1>\n");
/// assert_eq!(render_markdown(""), "");
/// ```
pub fn render_markdown(content: &str) -> String {
    if content.is_empty() {
        return String::new();
    }

    let normalized = content.replace("\r\n", "\n").replace('\r', "\n");
    let mut parser = BlockParser::new();
    for line in normalized.split('\n') {
        parser.push_line(line);
    }
    parser.finish()
}

/// Returns the text of the first level one heading outside code blocks.
pub fn extract_title(content: &str) -> Option<String> {
    let normalized = content.replace("\r\n", "\n").replace('\r', "\n");
    let mut in_code = false;

    for line in normalized.split('\n') {
        match classify(line) {
            LineKind::Fence(_) => in_code = !in_code,
            LineKind::Heading { level: 1, text } if !in_code => {
                return Some(text.to_string());
            }
            _ => {}
        }
    }

    None
}

/// Renders documentation markdown with optional link resolution.
///
/// Wraps [`render_markdown`] and, when configured with a
/// [`LinkResolver`], rewrites relative links between documents to their
/// generated pages.
#[derive(Default)]
pub struct MarkdownRenderer {
    link_resolver: Option<LinkResolver>,
}

impl MarkdownRenderer {
    /// Creates renderer without link resolution.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates renderer resolving `.md` links relative to a document slug.
    ///
    /// # Arguments
    ///
    /// * `current_slug`: Slug of the document being rendered
    pub fn with_link_resolver(current_slug: impl Into<String>) -> Self {
        Self {
            link_resolver: Some(LinkResolver::new(current_slug)),
        }
    }

    /// Renders markdown content to HTML string.
    pub fn render(&self, content: &str) -> String {
        let html = render_markdown(content);

        match &self.link_resolver {
            Some(resolver) => Self::rewrite_links(&html, resolver),
            None => html,
        }
    }

    /// Renders markdown file at given path.
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be read
    pub fn render_file(&self, path: impl AsRef<Path>) -> Result<String> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read markdown file: {}", path.display()))?;
        Ok(self.render(&content))
    }

    /// Rewrites `href` attribute values through the resolver.
    ///
    /// Links the resolver cannot handle keep their original target.
    fn rewrite_links(html: &str, resolver: &LinkResolver) -> String {
        const ATTR: &str = "<a href=\"";

        let mut result = String::with_capacity(html.len());
        let mut pos = 0;

        while let Some(offset) = html[pos..].find(ATTR) {
            let value_start = pos + offset + ATTR.len();
            let Some(value_len) = html[value_start..].find('"') else {
                break;
            };
            let value_end = value_start + value_len;
            let url = &html[value_start..value_end];

            result.push_str(&html[pos..value_start]);
            match resolver.resolve(url) {
                Ok(resolved) => result.push_str(&resolved),
                Err(e) => {
                    log::debug!("Keeping unresolved link {}: {:#}", url, e);
                    result.push_str(url);
                }
            }
            pos = value_end;
        }

        result.push_str(&html[pos..]);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_priority() {
        assert_eq!(classify("```rust"), LineKind::Fence("rust"));
        assert_eq!(classify("```"), LineKind::Fence(""));
        assert_eq!(
            classify("## Usage"),
            LineKind::Heading {
                level: 2,
                text: "Usage"
            }
        );
        assert_eq!(classify("  - item"), LineKind::ListItem("item"));
        assert_eq!(classify("* item"), LineKind::ListItem("item"));
        assert_eq!(classify(" \t "), LineKind::Blank);
        assert_eq!(classify("plain"), LineKind::Text("plain"));
    }

    #[test]
    fn test_classify_malformed_markers_are_text() {
        assert_eq!(classify("#NoSpace"), LineKind::Text("#NoSpace"));
        assert_eq!(classify("####### seven"), LineKind::Text("####### seven"));
        assert_eq!(classify("# "), LineKind::Text("#"));
        assert_eq!(classify("-nospace"), LineKind::Text("-nospace"));
        assert_eq!(classify("**bold** start"), LineKind::Text("**bold** start"));
    }

    #[test]
    fn test_parser_list_transitions() {
        // Arrange
        let mut parser = BlockParser::new();

        // Act & Assert
        parser.push_line("- one");
        assert_eq!(parser.state(), &BlockState::InList);
        parser.push_line("- two");
        assert_eq!(parser.state(), &BlockState::InList);
        parser.push_line("");
        assert_eq!(parser.state(), &BlockState::Normal);
    }

    #[test]
    fn test_parser_fence_closes_list() {
        // Arrange
        let mut parser = BlockParser::new();
        parser.push_line("- one");

        // Act
        parser.push_line("```sh");

        // Assert
        assert_eq!(
            parser.state(),
            &BlockState::InCode {
                language: "sh".to_string(),
                lines: vec![]
            }
        );
        assert_eq!(
            parser.finish(),
            "<ul>\n<li>one</li>\n</ul>\n<pre><code class=\"language-sh\"></code></pre>\n"
        );
    }

    #[test]
    fn test_render_empty_input() {
        assert_eq!(render_markdown(""), "");
    }

    #[test]
    fn test_render_heading_levels() {
        assert_eq!(render_markdown("# Title"), "<h1>Title</h1>\n");
        assert_eq!(render_markdown("###### Deep"), "<h6>Deep</h6>\n");
    }

    #[test]
    fn test_render_fenced_block_with_language() {
        // Arrange
        let markdown = "```js\nconst x = 1;\n```";

        // Act
        let html = render_markdown(markdown);

        // Assert
        assert_eq!(
            html,
            "<pre><code class=\"language-js\">const x = 1;</code></pre>\n"
        );
    }

    #[test]
    fn test_render_code_block_no_inline_formatting() {
        // Arrange
        let markdown = "```\n**not bold** <b> & [x](y)\n\n_keep_\n```";

        // Act
        let html = render_markdown(markdown);

        // Assert
        assert_eq!(
            html,
            "<pre><code>**not bold** &lt;b&gt; &amp; [x](y)\n\n_keep_</code></pre>\n"
        );
    }

    #[test]
    fn test_render_unterminated_fence_closed() {
        // Act
        let html = render_markdown("```py\nprint(1)");

        // Assert
        assert_eq!(html, "<pre><code class=\"language-py\">print(1)</code></pre>\n");
    }

    #[test]
    fn test_render_list_grouping() {
        // Arrange
        let markdown = "- a\n- b\n- c\nafter";

        // Act
        let html = render_markdown(markdown);

        // Assert
        assert_eq!(
            html,
            "<ul>\n<li>a</li>\n<li>b</li>\n<li>c</li>\n</ul>\n<p>after</p>\n"
        );
    }

    #[test]
    fn test_render_list_closed_at_end_of_input() {
        assert_eq!(render_markdown("* x"), "<ul>\n<li>x</li>\n</ul>\n");
    }

    #[test]
    fn test_render_blank_lines_emit_nothing() {
        assert_eq!(
            render_markdown("one\n\n\n two "),
            "<p>one</p>\n<p>two</p>\n"
        );
    }

    #[test]
    fn test_render_normalizes_line_endings() {
        assert_eq!(
            render_markdown("# A\r\n- b\rc"),
            "<h1>A</h1>\n<ul>\n<li>b</li>\n</ul>\n<p>c</p>\n"
        );
    }

    #[test]
    fn test_render_paragraph_escaped_once() {
        assert_eq!(
            render_markdown("a & b < c > d"),
            "<p>a &amp; b &lt; c &gt; d</p>\n"
        );
    }

    #[test]
    fn test_render_heading_with_inline() {
        assert_eq!(
            render_markdown("## The `render` **API**"),
            "<h2>The <code>render</code> <strong>API</strong></h2>\n"
        );
    }

    #[test]
    fn test_classify_fence_keeps_trailing_text() {
        assert_eq!(classify("```js title=x"), LineKind::Fence("js title=x"));
        assert_eq!(classify("  ```   "), LineKind::Fence(""));
    }

    #[test]
    fn test_render_fence_info_string_single_class() {
        assert_eq!(
            render_markdown("```js title=x
let a;
```"),
            "<pre><code class=\"language-js\">let a;</code></pre>\n"
        );
    }

    #[test]
    fn test_render_language_attribute_quoted() {
        assert_eq!(
            render_markdown("```a\"b\n```"),
            "<pre><code class=\"language-a&quot;b\"></code></pre>\n"
        );
    }

    #[test]
    fn test_extract_title_first_h1() {
        assert_eq!(
            extract_title("intro\n## Sub\n# Main\n# Second"),
            Some("Main".to_string())
        );
        assert_eq!(extract_title("```\n# not a title\n```\ntext"), None);
        assert_eq!(extract_title(""), None);
    }

    #[test]
    fn test_renderer_resolves_doc_links() {
        // Arrange
        let renderer = MarkdownRenderer::with_link_resolver("guides/setup");

        // Act
        let html = renderer.render("[intro](../intro.md) and [web](https://x.dev)");

        // Assert
        assert!(html.contains("href=\"../intro.html\""), "Doc link not resolved: {}", html);
        assert!(html.contains("href=\"https://x.dev\""), "External link changed: {}", html);
    }

    #[test]
    fn test_renderer_without_resolver_matches_pure_render() {
        let markdown = "[a](b.md)\n- x";
        assert_eq!(MarkdownRenderer::new().render(markdown), render_markdown(markdown));
    }

    #[test]
    fn test_render_file_missing() {
        let result = MarkdownRenderer::new().render_file("/nonexistent/doc.md");
        assert!(result.is_err(), "Missing file should error");
    }
}
