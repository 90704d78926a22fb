//! Copy button decoration for rendered code blocks.
//!
//! Runs after markdown rendering and never parses markdown itself. Each
//! `<pre>` element gets a copy button and a marker attribute; elements that
//! already carry the marker are skipped, so decorating twice is the same as
//! decorating once. The click behaviour lives in the bundled `copy.js`.

/// Attribute marking a `<pre>` element as already decorated.
pub const COPY_MARKER: &str = "data-copy-button";

const COPY_BUTTON: &str =
    "<button type=\"button\" class=\"copy-button\" aria-label=\"Copy code\">Copy</button>";

/// Inserts a copy button into every undecorated `<pre>` element.
///
/// # Arguments
///
/// * `html`: Rendered HTML containing zero or more code blocks
///
/// # Returns
///
/// HTML with each code block marked and carrying a copy button
///
/// # Examples
///
/// ```
/// use docfolio::decorate_code_blocks;
///
/// let once = decorate_code_blocks("<pre><code>x</code></pre>");
/// assert_eq!(decorate_code_blocks(&once), once);
/// ```
pub fn decorate_code_blocks(html: &str) -> String {
    let mut result = String::with_capacity(html.len());
    let mut pos = 0;

    while let Some(offset) = html[pos..].find("<pre") {
        let tag_start = pos + offset;
        let name_end = tag_start + "<pre".len();

        // Reject longer tag names such as <preview>
        let is_pre = matches!(
            html[name_end..].chars().next(),
            Some('>') | Some(' ') | Some('\t') | Some('\n')
        );

        let Some(tag_len) = html[tag_start..].find('>') else {
            break;
        };
        let tag_end = tag_start + tag_len;

        if !is_pre {
            result.push_str(&html[pos..name_end]);
            pos = name_end;
            continue;
        }

        let tag = &html[tag_start..tag_end];
        result.push_str(&html[pos..tag_start]);

        if tag.contains(COPY_MARKER) {
            result.push_str(tag);
            result.push('>');
        } else {
            result.push_str(tag);
            result.push(' ');
            result.push_str(COPY_MARKER);
            result.push('>');
            result.push_str(COPY_BUTTON);
        }

        pos = tag_end + 1;
    }

    result.push_str(&html[pos..]);
    result
}

#[cfg(test)]
fn count_decorated(html: &str) -> usize {
    html.matches(COPY_MARKER).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decorate_single_block() {
        // Arrange
        let html = "<p>x</p>\n<pre><code class=\"language-rs\">fn</code></pre>\n";

        // Act
        let decorated = decorate_code_blocks(html);

        // Assert
        assert_eq!(
            decorated,
            format!(
                "<p>x</p>\n<pre {}>{}<code class=\"language-rs\">fn</code></pre>\n",
                COPY_MARKER, COPY_BUTTON
            )
        );
    }

    #[test]
    fn test_decorate_is_idempotent() {
        // Arrange
        let html = "<pre><code>a</code></pre>\n<p>b</p>\n<pre><code>c</code></pre>\n";

        // Act
        let once = decorate_code_blocks(html);
        let twice = decorate_code_blocks(&once);

        // Assert
        assert_eq!(once, twice);
        assert_eq!(count_decorated(&twice), 2);
        assert_eq!(twice.matches("copy-button\"").count(), 2);
    }

    #[test]
    fn test_decorate_without_code_blocks_unchanged() {
        let html = "<h1>T</h1>\n<p>&lt;pre&gt; is escaped</p>\n";
        assert_eq!(decorate_code_blocks(html), html);
        assert_eq!(decorate_code_blocks(""), "");
    }

    #[test]
    fn test_decorate_ignores_longer_tag_names() {
        let html = "<preview>x</preview>";
        assert_eq!(decorate_code_blocks(html), html);
    }

    #[test]
    fn test_decorate_keeps_existing_attributes() {
        // Act
        let decorated = decorate_code_blocks("<pre class=\"wide\"><code>x</code></pre>");

        // Assert
        assert!(
            decorated.starts_with("<pre class=\"wide\" data-copy-button>"),
            "Attributes lost: {}",
            decorated
        );
    }

    #[test]
    fn test_decorate_unterminated_tag_left_alone() {
        assert_eq!(decorate_code_blocks("text <pre"), "text <pre");
    }
}
