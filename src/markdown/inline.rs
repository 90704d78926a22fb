//! Inline formatting for prose text.
//!
//! Applies the fixed sequence of inline passes (escape, images, links, bold,
//! italic, inline code) to a single line. Each pass works on a list of
//! segments: text still open to formatting, and markup already produced by
//! an earlier pass. Later passes only ever look at text segments, so a
//! generated tag or attribute value is never rewritten.
//!
//! Inline code spans are claimed right after links and emitted last: the
//! emphasis passes never see their content, and a backtick only pairs with
//! another backtick inside the same text segment.

use regex::{Captures, Regex};
use std::sync::LazyLock;

static IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\]]*)\]\(([^)\s]+)\)").expect("valid image pattern"));

static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)\s]+)\)").expect("valid link pattern"));

static BOLD_STAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("valid bold pattern"));

static BOLD_UNDERSCORE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"__(.+?)__").expect("valid bold pattern"));

static ITALIC_STAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*(.+?)\*").expect("valid italic pattern"));

static ITALIC_UNDERSCORE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_(.+?)_").expect("valid italic pattern"));

static CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`]+)`").expect("valid inline code pattern"));

/// Piece of a line during inline formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    /// Escaped text that later passes may still format
    Text(String),
    /// Generated markup, emitted verbatim
    Markup(String),
    /// Escaped content of an inline code span
    Code(String),
}

/// Escapes the three HTML significant characters `&`, `<` and `>`.
///
/// Quotes are left untouched: prose and code bodies never land in
/// attribute position.
///
/// # Examples
///
/// ```
/// use docfolio::escape_html;
///
/// assert_eq!(escape_html("a < b && c > d"), "a &lt; b &amp;&amp; c &gt; d");
/// ```
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Formats a line of prose as inline HTML.
///
/// Runs escaping first, then images, links, bold, italic and inline code.
/// Delimiters that do not pair up stay in the output as literal characters.
/// Code span content is kept literal, so `*` and `_` inside backticks are
/// never read as emphasis. Emphasis does not reach across a code span.
///
/// # Arguments
///
/// * `text`: Raw line content (without block markers such as `#` or `-`)
///
/// # Returns
///
/// HTML fragment safe to place inside a block element
pub fn format_inline(text: &str) -> String {
    let mut segments = vec![Segment::Text(escape_html(text))];

    segments = apply(segments, &IMAGE_RE, |caps| {
        vec![Segment::Markup(format!(
            "<img src=\"{}\" alt=\"{}\">",
            &caps[2],
            caps[1].replace('"', "&quot;")
        ))]
    });

    segments = apply(segments, &LINK_RE, |caps| {
        vec![
            Segment::Markup(format!(
                "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">",
                &caps[2]
            )),
            Segment::Text(caps[1].to_string()),
            Segment::Markup("</a>".to_string()),
        ]
    });

    segments = apply(segments, &CODE_RE, |caps| vec![Segment::Code(caps[1].to_string())]);

    for pattern in [&BOLD_STAR_RE, &BOLD_UNDERSCORE_RE] {
        segments = apply(segments, pattern, |caps| wrap("strong", &caps[1]));
    }

    for pattern in [&ITALIC_STAR_RE, &ITALIC_UNDERSCORE_RE] {
        segments = apply(segments, pattern, |caps| wrap("em", &caps[1]));
    }

    segments
        .into_iter()
        .map(|segment| match segment {
            Segment::Text(text) | Segment::Markup(text) => text,
            Segment::Code(code) => format!("<code>{}</code>", code),
        })
        .collect()
}

/// Wraps captured text in an element, leaving the inner text formattable.
fn wrap(tag: &str, inner: &str) -> Vec<Segment> {
    vec![
        Segment::Markup(format!("<{}>", tag)),
        Segment::Text(inner.to_string()),
        Segment::Markup(format!("</{}>", tag)),
    ]
}

/// Runs one inline pass over every text segment.
///
/// Matches are replaced by the segments `replace` produces; the text around
/// each match is kept as text. Markup and code segments pass through
/// untouched, and a match never spans two segments.
fn apply<F>(segments: Vec<Segment>, pattern: &Regex, replace: F) -> Vec<Segment>
where
    F: Fn(&Captures<'_>) -> Vec<Segment>,
{
    let mut result = Vec::with_capacity(segments.len());

    for segment in segments {
        let text = match segment {
            Segment::Text(text) => text,
            other => {
                result.push(other);
                continue;
            }
        };

        let mut last_end = 0;
        for caps in pattern.captures_iter(&text) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            if whole.start() > last_end {
                result.push(Segment::Text(text[last_end..whole.start()].to_string()));
            }
            result.extend(replace(&caps));
            last_end = whole.end();
        }

        if last_end < text.len() {
            result.push(Segment::Text(text[last_end..].to_string()));
        }
    }

    result
}
