//! Property-based tests for the markdown renderer.
//!
//! These tests use proptest to generate markdown-like inputs and verify
//! that rendering is total and always produces balanced block elements.

use proptest::prelude::*;

use docfolio::{decorate_code_blocks, render_markdown};

/// Generate a random markdown-like string.
fn markdown_string() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[\x20-\x7E\n\r\t]*").unwrap()
}

/// Generate a document assembled from block-shaped lines.
fn block_document() -> impl Strategy<Value = String> {
    let line = prop_oneof![
        Just("```".to_string()),
        Just("```rust".to_string()),
        Just(String::new()),
        "[a-z *_`]{1,20}".prop_map(|s| format!("- {}", s)),
        "[a-z *_`]{1,20}".prop_map(|s| format!("* {}", s)),
        (1..=7usize, "[a-z]{1,10}").prop_map(|(n, s)| format!("{} {}", "#".repeat(n), s)),
        "[a-z<>&*_`\\[\\]()!]{1,30}",
        "[a-z _*]{0,8}`[a-z_*]{1,8}`[a-z _*]{0,8}`[a-z_*]{1,8}`",
    ];
    prop::collection::vec(line, 0..30).prop_map(|lines| lines.join("\n"))
}

proptest! {
    /// Rendering never panics on any input.
    #[test]
    fn render_never_panics(input in markdown_string()) {
        let _ = render_markdown(&input);
    }

    /// Lists are always balanced.
    #[test]
    fn lists_balanced(input in block_document()) {
        let html = render_markdown(&input);
        prop_assert_eq!(html.matches("<ul>").count(), html.matches("</ul>").count());
        prop_assert_eq!(html.matches("<li>").count(), html.matches("</li>").count());
    }

    /// Code blocks are always balanced, even with unterminated fences.
    #[test]
    fn code_blocks_balanced(input in block_document()) {
        let html = render_markdown(&input);
        prop_assert_eq!(html.matches("<pre>").count(), html.matches("</pre>").count());
    }

    /// Inline code tags are balanced and only come from backtick pairs.
    #[test]
    fn inline_code_balanced(input in block_document()) {
        let html = render_markdown(&input);
        let inline = html.matches("<code>").count() - html.matches("<pre><code>").count();
        let closing = html.matches("</code>").count() - html.matches("</code></pre>").count();
        prop_assert_eq!(inline, closing);

        let backticks: usize = input
            .lines()
            .filter(|line| !line.trim_start().starts_with("```"))
            .map(|line| line.matches('`').count())
            .sum();
        prop_assert!(inline * 2 <= backticks, "{} spans from {} backticks", inline, backticks);
    }

    /// Raw angle brackets never survive into the output as markup.
    #[test]
    fn no_raw_tags_from_text(text in "[a-z<>& ]{0,40}") {
        let html = render_markdown(&text);
        let stripped = html
            .replace("<p>", "")
            .replace("</p>", "")
            .replace("<ul>", "")
            .replace("</ul>", "")
            .replace("<li>", "")
            .replace("</li>", "");
        prop_assert!(!stripped.contains('<'), "Unescaped '<' in {}", html);
    }

    /// Decorating twice equals decorating once.
    #[test]
    fn decorate_idempotent(input in block_document()) {
        let once = decorate_code_blocks(&render_markdown(&input));
        prop_assert_eq!(decorate_code_blocks(&once), once);
    }
}
