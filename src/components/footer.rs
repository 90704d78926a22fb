//! Site footer component

use maud::{Markup, html};

/// Renders page footer with generator credit
pub fn footer() -> Markup {
    html! {
        footer class="site-footer" {
            "Generated by docfolio " (env!("CARGO_PKG_VERSION"))
        }
    }
}
