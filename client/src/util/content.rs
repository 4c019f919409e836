//! Blog post body rendering.
//!
//! Post bodies are authored as Markdown in the CMS. Editors are trusted, so
//! embedded HTML (video embeds, call-out boxes) passes through unchanged.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use pulldown_cmark::{Options, Parser, html};

/// Render a Markdown body to HTML.
#[must_use]
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_HEADING_ATTRIBUTES);

    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, Parser::new_ext(markdown, options));
    out
}
