//! Generic Markdown rendering pass.
//!
//! Runs after the rule table over the flattened text. Most constructs are
//! already literal HTML by then; CommonMark passes raw HTML through, so this
//! pass mainly handles leftover plain text.

use pulldown_cmark::{Options, Parser, html};

/// Render `text` as CommonMark and append the HTML to `out`.
///
/// # Example
/// ```
/// let mut out = String::new();
/// markdown2html::render::push_html(&mut out, "plain *text*");
/// assert_eq!(out, "<p>plain <em>text</em></p>\n");
/// ```
pub fn push_html(out: &mut String, text: &str) {
    let parser = Parser::new_ext(text, Options::empty());
    html::push_html(out, parser);
}
