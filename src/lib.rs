//! markdown2html: rule-based Markdown to HTML rewriter
//!
//! Source text goes through a fixed, ordered table of text rewrite rules and
//! then a generic CommonMark pass.
//!
//! # Pipeline
//! 1. Headings, levels 1 through 6
//! 2. `- item` and `* item` lines, one list per line
//! 3. `**bold**`, `__emphasis__`
//! 4. `[[text]]` to the MD5 hex digest of `text`
//! 5. `((text))` with every `c`/`C` removed
//! 6. `<p>` wrapping of remaining lines (converted lines included)
//! 7. `\n` to `<br />`
//! 8. CommonMark rendering of the flattened result
//!
//! The transform is not idempotent: feeding its output back in wraps the
//! already converted fragments again.

pub mod block;
pub mod convert;
pub mod error;
pub mod inline;
pub mod limits;
pub mod line;
pub mod paragraph;
pub mod pipeline;
pub mod render;

use log::debug;

pub use convert::convert_file;
pub use error::{Error, Result};
pub use pipeline::{RULES, Rule, rewrite};
pub use pulldown_cmark::HeadingLevel;

/// Convert Markdown to HTML.
///
/// This is the primary API. It never fails; empty input gives empty output.
///
/// # Example
/// ```
/// let html = markdown2html::to_html("# Hello\n**World**");
/// assert!(html.contains("<h1>Hello</h1>"));
/// assert!(html.contains("<b>World</b>"));
/// ```
pub fn to_html(source: &str) -> String {
    let mut out = String::with_capacity(source.len() * 2);
    to_html_into(source, &mut out);
    out
}

/// Convert Markdown to HTML, writing into a provided buffer.
///
/// The buffer is cleared first; its capacity is reused.
pub fn to_html_into(source: &str, out: &mut String) {
    out.clear();
    let text = rewrite(source);
    render::push_html(out, &text);
    debug!("rendered {} bytes to {} bytes", source.len(), out.len());
}
