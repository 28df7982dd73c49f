//! Paragraph wrapping and line-break flattening.
//!
//! These run after all block and inline rules, so they see lines that were
//! already turned into HTML and wrap them again.

use memchr::memchr_iter;

use crate::line::{Line, Lines, is_line_space};

const BREAK: &str = "<br />";

/// Wrap every non-blank line in `<p>...</p>`.
///
/// Rules:
/// - leading whitespace is dropped from the wrapped content
/// - a line whose first non-whitespace character is `-` is left alone
///   (`*` lines are not exempt)
/// - blank lines directly before a wrapped line are absorbed into it;
///   blank lines before a `-` line or at the end of the text are kept
///
/// # Example
/// ```
/// use markdown2html::paragraph::wrap_paragraphs;
///
/// assert_eq!(wrap_paragraphs("a\n\nb"), "<p>a</p>\n<p>b</p>");
/// assert_eq!(wrap_paragraphs("-x"), "-x");
/// ```
pub fn wrap_paragraphs(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 2);
    let mut pending_blank: Vec<Line<'_>> = Vec::new();

    for line in Lines::new(text) {
        if line.is_blank() {
            pending_blank.push(line);
            continue;
        }

        let content = line.content.trim_start_matches(is_line_space);
        if content.starts_with('-') {
            flush_blank(&mut pending_blank, &mut out);
            out.push_str(line.content);
        } else {
            pending_blank.clear();
            out.push_str("<p>");
            out.push_str(content);
            out.push_str("</p>");
        }
        line.push_terminator(&mut out);
    }
    flush_blank(&mut pending_blank, &mut out);
    out
}

fn flush_blank(pending: &mut Vec<Line<'_>>, out: &mut String) {
    for line in pending.drain(..) {
        out.push_str(line.content);
        line.push_terminator(out);
    }
}

/// Replace every `\n` with a literal `<br />`, leaving a single line.
///
/// # Example
/// ```
/// use markdown2html::paragraph::flatten_line_breaks;
///
/// assert_eq!(flatten_line_breaks("a\nb\n"), "a<br />b<br />");
/// ```
pub fn flatten_line_breaks(text: &str) -> String {
    let bytes = text.as_bytes();
    let breaks = memchr_iter(b'\n', bytes).count();
    let mut out = String::with_capacity(text.len() + breaks * (BREAK.len() - 1));
    let mut start = 0;

    for pos in memchr_iter(b'\n', bytes) {
        out.push_str(&text[start..pos]);
        out.push_str(BREAK);
        start = pos + 1;
    }
    out.push_str(&text[start..]);
    out
}
