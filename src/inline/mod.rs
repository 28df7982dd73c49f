//! Inline span rules.
//!
//! All four inline rules share one shape: a literal opener, at least one
//! character of content, and the nearest literal closer on the same line.
//! [`replace_spans`] implements that shape once; the individual rules only
//! decide what to emit for the content.

pub mod digest;
pub mod strip;

use memchr::memmem::Finder;

use crate::line::Lines;

pub use digest::push_digest;
pub use strip::push_stripped;

/// Literal delimiters of an inline span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiters {
    pub open: &'static str,
    pub close: &'static str,
}

/// `**bold**`
pub const BOLD: Delimiters = Delimiters {
    open: "**",
    close: "**",
};

/// `__emphasis__`
pub const EMPHASIS: Delimiters = Delimiters {
    open: "__",
    close: "__",
};

/// `[[content]]`, replaced by its digest.
pub const HASH: Delimiters = Delimiters {
    open: "[[",
    close: "]]",
};

/// `((content))`, replaced with `c`/`C` removed.
pub const STRIP: Delimiters = Delimiters {
    open: "((",
    close: "))",
};

/// Replace every `open content close` span with whatever `replace` emits.
///
/// Matching is leftmost and non-greedy: the closer is the first one that
/// leaves at least one character of content. Spans never cross a line
/// break. After a replacement, scanning resumes right after the closer, so
/// spans never overlap.
///
/// # Example
/// ```
/// use markdown2html::inline::{replace_spans, BOLD};
///
/// let out = replace_spans("**a** and **b**", BOLD, |content, out| {
///     out.push_str(&content.to_uppercase());
/// });
/// assert_eq!(out, "A and B");
/// ```
pub fn replace_spans<F>(text: &str, delims: Delimiters, mut replace: F) -> String
where
    F: FnMut(&str, &mut String),
{
    let open = Finder::new(delims.open.as_bytes());
    let close = Finder::new(delims.close.as_bytes());
    let mut out = String::with_capacity(text.len());

    for line in Lines::new(text) {
        replace_in_line(line.content, &open, &close, &mut replace, &mut out);
        line.push_terminator(&mut out);
    }
    out
}

fn replace_in_line<F>(
    line: &str,
    open: &Finder<'_>,
    close: &Finder<'_>,
    replace: &mut F,
    out: &mut String,
) where
    F: FnMut(&str, &mut String),
{
    let bytes = line.as_bytes();
    let open_len = open.needle().len();
    let close_len = close.needle().len();
    let mut pos = 0;

    while let Some(rel) = open.find(&bytes[pos..]) {
        let start = pos + rel;
        let content_start = start + open_len;
        // Content needs at least one character before the closer.
        let search_from = content_start + 1;
        if search_from > bytes.len() {
            break;
        }
        // No closer for this opener means none for any later opener either.
        let Some(rel_close) = close.find(&bytes[search_from..]) else {
            break;
        };
        let close_start = search_from + rel_close;

        out.push_str(&line[pos..start]);
        replace(&line[content_start..close_start], out);
        pos = close_start + close_len;
    }
    out.push_str(&line[pos..]);
}

/// `**content**` to `<b>content</b>`.
pub fn rewrite_bold(text: &str) -> String {
    replace_spans(text, BOLD, |content, out| {
        out.push_str("<b>");
        out.push_str(content);
        out.push_str("</b>");
    })
}

/// `__content__` to `<em>content</em>`.
pub fn rewrite_emphasis(text: &str) -> String {
    replace_spans(text, EMPHASIS, |content, out| {
        out.push_str("<em>");
        out.push_str(content);
        out.push_str("</em>");
    })
}

/// `[[content]]` to the lowercase hex MD5 digest of `content`.
pub fn rewrite_digests(text: &str) -> String {
    replace_spans(text, HASH, push_digest)
}

/// `((content))` to `content` without any `c` or `C`.
pub fn rewrite_stripped(text: &str) -> String {
    replace_spans(text, STRIP, push_stripped)
}
