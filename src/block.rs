//! Line-anchored block rules: headings and single-item lists.
//!
//! Each rule looks at one physical line at a time and either replaces the
//! whole line or leaves it untouched.

use pulldown_cmark::HeadingLevel;

use crate::line::{map_lines, strip_one_space};

/// Kind of list marker recognized at the start of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// `- item` becomes `<ul><li>item</li></ul>`.
    Unordered,
    /// `* item` becomes `<ol><li>item</li></ol>`.
    Ordered,
}

impl ListKind {
    #[inline]
    fn marker(self) -> char {
        match self {
            ListKind::Unordered => '-',
            ListKind::Ordered => '*',
        }
    }

    #[inline]
    fn tags(self) -> (&'static str, &'static str) {
        match self {
            ListKind::Unordered => ("<ul><li>", "</li></ul>"),
            ListKind::Ordered => ("<ol><li>", "</li></ol>"),
        }
    }
}

/// Content of a heading line of exactly `level` hashes.
///
/// The line must be `level` `#` characters, one whitespace character, then
/// at least one more character. Everything after that whitespace is content.
///
/// # Example
/// ```
/// use markdown2html::block::heading_content;
/// use pulldown_cmark::HeadingLevel;
///
/// assert_eq!(heading_content("## Sub", HeadingLevel::H2), Some("Sub"));
/// assert_eq!(heading_content("## Sub", HeadingLevel::H1), None);
/// ```
pub fn heading_content(line: &str, level: HeadingLevel) -> Option<&str> {
    let level = level as usize;
    let bytes = line.as_bytes();
    if bytes.len() <= level || !bytes[..level].iter().all(|&b| b == b'#') {
        return None;
    }
    strip_one_space(&line[level..]).filter(|content| !content.is_empty())
}

/// Content of a list line: marker, one whitespace character, content.
pub fn list_item_content(line: &str, kind: ListKind) -> Option<&str> {
    let rest = line.strip_prefix(kind.marker())?;
    strip_one_space(rest).filter(|content| !content.is_empty())
}

/// Replace every heading line of `level` with `<hN>content</hN>`.
pub fn rewrite_headings(text: &str, level: HeadingLevel) -> String {
    let tag = level.to_string();
    map_lines(text, |line, out| match heading_content(line, level) {
        Some(content) => {
            out.push('<');
            out.push_str(&tag);
            out.push('>');
            out.push_str(content);
            out.push_str("</");
            out.push_str(&tag);
            out.push('>');
        }
        None => out.push_str(line),
    })
}

/// Replace every list line of `kind` with a standalone one-item list.
///
/// Adjacent items are not merged: each line gets its own list wrapper.
pub fn rewrite_list_items(text: &str, kind: ListKind) -> String {
    let (open, close) = kind.tags();
    map_lines(text, |line, out| match list_item_content(line, kind) {
        Some(content) => {
            out.push_str(open);
            out.push_str(content);
            out.push_str(close);
        }
        None => out.push_str(line),
    })
}
