//! Line splitting over the working text.
//!
//! Every rule that is anchored to line boundaries walks the text through
//! [`Lines`], which uses `memchr` to find terminators instead of iterating
//! characters.

use std::borrow::Cow;

use memchr::memchr;

/// A physical line of the working text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// Line content without the terminating `\n`.
    pub content: &'a str,
    /// Whether a `\n` followed the content.
    pub terminated: bool,
}

impl<'a> Line<'a> {
    /// Append the line terminator (if any) to `out`.
    #[inline]
    pub fn push_terminator(&self, out: &mut String) {
        if self.terminated {
            out.push('\n');
        }
    }

    /// True when the line holds only intra-line whitespace (or nothing).
    #[inline]
    pub fn is_blank(&self) -> bool {
        self.content.chars().all(is_line_space)
    }
}

/// Iterator over the `\n`-separated lines of a text.
///
/// A trailing `\n` does not produce an extra empty line, so
/// concatenating `content` plus terminators reproduces the input exactly.
///
/// # Example
/// ```
/// use markdown2html::line::Lines;
///
/// let lines: Vec<_> = Lines::new("a\nb").map(|l| l.content).collect();
/// assert_eq!(lines, ["a", "b"]);
/// ```
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    rest: &'a str,
}

impl<'a> Lines<'a> {
    #[inline]
    pub fn new(text: &'a str) -> Self {
        Self { rest: text }
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = Line<'a>;

    fn next(&mut self) -> Option<Line<'a>> {
        if self.rest.is_empty() {
            return None;
        }
        match memchr(b'\n', self.rest.as_bytes()) {
            Some(pos) => {
                let content = &self.rest[..pos];
                self.rest = &self.rest[pos + 1..];
                Some(Line {
                    content,
                    terminated: true,
                })
            }
            None => {
                let content = self.rest;
                self.rest = "";
                Some(Line {
                    content,
                    terminated: false,
                })
            }
        }
    }
}

/// Rebuild `text` line by line, letting `rewrite` emit each line's content.
///
/// Terminators are preserved as they were.
pub fn map_lines<F>(text: &str, mut rewrite: F) -> String
where
    F: FnMut(&str, &mut String),
{
    let mut out = String::with_capacity(text.len() + text.len() / 4);
    for line in Lines::new(text) {
        rewrite(line.content, &mut out);
        line.push_terminator(&mut out);
    }
    out
}

/// Whitespace that can appear inside a single line (Unicode, minus `\n`).
#[inline]
pub fn is_line_space(c: char) -> bool {
    c != '\n' && c.is_whitespace()
}

/// Split off the first character of `line` if it is intra-line whitespace,
/// returning the rest.
#[inline]
pub fn strip_one_space(line: &str) -> Option<&str> {
    let mut chars = line.chars();
    chars.next().filter(|&c| is_line_space(c))?;
    Some(chars.as_str())
}

/// Convert `\r\n` and lone `\r` line endings to `\n`.
///
/// Borrows when the text holds no `\r` at all.
pub fn normalize_line_endings(text: &str) -> Cow<'_, str> {
    if memchr(b'\r', text.as_bytes()).is_none() {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
}
