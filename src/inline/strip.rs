//! Character stripping (`((text))`).
//!
//! Removes every `c` and `C` from the span content, up to
//! [`MAX_STRIP_REMOVALS`](crate::limits::MAX_STRIP_REMOVALS) occurrences.

use memchr::memchr2;

use crate::limits::MAX_STRIP_REMOVALS;

/// Append `content` with `c`/`C` removed to `out`.
///
/// Copies the segments between occurrences in bulk.
///
/// # Example
/// ```
/// use markdown2html::inline::push_stripped;
///
/// let mut out = String::new();
/// push_stripped("Hello Chicago", &mut out);
/// assert_eq!(out, "Hello hiago");
/// ```
pub fn push_stripped(content: &str, out: &mut String) {
    push_stripped_limited(content, MAX_STRIP_REMOVALS, out);
}

fn push_stripped_limited(content: &str, limit: usize, out: &mut String) {
    let bytes = content.as_bytes();
    let mut start = 0;
    let mut removed = 0;

    while removed < limit {
        let Some(rel) = memchr2(b'c', b'C', &bytes[start..]) else {
            break;
        };
        out.push_str(&content[start..start + rel]);
        start += rel + 1;
        removed += 1;
    }
    out.push_str(&content[start..]);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip(content: &str) -> String {
        let mut out = String::new();
        push_stripped(content, &mut out);
        out
    }

    #[test]
    fn test_strip_both_cases() {
        assert_eq!(strip("Chicago"), "hiago");
        assert_eq!(strip("CcCc"), "");
    }

    #[test]
    fn test_strip_nothing_to_remove() {
        assert_eq!(strip("Hello"), "Hello");
    }

    #[test]
    fn test_strip_keeps_multibyte() {
        assert_eq!(strip("ça c'est"), "ça 'est");
    }

    #[test]
    fn test_strip_respects_limit() {
        let mut out = String::new();
        push_stripped_limited("cacbc", 2, &mut out);
        assert_eq!(out, "abc");
    }
}
