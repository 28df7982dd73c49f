//! Hash substitution (`[[text]]`).
//!
//! The span is replaced by the MD5 digest of the exact UTF-8 bytes between
//! the delimiters, as 32 lowercase hex characters.

use std::fmt::Write;

use crate::limits::DIGEST_HEX_LEN;

/// Append the lowercase hex MD5 digest of `content` to `out`.
///
/// # Example
/// ```
/// use markdown2html::inline::push_digest;
///
/// let mut out = String::new();
/// push_digest("Hello", &mut out);
/// assert_eq!(out, "8b1a9953c4611296a827abf8c47804d7");
/// ```
#[inline]
pub fn push_digest(content: &str, out: &mut String) {
    let digest = md5::compute(content.as_bytes());
    out.reserve(DIGEST_HEX_LEN);
    // Writing into a String cannot fail.
    let _ = write!(out, "{digest:x}");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digest(content: &str) -> String {
        let mut out = String::new();
        push_digest(content, &mut out);
        out
    }

    #[test]
    fn test_digest_known_values() {
        assert_eq!(digest("Hello"), "8b1a9953c4611296a827abf8c47804d7");
        assert_eq!(digest("Hello World"), "b10a8db164e0754105b7a99be72e3fe5");
        assert_eq!(digest("a"), "0cc175b9c0f1b6a831c399e269772661");
    }

    #[test]
    fn test_digest_hashes_utf8_bytes() {
        assert_eq!(digest("héllo"), "be50e8478cf24ff3595bc7307fb91b50");
    }

    #[test]
    fn test_digest_shape() {
        let hex = digest("anything at all");
        assert_eq!(hex.len(), DIGEST_HEX_LEN);
        assert!(hex.bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b)));
    }

    #[test]
    fn test_digest_appends() {
        let mut out = String::from("x=");
        push_digest("a", &mut out);
        assert_eq!(out, "x=0cc175b9c0f1b6a831c399e269772661");
    }
}
