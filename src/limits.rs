//! Fixed limits applied by the rewrite rules.

/// Maximum number of `c`/`C` characters removed from one `((...))` span.
///
/// Equal to `i32::MAX`, so realistic input never hits it.
pub const MAX_STRIP_REMOVALS: usize = i32::MAX as usize;

/// Number of lowercase hex characters produced by the `[[...]]` digest.
pub const DIGEST_HEX_LEN: usize = 32;
