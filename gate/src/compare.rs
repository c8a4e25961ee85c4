//! Output normalization and equality.
//!
//! Judged and expected values are compared as exact strings after a
//! single canonicalization: CRLF becomes LF, then surrounding
//! whitespace is trimmed. No numeric tolerance, no other coercion.

/// Canonicalize line endings and trim surrounding whitespace.
pub fn normalize(text: &str) -> String {
    text.replace("\r\n", "\n").trim().to_string()
}

/// Equality after normalizing both sides.
pub fn values_equal(left: &str, right: &str) -> bool {
    normalize(left) == normalize(right)
}
