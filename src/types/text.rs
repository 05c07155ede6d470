//! Minimal TEXT value escaping.
//!
//! Only newline and comma are escaped; semicolon and backslash pass
//! through untouched. This is deliberately narrower than the RFC 5545
//! TEXT grammar — the parser is symmetric with it.

/// Escape a field value for emission on a single content line.
pub fn escape(value: &str) -> String {
    value.replace('\n', "\\n").replace(',', "\\,")
}

/// Inverse of [`escape`], applied in the same replacement order.
pub fn unescape(value: &str) -> String {
    value.replace("\\n", "\n").replace("\\,", ",")
}
