//! Strict detection of already-serialized strings.

use regex::Regex;
use std::sync::LazyLock;

static COLLECTION_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[saOE]:[0-9]+:").unwrap());

static SCALAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[bid]:[0-9.E+-]+;$").unwrap());

/// Whether `data` looks like a complete serialized value.
///
/// This is a shape check on the outer token only; it does not decode.
pub fn is_serialized(data: &str) -> bool {
    let data = data.trim();
    if data == "N;" {
        return true;
    }
    let bytes = data.as_bytes();
    if bytes.len() < 4 || bytes[1] != b':' {
        return false;
    }
    let last = bytes[bytes.len() - 1];
    if last != b';' && last != b'}' {
        return false;
    }

    match bytes[0] {
        b's' => bytes[bytes.len() - 2] == b'"' && COLLECTION_RE.is_match(data),
        b'a' | b'O' | b'E' => COLLECTION_RE.is_match(data),
        b'b' | b'i' | b'd' => SCALAR_RE.is_match(data),
        _ => false,
    }
}
