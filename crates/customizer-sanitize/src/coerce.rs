//! Loose scalar coercions shared by the sanitizers.
//!
//! Submitted form values arrive as arbitrary JSON. These helpers give them
//! the same integer, string and emptiness readings a settings form expects.

use serde_json::Value;

/// Whitespace skipped before a leading integer.
const LEADING_WHITESPACE: &[char] = &[' ', '\t', '\n', '\r', '\x0b', '\x0c'];

/// Read the leading decimal integer of `s`.
///
/// Skips leading whitespace, accepts one optional sign and stops at the
/// first non-digit. No digits yields 0. Out-of-range values saturate.
pub fn parse_leading_int(s: &str) -> i64 {
    let s = s.trim_start_matches(LEADING_WHITESPACE);
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut acc: i64 = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        let digit = i64::from(b - b'0');
        let next = acc
            .checked_mul(10)
            .and_then(|v| if negative { v.checked_sub(digit) } else { v.checked_add(digit) });
        match next {
            Some(v) => acc = v,
            None => return if negative { i64::MIN } else { i64::MAX },
        }
    }
    acc
}

/// Integer reading of any value.
pub fn to_int(value: &Value) -> i64 {
    match value {
        Value::Null => 0,
        Value::Bool(b) => i64::from(*b),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i
            } else if let Some(u) = n.as_u64() {
                i64::try_from(u).unwrap_or(i64::MAX)
            } else {
                n.as_f64()
                    .filter(|f| f.is_finite())
                    .map_or(0, |f| f.trunc() as i64)
            }
        }
        Value::String(s) => parse_leading_int(s),
        Value::Array(items) => i64::from(!items.is_empty()),
        Value::Object(map) => i64::from(!map.is_empty()),
    }
}

/// String reading of a scalar value. Arrays and objects have none.
pub fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => Some(String::new()),
        Value::Bool(true) => Some("1".into()),
        Value::Bool(false) => Some(String::new()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// Whether a submitted value counts as "nothing entered".
///
/// Null, `false`, zero, `""`, `"0"` and empty collections are empty.
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty() || s == "0",
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}
