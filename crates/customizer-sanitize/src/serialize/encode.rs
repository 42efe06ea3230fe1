//! Value → serialized string.

use serde_json::{Map, Number, Value};
use std::fmt::Write;

pub fn serialize(value: &Value) -> String {
    let mut out = String::new();
    write_value(&mut out, value);
    out
}

fn write_value(out: &mut String, value: &Value) {
    match value {
        Value::Null => out.push_str("N;"),
        Value::Bool(b) => {
            let _ = write!(out, "b:{};", u8::from(*b));
        }
        Value::Number(n) => write_number(out, n),
        Value::String(s) => write_str(out, s),
        Value::Array(items) => {
            let _ = write!(out, "a:{}:{{", items.len());
            for (i, item) in items.iter().enumerate() {
                let _ = write!(out, "i:{i};");
                write_value(out, item);
            }
            out.push('}');
        }
        Value::Object(map) => write_map(out, map),
    }
}

fn write_number(out: &mut String, n: &Number) {
    if let Some(i) = n.as_i64() {
        let _ = write!(out, "i:{i};");
    } else if let Some(f) = n.as_f64() {
        // Integers past i64 are stored as floats, like any other out-of-range int.
        let _ = write!(out, "d:{f};");
    }
}

fn write_str(out: &mut String, s: &str) {
    let _ = write!(out, "s:{}:\"{s}\";", s.len());
}

fn write_map(out: &mut String, map: &Map<String, Value>) {
    let _ = write!(out, "a:{}:{{", map.len());
    for (key, item) in map {
        match integer_key(key) {
            Some(i) => {
                let _ = write!(out, "i:{i};");
            }
            None => write_str(out, key),
        }
        write_value(out, item);
    }
    out.push('}');
}

/// Keys spelled as canonical decimal integers (`"7"`, `"-3"`, not `"07"` or
/// `"-0"`) are stored as integer keys.
pub(super) fn integer_key(key: &str) -> Option<i64> {
    let digits = key.strip_prefix('-').unwrap_or(key);
    let canonical = match digits.as_bytes() {
        [] => false,
        [b'0'] => digits.len() == key.len(),
        [first, rest @ ..] => {
            (b'1'..=b'9').contains(first) && rest.iter().all(u8::is_ascii_digit)
        }
    };
    if canonical {
        key.parse().ok()
    } else {
        None
    }
}
