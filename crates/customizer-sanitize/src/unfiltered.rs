//! The explicit no-op sanitizer.

use serde_json::Value;

/// Return the value untouched. Only for fields whose content is trusted.
pub fn sanitize_unfiltered(value: Value) -> Value {
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn returns_input_unchanged() {
        let v = json!({"css": "<style>body{}</style>", "n": [1, 2]});
        assert_eq!(sanitize_unfiltered(v.clone()), v);
    }
}
