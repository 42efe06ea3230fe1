//! Enumerated choice settings.
//!
//! The allowed set and the default are handed in by the caller; nothing
//! here looks anything up from surrounding state.

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::LazyLock;
use tracing::debug;

use crate::coerce::scalar_to_string;

/// Characters a storage key may not contain (checked after ASCII lowercasing).
static KEY_REJECT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9_\-]").unwrap());

/// Allowed values of a choice setting: key → display label, plus the default key.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChoiceField {
    pub choices: BTreeMap<String, String>,
    pub default: String,
}

impl ChoiceField {
    pub fn new<K, L>(choices: impl IntoIterator<Item = (K, L)>, default: impl Into<String>) -> Self
    where
        K: Into<String>,
        L: Into<String>,
    {
        Self {
            choices: choices
                .into_iter()
                .map(|(k, l)| (k.into(), l.into()))
                .collect(),
            default: default.into(),
        }
    }

    pub fn allows(&self, key: &str) -> bool {
        self.choices.contains_key(key)
    }
}

/// Keep the submitted key when it is one of the field's choices.
pub fn sanitize_choice(input: &Value, field: &ChoiceField) -> String {
    match scalar_to_string(input) {
        Some(key) if field.allows(&key) => key,
        _ => {
            debug!(
                "choice {input} not allowed, using default '{}'",
                field.default
            );
            field.default.clone()
        }
    }
}

/// Reduce a string to a storage key: lowercase ASCII letters, digits, `_` and `-`.
///
/// Only ASCII letters are lowercased; every other character is dropped.
pub fn sanitize_key(key: &str) -> String {
    KEY_REJECT_RE
        .replace_all(&key.to_ascii_lowercase(), "")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn layout_field() -> ChoiceField {
        ChoiceField::new(
            [("wide", "Wide"), ("boxed", "Boxed"), ("1", "One column")],
            "wide",
        )
    }

    #[test]
    fn allowed_key_is_kept() {
        assert_eq!(sanitize_choice(&json!("boxed"), &layout_field()), "boxed");
    }

    #[test]
    fn unknown_key_falls_back_to_default() {
        let field = layout_field();
        assert_eq!(sanitize_choice(&json!("narrow"), &field), "wide");
        assert_eq!(sanitize_choice(&json!("Boxed"), &field), "wide");
        assert_eq!(sanitize_choice(&json!(["boxed"]), &field), "wide");
        assert_eq!(sanitize_choice(&json!(null), &field), "wide");
    }

    #[test]
    fn labels_are_not_keys() {
        assert_eq!(sanitize_choice(&json!("Wide"), &layout_field()), "wide");
    }

    #[test]
    fn numeric_input_matches_numeric_key() {
        let field = layout_field();
        assert_eq!(sanitize_choice(&json!(1), &field), "1");
        assert_eq!(sanitize_choice(&json!(true), &field), "1");
    }

    #[test]
    fn empty_choice_set_always_defaults() {
        let field = ChoiceField::new(Vec::<(String, String)>::new(), "x");
        assert_eq!(sanitize_choice(&json!("x"), &field), "x");
        assert_eq!(sanitize_choice(&json!("y"), &field), "x");
    }

    #[test]
    fn sanitize_key_strips_and_lowercases() {
        assert_eq!(sanitize_key("Header_Layout-2"), "header_layout-2");
        assert_eq!(sanitize_key("a b/c.d"), "abcd");
        assert_eq!(sanitize_key("<script>"), "script");
        assert_eq!(sanitize_key(""), "");
        assert_eq!(sanitize_key("Ünïcode"), "ncode");
    }

    #[test]
    fn sanitize_key_lowercases_ascii_only() {
        // Kelvin sign and dotted capital I lowercase to ASCII under Unicode rules.
        assert_eq!(sanitize_key("\u{212A}"), "");
        assert_eq!(sanitize_key("İ"), "");
        assert_eq!(sanitize_key("\u{212A}ey_İd"), "ey_d");
    }
}
