//! A single registry entry.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::background::{
    BackgroundAttachment, BackgroundPosition, BackgroundRepeat, BackgroundSize, Keyword,
};
use crate::choice::ChoiceField;

/// Which sanitizer a field uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Checkbox,
    Number,
    Choice,
    BgRepeat,
    BgSize,
    BgAttach,
    BgPosition,
    Sortable,
    Rgba,
    Unfiltered,
}

impl FieldKind {
    /// For keyword kinds, whether `value` is in the kind's set.
    /// `None` for kinds that are not keyword sets.
    pub fn accepts_keyword(self, value: &str) -> Option<bool> {
        let accepted = match self {
            Self::BgRepeat => BackgroundRepeat::from_keyword(value).is_some(),
            Self::BgSize => BackgroundSize::from_keyword(value).is_some(),
            Self::BgAttach => BackgroundAttachment::from_keyword(value).is_some(),
            Self::BgPosition => BackgroundPosition::from_keyword(value).is_some(),
            _ => return None,
        };
        Some(accepted)
    }
}

/// One setting: its id, sanitizer, declared default and (for choices) the
/// allowed keys with their labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub id: String,
    pub kind: FieldKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub choices: BTreeMap<String, String>,
}

impl FieldSpec {
    pub fn new(id: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            id: id.into(),
            kind,
            default: None,
            choices: BTreeMap::new(),
        }
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn with_choice(mut self, key: impl Into<String>, label: impl Into<String>) -> Self {
        self.choices.insert(key.into(), label.into());
        self
    }

    /// The allowed set and default for choice sanitizing.
    pub fn as_choice(&self) -> ChoiceField {
        ChoiceField {
            choices: self.choices.clone(),
            default: self.default.clone().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_uses_snake_case() {
        let kind: FieldKind = serde_json::from_str(r#""bg_position""#).unwrap();
        assert_eq!(kind, FieldKind::BgPosition);
        assert_eq!(serde_json::to_string(&FieldKind::BgAttach).unwrap(), r#""bg_attach""#);
    }

    #[test]
    fn accepts_keyword_only_for_keyword_kinds() {
        assert_eq!(FieldKind::BgRepeat.accepts_keyword("repeat-x"), Some(true));
        assert_eq!(FieldKind::BgSize.accepts_keyword("repeat-x"), Some(false));
        assert_eq!(FieldKind::BgPosition.accepts_keyword("left-top"), Some(true));
        assert_eq!(FieldKind::Choice.accepts_keyword("anything"), None);
        assert_eq!(FieldKind::Rgba.accepts_keyword("#fff"), None);
    }

    #[test]
    fn as_choice_carries_choices_and_default() {
        let field = FieldSpec::new("layout", FieldKind::Choice)
            .with_choice("wide", "Wide")
            .with_choice("boxed", "Boxed")
            .with_default("wide");
        let choice = field.as_choice();
        assert!(choice.allows("boxed"));
        assert_eq!(choice.default, "wide");
    }

    #[test]
    fn as_choice_without_default_is_empty_string() {
        let field = FieldSpec::new("layout", FieldKind::Choice);
        assert_eq!(field.as_choice().default, "");
    }
}
