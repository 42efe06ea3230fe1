//! Background style keywords.
//!
//! Each CSS background property accepts a small fixed set of keywords.
//! Anything outside the set is replaced by the property's fallback.

mod keywords;

#[cfg(test)]
mod tests;

pub use keywords::{BackgroundAttachment, BackgroundPosition, BackgroundRepeat, BackgroundSize};

use serde_json::Value;
use tracing::debug;

/// A closed set of CSS keywords with a designated fallback.
pub trait Keyword: Copy + Sized + 'static {
    /// Property name used in logs and errors.
    const PROPERTY: &'static str;
    const ALL: &'static [Self];
    const FALLBACK: Self;

    fn as_str(self) -> &'static str;

    /// Exact, case-sensitive lookup.
    fn from_keyword(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.as_str() == s)
    }
}

/// Parse error for a keyword outside its set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{value}' is not a valid {property}")]
pub struct UnknownKeyword {
    pub property: &'static str,
    pub value: String,
}

/// Sanitize any keyword property. Non-string input falls back.
pub fn sanitize_keyword<K: Keyword>(value: &Value) -> K {
    if let Some(k) = value.as_str().and_then(K::from_keyword) {
        return k;
    }
    let fallback = K::FALLBACK;
    debug!(
        "{} value {value} not recognized, using '{}'",
        K::PROPERTY,
        fallback.as_str()
    );
    fallback
}

pub fn sanitize_bg_repeat(value: &Value) -> BackgroundRepeat {
    sanitize_keyword(value)
}

pub fn sanitize_bg_size(value: &Value) -> BackgroundSize {
    sanitize_keyword(value)
}

pub fn sanitize_bg_attach(value: &Value) -> BackgroundAttachment {
    sanitize_keyword(value)
}

pub fn sanitize_bg_position(value: &Value) -> BackgroundPosition {
    sanitize_keyword(value)
}
