//! Applying a registry's sanitizers to submitted values.

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::background::{
    sanitize_bg_attach, sanitize_bg_position, sanitize_bg_repeat, sanitize_bg_size, Keyword,
};
use crate::checkbox::sanitize_checkbox;
use crate::choice::{sanitize_choice, sanitize_key};
use crate::coerce::scalar_to_string;
use crate::colors::sanitize_rgba;
use crate::number::sanitize_number;
use crate::schema::{FieldKind, FieldRegistry, FieldSpec};
use crate::serialize::sanitize_sortable;
use crate::unfiltered::sanitize_unfiltered;

/// Sanitize one raw value for `field`, producing its stored shape.
pub fn sanitize_field(value: &Value, field: &FieldSpec, registry: &FieldRegistry) -> Value {
    match field.kind {
        FieldKind::Checkbox => sanitize_checkbox(value).to_value(),
        FieldKind::Number => sanitize_number(value).to_value(),
        FieldKind::Choice if registry.stores_as_option() => {
            let raw = scalar_to_string(value).unwrap_or_default();
            Value::String(sanitize_key(&raw))
        }
        FieldKind::Choice => Value::String(sanitize_choice(value, &field.as_choice())),
        FieldKind::BgRepeat => keyword_value(sanitize_bg_repeat(value)),
        FieldKind::BgSize => keyword_value(sanitize_bg_size(value)),
        FieldKind::BgAttach => keyword_value(sanitize_bg_attach(value)),
        FieldKind::BgPosition => keyword_value(sanitize_bg_position(value)),
        FieldKind::Sortable => Value::String(sanitize_sortable(value)),
        FieldKind::Rgba => Value::String(sanitize_rgba(value)),
        FieldKind::Unfiltered => sanitize_unfiltered(value.clone()),
    }
}

fn keyword_value<K: Keyword>(keyword: K) -> Value {
    Value::String(keyword.as_str().to_string())
}

impl FieldRegistry {
    /// Sanitize every known field of a submission.
    ///
    /// Ids the registry does not know are dropped. Fields missing from the
    /// submission stay missing.
    pub fn sanitize_submission(&self, submission: &Map<String, Value>) -> Map<String, Value> {
        let mut out = Map::new();
        for (id, raw) in submission {
            match self.get(id) {
                Some(field) => {
                    let clean = sanitize_field(raw, field, self);
                    debug!("sanitized '{id}' as {:?}", field.kind);
                    out.insert(id.clone(), clean);
                }
                None => warn!("dropping unknown field '{id}'"),
            }
        }
        out
    }

    /// Stored-shape defaults of every field that declares one, each passed
    /// through its own sanitizer.
    pub fn default_values(&self) -> Map<String, Value> {
        self.fields
            .iter()
            .filter_map(|field| {
                let default = field.default.as_ref()?;
                let value = sanitize_field(&Value::String(default.clone()), field, self);
                Some((field.id.clone(), value))
            })
            .collect()
    }
}
