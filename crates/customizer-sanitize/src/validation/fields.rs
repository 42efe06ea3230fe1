//! Per-field checks used by the registry validator.

use std::collections::HashSet;

use crate::checkbox::CHECKBOX_ON;
use crate::schema::{FieldKind, FieldRegistry, FieldSpec};

/// Ids must be non-empty and unique.
pub(super) fn validate_ids(errors: &mut Vec<String>, registry: &FieldRegistry) {
    let mut seen = HashSet::new();
    for (index, field) in registry.fields.iter().enumerate() {
        if field.id.trim().is_empty() {
            errors.push(format!("fields[{index}] has an empty id"));
        } else if !seen.insert(field.id.as_str()) {
            errors.push(format!("duplicate field id '{}'", field.id));
        }
    }
}

/// Only choice fields carry choices, and they must carry at least one.
pub(super) fn validate_choices(errors: &mut Vec<String>, field: &FieldSpec) {
    let id = &field.id;
    match field.kind {
        FieldKind::Choice if field.choices.is_empty() => {
            errors.push(format!("{id}: choice field has no choices"));
        }
        FieldKind::Choice => {}
        kind if !field.choices.is_empty() => {
            errors.push(format!("{id}: choices are only allowed on choice fields, not {kind:?}"));
        }
        _ => {}
    }
}

/// Declared defaults must be values the field's sanitizer keeps.
pub(super) fn validate_default(errors: &mut Vec<String>, field: &FieldSpec) {
    let id = &field.id;
    let Some(default) = field.default.as_deref() else {
        if field.kind == FieldKind::Choice {
            errors.push(format!("{id}: choice field has no default"));
        }
        return;
    };

    match field.kind {
        FieldKind::Choice => {
            if !field.choices.is_empty() && !field.choices.contains_key(default) {
                errors.push(format!("{id}: default '{default}' is not one of its choices"));
            }
        }
        FieldKind::Checkbox => {
            if !default.is_empty() && default != CHECKBOX_ON {
                errors.push(format!(
                    "{id}: checkbox default must be \"{CHECKBOX_ON}\" or empty, got '{default}'"
                ));
            }
        }
        kind => {
            if kind.accepts_keyword(default) == Some(false) {
                errors.push(format!("{id}: default '{default}' is not a valid {kind:?} keyword"));
            }
        }
    }
}
