//! Field registry validation.
//!
//! Checks ids, choice sets and declared defaults. Every problem is
//! collected and reported together in a single `ConfigError`.

mod fields;


use crate::schema::FieldRegistry;
use customizer_common::ConfigError;

/// Run all validations on a registry, collecting all errors.
pub fn validate(registry: &FieldRegistry) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    fields::validate_ids(&mut errors, registry);
    for field in &registry.fields {
        fields::validate_choices(&mut errors, field);
        fields::validate_default(&mut errors, field);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
