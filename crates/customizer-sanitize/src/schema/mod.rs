//! Field registry types.
//!
//! A registry lists every customizer setting by id together with the
//! sanitizer that applies to it. All structs use `serde(default)` so
//! partial registry files load.

mod field;

pub use field::{FieldKind, FieldSpec};

use serde::{Deserialize, Serialize};

/// Every sanitized setting of one theme.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldRegistry {
    /// When non-empty, settings are stored together under this option name
    /// and choice fields are reduced to plain keys instead of being checked
    /// against their choices.
    pub option_name: String,
    pub fields: Vec<FieldSpec>,
}

impl FieldRegistry {
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        Self {
            option_name: String::new(),
            fields,
        }
    }

    pub fn with_option_name(mut self, option_name: impl Into<String>) -> Self {
        self.option_name = option_name.into();
        self
    }

    pub fn stores_as_option(&self) -> bool {
        !self.option_name.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.id == id)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_registry_is_empty() {
        let registry = FieldRegistry::default();
        assert!(registry.is_empty());
        assert!(!registry.stores_as_option());
    }

    #[test]
    fn get_finds_by_id() {
        let registry = FieldRegistry::new(vec![
            FieldSpec::new("logo_sticky", FieldKind::Checkbox),
            FieldSpec::new("accent", FieldKind::Rgba),
        ]);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get("accent").unwrap().kind, FieldKind::Rgba);
        assert!(registry.get("missing").is_none());
    }

    #[test]
    fn option_name_switches_storage_mode() {
        let registry = FieldRegistry::default().with_option_name("theme_mods");
        assert!(registry.stores_as_option());
    }
}
