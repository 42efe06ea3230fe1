//! Checkbox settings.
//!
//! A checked box submits the literal string `"on"`; anything else means
//! unchecked and is stored as `false`.

use serde::{Serialize, Serializer};
use serde_json::Value;
use tracing::debug;

/// The value a checked box submits.
pub const CHECKBOX_ON: &str = "on";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Checkbox {
    On,
    #[default]
    Off,
}

impl Checkbox {
    pub fn is_on(self) -> bool {
        self == Self::On
    }

    /// Stored shape: `"on"` or `false`.
    pub fn to_value(self) -> Value {
        match self {
            Self::On => Value::String(CHECKBOX_ON.into()),
            Self::Off => Value::Bool(false),
        }
    }
}

impl Serialize for Checkbox {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::On => serializer.serialize_str(CHECKBOX_ON),
            Self::Off => serializer.serialize_bool(false),
        }
    }
}

/// Only the exact string `"on"` is checked.
pub fn sanitize_checkbox(value: &Value) -> Checkbox {
    match value {
        Value::String(s) if s == CHECKBOX_ON => Checkbox::On,
        other => {
            debug!("checkbox value {other} is not \"on\", storing false");
            Checkbox::Off
        }
    }
}
