//! Numeric settings.
//!
//! JSON numbers pass through untouched. Everything else is read as an
//! integer the loose way a form field would be (`"5abc"` is 5, `""` is 0).

use serde::Serialize;
use serde_json::Value;
use std::fmt;
use tracing::debug;

use crate::coerce::to_int;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    pub fn to_value(self) -> Value {
        match self {
            Self::Int(i) => Value::from(i),
            // Non-finite floats have no JSON form.
            Self::Float(f) => serde_json::Number::from_f64(f).map_or(Value::Null, Value::Number),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
        }
    }
}

pub fn sanitize_number(value: &Value) -> Number {
    if let Value::Number(n) = value {
        if let Some(i) = n.as_i64() {
            return Number::Int(i);
        }
        if let Some(f) = n.as_f64() {
            return Number::Float(f);
        }
    }

    let coerced = to_int(value);
    debug!("coerced non-numeric value {value} to {coerced}");
    Number::Int(coerced)
}
