//! The command body, kept apart from process setup so it can be tested.

use customizer_common::{CustomizerError, Result};
use customizer_sanitize::schema::FieldRegistry;
use customizer_sanitize::{load_default, load_from_path, validation};
use serde_json::{Map, Value};
use std::io::Read;
use std::path::Path;
use tracing::info;

use crate::cli::Args;

/// Execute the requested action and return what should be printed.
pub fn run(args: &Args) -> Result<String> {
    let registry = match &args.fields {
        Some(path) => load_from_path(path)?,
        None => load_default()?,
    };

    if args.validate {
        validation::validate(&registry)?;
        return Ok(format!("ok: {} fields", registry.len()));
    }

    let output = if args.defaults {
        registry.default_values()
    } else {
        let raw = read_input(args.input.as_deref())?;
        sanitize_json(&registry, &raw)?
    };
    render(&output, args.compact)
}

/// Sanitize a JSON submission text against `registry`.
pub fn sanitize_json(registry: &FieldRegistry, raw: &str) -> Result<Map<String, Value>> {
    let submission: Value = serde_json::from_str(raw)?;
    let Value::Object(fields) = submission else {
        return Err(CustomizerError::Other(
            "submission must be a JSON object of field id to value".into(),
        ));
    };
    let clean = registry.sanitize_submission(&fields);
    info!("sanitized {} of {} submitted fields", clean.len(), fields.len());
    Ok(clean)
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn render(map: &Map<String, Value>, compact: bool) -> Result<String> {
    let rendered = if compact {
        serde_json::to_string(map)?
    } else {
        serde_json::to_string_pretty(map)?
    };
    Ok(rendered)
}
