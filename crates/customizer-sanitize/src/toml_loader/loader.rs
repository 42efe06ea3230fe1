//! Core TOML registry loading: read from path or platform default.

use crate::schema::FieldRegistry;
use crate::validation;
use customizer_common::ConfigError;
use std::path::Path;
use tracing::{info, warn};

use super::paths::default_fields_path;

/// Parse registry TOML text.
///
/// Validation problems are logged as a warning; the parsed registry is
/// returned regardless.
pub fn parse_registry(content: &str) -> Result<FieldRegistry, ConfigError> {
    let registry: FieldRegistry = toml::from_str(content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&registry) {
        warn!("field registry validation warning: {e}");
    }
    Ok(registry)
}

/// Load a registry from a specific TOML file path.
pub fn load_from_path(path: &Path) -> Result<FieldRegistry, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let registry = parse_registry(&content)?;
    info!(
        "loaded {} fields from {}",
        registry.len(),
        path.display()
    );
    Ok(registry)
}

/// Load the registry from the platform-specific default path.
///
/// A missing file yields an empty registry.
pub fn load_default() -> Result<FieldRegistry, ConfigError> {
    let path = default_fields_path()?;

    match load_from_path(&path) {
        Ok(registry) => Ok(registry),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no field registry at {}, using an empty one", path.display());
            Ok(FieldRegistry::default())
        }
        Err(e) => Err(e),
    }
}
