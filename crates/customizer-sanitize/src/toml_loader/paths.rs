//! Registry path resolution.

use customizer_common::ConfigError;
use std::path::PathBuf;

/// Get the platform-specific default registry path.
///
/// On macOS: `~/Library/Application Support/customizer/fields.toml`
/// On Linux: `~/.config/customizer/fields.toml`
pub fn default_fields_path() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))?;
    Ok(config_dir.join("customizer").join("fields.toml"))
}
