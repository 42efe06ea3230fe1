//! TOML field registry loading.

mod loader;
mod paths;


pub use loader::{load_default, load_from_path, parse_registry};
pub use paths::default_fields_path;
