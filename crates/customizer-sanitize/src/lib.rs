//! Sanitizers for theme customizer settings.
//!
//! Every sanitizer takes an untrusted submitted value and returns a safe,
//! canonical one. Invalid input is never rejected; it is replaced by a
//! documented fallback. A [`FieldRegistry`] maps setting ids to their
//! sanitizers and can be loaded from TOML.
//!
//! # Quick Start
//!
//! ```rust
//! use customizer_sanitize::{sanitize_bg_position, sanitize_rgba, Keyword};
//! use serde_json::json;
//!
//! assert_eq!(sanitize_rgba(&json!("#ff0000")), "rgba(255,0,0,1)");
//! assert_eq!(sanitize_bg_position(&json!("top")).as_str(), "center-center");
//! ```

pub mod apply;
pub mod background;
pub mod checkbox;
pub mod choice;
pub mod coerce;
pub mod colors;
pub mod number;
pub mod schema;
pub mod serialize;
pub mod toml_loader;
pub mod unfiltered;
pub mod validation;

// Re-export core types for convenience
pub use apply::sanitize_field;
pub use background::{
    sanitize_bg_attach, sanitize_bg_position, sanitize_bg_repeat, sanitize_bg_size,
    BackgroundAttachment, BackgroundPosition, BackgroundRepeat, BackgroundSize, Keyword,
};
pub use checkbox::{sanitize_checkbox, Checkbox};
pub use choice::{sanitize_choice, sanitize_key, ChoiceField};
pub use colors::{sanitize_hex, sanitize_rgba, TRANSPARENT_RGBA};
pub use number::{sanitize_number, Number};
pub use schema::{FieldKind, FieldRegistry, FieldSpec};
pub use serialize::{is_serialized, sanitize_sortable, serialize, unserialize};
pub use toml_loader::{load_default, load_from_path};
pub use unfiltered::sanitize_unfiltered;
