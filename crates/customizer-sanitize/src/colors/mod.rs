//! Color sanitizing.
//!
//! Color settings are stored as `rgba(r,g,b,a)` strings, which downstream
//! style generation consumes verbatim. Hex input is normalized and
//! converted at full opacity; `rgba(...)` input has each channel
//! integer-coerced.

mod hex;


pub use hex::sanitize_hex;

use customizer_common::Color;
use serde_json::Value;
use tracing::debug;

use crate::coerce::{is_empty, parse_leading_int, scalar_to_string};

/// Stored value for an empty or unusable color.
pub const TRANSPARENT_RGBA: &str = "rgba(0,0,0,0)";

/// Normalize a submitted color to `rgba(r,g,b,a)`.
pub fn sanitize_rgba(value: &Value) -> String {
    if is_empty(value) {
        return TRANSPARENT_RGBA.to_string();
    }
    let Some(text) = scalar_to_string(value) else {
        debug!("color value {value} is a collection, using transparent");
        return TRANSPARENT_RGBA.to_string();
    };

    if !text.contains("rgba") {
        return hex_to_rgba(&text);
    }

    let [r, g, b, a] = rgba_channels(&text);
    format!("rgba({r},{g},{b},{a})")
}

/// Treat `text` as a hex color and render it opaque.
fn hex_to_rgba(text: &str) -> String {
    let hex = sanitize_hex(text);
    match Color::from_hex(&hex) {
        Some(color) => color.to_css_rgba(),
        None => TRANSPARENT_RGBA.to_string(),
    }
}

/// Strip the `rgba(` `)` wrapping and integer-coerce the first four
/// comma-separated positions. Missing channels are 0. Values are not clamped.
fn rgba_channels(text: &str) -> [i64; 4] {
    let inner = text.replace("rgba", "").replace(['(', ')'], "");
    let mut channels = [0_i64; 4];
    for (slot, part) in channels.iter_mut().zip(inner.split(',')) {
        *slot = parse_leading_int(part);
    }
    channels
}
