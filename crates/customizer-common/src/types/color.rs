use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse an opaque `RRGGBB`, with or without a leading `#`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Self { r, g, b, a: 255 })
    }

    /// `rgba(r,g,b,a)` with the alpha channel as a CSS fraction.
    ///
    /// Opaque colors render alpha as `1`, fully transparent ones as `0`,
    /// everything in between with at most two decimals.
    pub fn to_css_rgba(&self) -> String {
        let alpha = match self.a {
            255 => "1".to_string(),
            0 => "0".to_string(),
            a => {
                let fraction = format!("{:.2}", f64::from(a) / 255.0);
                fraction.trim_end_matches('0').trim_end_matches('.').to_string()
            }
        };
        format!("rgba({},{},{},{alpha})", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_from_hex() {
        let c = Color::from_hex("#ff8800").unwrap();
        assert_eq!(c, Color::from_rgba(255, 136, 0, 255));
    }

    #[test]
    fn color_from_hex_no_hash() {
        let c = Color::from_hex("00ff00").unwrap();
        assert_eq!(c, Color::from_rgba(0, 255, 0, 255));
    }

    #[test]
    fn color_from_hex_invalid() {
        assert!(Color::from_hex("zzzzzz").is_none());
        assert!(Color::from_hex("#abc").is_none());
        assert!(Color::from_hex("#ff880080").is_none());
        assert!(Color::from_hex("").is_none());
        assert!(Color::from_hex("#ééé").is_none());
    }

    #[test]
    fn color_to_css_rgba_extremes() {
        assert_eq!(
            Color::from_rgba(255, 0, 0, 255).to_css_rgba(),
            "rgba(255,0,0,1)"
        );
        assert_eq!(Color::from_rgba(0, 0, 0, 0).to_css_rgba(), "rgba(0,0,0,0)");
    }

    #[test]
    fn color_to_css_rgba_fraction() {
        assert_eq!(
            Color::from_rgba(10, 20, 30, 128).to_css_rgba(),
            "rgba(10,20,30,0.5)"
        );
        assert_eq!(
            Color::from_rgba(10, 20, 30, 31).to_css_rgba(),
            "rgba(10,20,30,0.12)"
        );
    }

    #[test]
    fn color_serialization() {
        let c = Color::from_rgba(1, 2, 3, 4);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, r#"{"r":1,"g":2,"b":3,"a":4}"#);
    }
}
