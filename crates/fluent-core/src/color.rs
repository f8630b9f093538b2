//! Color primitives
//!
//! [`Color`] is a plain RGBA value. [`FluentColor`] bundles the light and
//! dark variants of one semantic color and picks one for a [`ThemeMode`].

use crate::theme::{Result, ThemeError, ThemeMode};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Color
// =============================================================================

/// An sRGB color with alpha
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha channel (255 = opaque)
    pub a: u8,
}

impl Color {
    /// Fully transparent black
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);
    /// Opaque white
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
    /// Opaque black
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);

    /// Create an opaque color from its channels
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    /// Create a color from its channels including alpha
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from a packed `0xRRGGBB` value
    pub const fn from_rgb_u32(packed: u32) -> Self {
        Self::rgb(
            ((packed >> 16) & 0xFF) as u8,
            ((packed >> 8) & 0xFF) as u8,
            (packed & 0xFF) as u8,
        )
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA` (the leading `#` is optional)
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.trim().trim_start_matches('#');
        if !(digits.len() == 6 || digits.len() == 8)
            || !digits.chars().all(|c| c.is_ascii_hexdigit())
        {
            return Err(ThemeError::InvalidColor(hex.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| ThemeError::InvalidColor(hex.to_string()))
        };

        let r = channel(0..2)?;
        let g = channel(2..4)?;
        let b = channel(4..6)?;
        let a = if digits.len() == 8 { channel(6..8)? } else { 0xFF };
        Ok(Self { r, g, b, a })
    }

    /// Hex representation; the alpha pair is only emitted when not opaque
    pub fn to_hex(&self) -> String {
        if self.a == 0xFF {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }

    /// Same color with a different alpha
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Whether the color draws nothing
    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::TRANSPARENT
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self> {
        Color::from_hex(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Color::from_hex(&raw).map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// FluentColor
// =============================================================================

/// A semantic color carrying both theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FluentColor {
    /// Variant used in light mode
    pub light: Color,
    /// Variant used in dark mode
    pub dark: Color,
}

impl FluentColor {
    /// Pair a light and a dark variant
    pub const fn new(light: Color, dark: Color) -> Self {
        Self { light, dark }
    }

    /// One color for both modes
    pub const fn uniform(color: Color) -> Self {
        Self { light: color, dark: color }
    }

    /// Pick the variant for `mode`
    pub fn value(&self, mode: ThemeMode) -> Color {
        match mode {
            ThemeMode::Light => self.light,
            ThemeMode::Dark => self.dark,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        assert_eq!(Color::from_hex("#FFFFFF").unwrap(), Color::WHITE);
        assert_eq!(Color::from_hex("0F6CBD").unwrap(), Color::rgb(0x0F, 0x6C, 0xBD));
        assert_eq!(
            Color::from_hex("#00000080").unwrap(),
            Color::rgba(0, 0, 0, 0x80)
        );
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(matches!(Color::from_hex("#FFF"), Err(ThemeError::InvalidColor(_))));
        assert!(matches!(Color::from_hex("#GGGGGG"), Err(ThemeError::InvalidColor(_))));
        assert!(matches!(Color::from_hex(""), Err(ThemeError::InvalidColor(_))));
        assert!(matches!(Color::from_hex("#+F+F+F"), Err(ThemeError::InvalidColor(_))));
        assert!(matches!(Color::from_hex("#-1-1-1"), Err(ThemeError::InvalidColor(_))));
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(Color::rgb(255, 0, 128).to_hex(), "#FF0080");
        assert_eq!(Color::TRANSPARENT.to_hex(), "#00000000");
        assert_eq!(Color::from_rgb_u32(0x242424).to_string(), "#242424");
    }

    #[test]
    fn test_with_alpha() {
        let c = Color::WHITE.with_alpha(0);
        assert!(c.is_transparent());
        assert_eq!(c.r, 0xFF);
    }

    #[test]
    fn test_fluent_color_value() {
        let color = FluentColor::new(Color::WHITE, Color::BLACK);
        assert_eq!(color.value(ThemeMode::Light), Color::WHITE);
        assert_eq!(color.value(ThemeMode::Dark), Color::BLACK);
        assert_eq!(FluentColor::uniform(Color::WHITE).value(ThemeMode::Dark), Color::WHITE);
    }

    #[test]
    fn test_color_serialization() {
        let json = serde_json::to_string(&Color::rgb(0x0F, 0x6C, 0xBD)).unwrap();
        assert_eq!(json, "\"#0F6CBD\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Color::rgb(0x0F, 0x6C, 0xBD));
        assert!(serde_json::from_str::<Color>("\"nope\"").is_err());
    }
}
