//! Color value parsing for style groups.
//!
//! Supports the color formats that appear in template definitions and
//! user settings:
//!
//! - RGB hex: `"#ff6b35"` or `"#fff"` (3 or 6 digit)
//! - A small set of named web colors: `white`, `black`, `gray`, etc.
//!
//! Colors serialize back to lowercase 6-digit hex, so a round trip through
//! a template file is stable.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Error returned when a color string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color '{0}'")]
pub struct ColorParseError(pub String);

/// A true-color RGB value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);

    /// Creates a color from its RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a hex color code (without the `#` prefix).
    fn parse_hex(hex: &str) -> Result<Self, ColorParseError> {
        let invalid = || ColorParseError(format!("#{hex}"));
        // Byte-indexed slicing below requires char boundaries everywhere.
        if !hex.is_ascii() {
            return Err(invalid());
        }
        match hex.len() {
            // 3-digit hex: #rgb -> #rrggbb
            3 => {
                let r = u8::from_str_radix(&hex[0..1], 16).map_err(|_| invalid())? * 17;
                let g = u8::from_str_radix(&hex[1..2], 16).map_err(|_| invalid())? * 17;
                let b = u8::from_str_radix(&hex[2..3], 16).map_err(|_| invalid())? * 17;
                Ok(Color::rgb(r, g, b))
            }
            // 6-digit hex: #rrggbb
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| invalid())?;
                let g = u8::from_str_radix(&hex[2..4], 16).map_err(|_| invalid())?;
                let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| invalid())?;
                Ok(Color::rgb(r, g, b))
            }
            _ => Err(invalid()),
        }
    }

    /// Parses a named web color.
    fn parse_named(name: &str) -> Result<Self, ColorParseError> {
        match name.to_ascii_lowercase().as_str() {
            "black" => Ok(Color::rgb(0x00, 0x00, 0x00)),
            "white" => Ok(Color::rgb(0xff, 0xff, 0xff)),
            "gray" | "grey" => Ok(Color::rgb(0x80, 0x80, 0x80)),
            "silver" => Ok(Color::rgb(0xc0, 0xc0, 0xc0)),
            "red" => Ok(Color::rgb(0xff, 0x00, 0x00)),
            "green" => Ok(Color::rgb(0x00, 0x80, 0x00)),
            "blue" => Ok(Color::rgb(0x00, 0x00, 0xff)),
            "yellow" => Ok(Color::rgb(0xff, 0xff, 0x00)),
            "orange" => Ok(Color::rgb(0xff, 0xa5, 0x00)),
            "purple" => Ok(Color::rgb(0x80, 0x00, 0x80)),
            "navy" => Ok(Color::rgb(0x00, 0x00, 0x80)),
            "teal" => Ok(Color::rgb(0x00, 0x80, 0x80)),
            _ => Err(ColorParseError(name.to_string())),
        }
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            return Self::parse_hex(hex);
        }
        Self::parse_named(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_six_digit_hex() {
        let color: Color = "#ff6b35".parse().unwrap();
        assert_eq!(color, Color::rgb(0xff, 0x6b, 0x35));
    }

    #[test]
    fn test_parse_three_digit_hex_expands() {
        let color: Color = "#fff".parse().unwrap();
        assert_eq!(color, Color::WHITE);

        let color: Color = "#f00".parse().unwrap();
        assert_eq!(color, Color::rgb(0xff, 0x00, 0x00));
    }

    #[test]
    fn test_parse_named() {
        assert_eq!("black".parse::<Color>().unwrap(), Color::BLACK);
        assert_eq!("Navy".parse::<Color>().unwrap(), Color::rgb(0, 0, 0x80));
    }

    #[test]
    fn test_parse_invalid() {
        assert!("#ff".parse::<Color>().is_err());
        assert!("#ggg".parse::<Color>().is_err());
        assert!("chartreuse-ish".parse::<Color>().is_err());
        assert!("".parse::<Color>().is_err());
    }

    // Multibyte chars must not panic the byte-indexed hex slicing.
    #[test]
    fn test_parse_non_ascii_hex_is_an_error() {
        assert!("#\u{e9}5".parse::<Color>().is_err());
        assert!("#ééé".parse::<Color>().is_err());
        assert!("#ffèb35".parse::<Color>().is_err());
    }

    #[test]
    fn test_display_round_trip() {
        let color: Color = "#2D3748".parse().unwrap();
        assert_eq!(color.to_string(), "#2d3748");
        assert_eq!(color.to_string().parse::<Color>().unwrap(), color);
    }

    #[test]
    fn test_serde_as_string() {
        let color: Color = serde_yaml::from_str("\"#f7fafc\"").unwrap();
        assert_eq!(color, Color::rgb(0xf7, 0xfa, 0xfc));

        let yaml = serde_yaml::to_string(&color).unwrap();
        assert_eq!(yaml.trim(), "'#f7fafc'");
    }
}
