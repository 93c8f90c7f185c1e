//! Paintable color
//!
//! Every fill on the chart surface uses a single solid RGBA color.
//! Colors are written in settings files as `#rrggbb` or `#rrggbbaa`.

use std::fmt;
use std::str::FromStr;

use image::Rgba;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ChartError;

/// A solid RGBA8 color
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Color(pub Rgba<u8>);

impl Color {
    /// Default chart background
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    /// Default bar color (magenta)
    pub const MAGENTA: Color = Color::rgb(0xe8, 0x00, 0x8a);

    /// Opaque color from red, green and blue
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self(Rgba([r, g, b, 0xff]))
    }

    /// Color with explicit alpha
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(Rgba([r, g, b, a]))
    }

    pub fn r(&self) -> u8 {
        self.0 .0[0]
    }

    pub fn g(&self) -> u8 {
        self.0 .0[1]
    }

    pub fn b(&self) -> u8 {
        self.0 .0[2]
    }

    pub fn a(&self) -> u8 {
        self.0 .0[3]
    }

    /// Raw channel bytes in RGBA order
    pub fn to_array(self) -> [u8; 4] {
        self.0 .0
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl From<Rgba<u8>> for Color {
    fn from(value: Rgba<u8>) -> Self {
        Self(value)
    }
}

impl From<Color> for Rgba<u8> {
    fn from(value: Color) -> Self {
        value.0
    }
}

impl FromStr for Color {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ChartError::InvalidColor(s.to_string());

        let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !hex.is_ascii() || (hex.len() != 6 && hex.len() != 8) {
            return Err(invalid());
        }

        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());

        let alpha = if hex.len() == 8 { channel(6)? } else { 0xff };
        Ok(Self::rgba(channel(0)?, channel(2)?, channel(4)?, alpha))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r(), self.g(), self.b())?;
        if self.a() != 0xff {
            write!(f, "{:02x}", self.a())?;
        }
        Ok(())
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
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rgb() {
        let color: Color = "#e8008a".parse().unwrap();
        assert_eq!(color, Color::MAGENTA);
        assert_eq!(color.a(), 0xff);
    }

    #[test]
    fn test_parse_rgba() {
        let color: Color = "#10203040".parse().unwrap();
        assert_eq!(color.to_array(), [0x10, 0x20, 0x30, 0x40]);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!("e8008a".parse::<Color>().is_err());
        assert!("#e800".parse::<Color>().is_err());
        assert!("#zz008a".parse::<Color>().is_err());
        assert!("#ééé".parse::<Color>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Color::MAGENTA.to_string(), "#e8008a");
        assert_eq!(Color::rgba(1, 2, 3, 4).to_string(), "#01020304");
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&Color::BLACK).unwrap();
        assert_eq!(json, "\"#000000\"");

        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Color::BLACK);
    }
}
