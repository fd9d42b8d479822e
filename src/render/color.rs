//! Ball colors and the default palette

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Opaque sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` (case-insensitive, leading `#` optional)
    pub fn from_hex(s: &str) -> Result<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(Error::InvalidColor(s.to_string()));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| Error::InvalidColor(s.to_string()))
        };
        Ok(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// CSS fill style, e.g. `#ff99b7`
    pub fn to_css(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl TryFrom<String> for Color {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        Self::from_hex(&s)
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self {
        c.to_css()
    }
}

/// Default ball palette, cycled by creation ordinal
pub const PALETTE: [Color; 9] = [
    Color::rgb(0xff, 0x99, 0xb7), // pink
    Color::rgb(0xae, 0xc3, 0xff), // periwinkle
    Color::rgb(0xc6, 0xb9, 0xdf), // lavender
    Color::rgb(0xd0, 0xff, 0xa1), // lime
    Color::rgb(0xff, 0xff, 0xa6), // pale yellow
    Color::rgb(0x83, 0xd9, 0xdc), // teal
    Color::rgb(0xb0, 0xef, 0xef), // ice
    Color::rgb(0xe4, 0xa1, 0x99), // salmon
    Color::rgb(0xce, 0x89, 0x7b), // clay
];

/// Palette entry for a 1-based creation ordinal.
///
/// Ordinal `n` maps to `palette[n % len]`, so entry 0 is used by every
/// multiple of the palette length.
#[inline]
pub fn palette_color(palette: &[Color], ordinal: usize) -> Color {
    palette[ordinal % palette.len()]
}
