//! Color values
//!
//! Lexer colors are full 32-bit RGBA values. Persisted documents and the
//! configuration file carry them as hex strings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StyleError;

/// An 8-bit-per-channel color with alpha
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);

    /// Opaque color from channels
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Opaque color from a `0xRRGGBB` literal
    pub const fn hex(rgb: u32) -> Self {
        Self::rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    /// Color from a packed `0xAARRGGBB` value
    pub const fn from_argb(argb: u32) -> Self {
        Self {
            a: (argb >> 24) as u8,
            r: (argb >> 16) as u8,
            g: (argb >> 8) as u8,
            b: argb as u8,
        }
    }

    /// Pack as `0xAARRGGBB`
    pub const fn to_argb(self) -> u32 {
        (self.a as u32) << 24 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// Eight upper-case hex digits, `AARRGGBB`
    pub fn to_argb_hex(self) -> String {
        format!("{:08X}", self.to_argb())
    }

    /// Parse `#RRGGBB`, `#AARRGGBB` or a bare `AARRGGBB`
    pub fn parse_hex(s: &str) -> Result<Self, StyleError> {
        let digits = s.trim();
        let digits = digits.strip_prefix('#').unwrap_or(digits);
        let digits = digits
            .strip_prefix("0x")
            .or_else(|| digits.strip_prefix("0X"))
            .unwrap_or(digits);
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(StyleError::Parse(format!("invalid color '{}'", s)));
        }
        let value = u32::from_str_radix(digits, 16)
            .map_err(|_| StyleError::Parse(format!("invalid color '{}'", s)))?;
        match digits.len() {
            6 => Ok(Self::hex(value)),
            8 => Ok(Self::from_argb(value)),
            _ => Err(StyleError::Parse(format!("invalid color '{}'", s))),
        }
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{}", self.to_argb_hex())
        }
    }
}

impl FromStr for Rgba {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hex(s)
    }
}

impl TryFrom<String> for Rgba {
    type Error = StyleError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse_hex(&s)
    }
}

impl From<Rgba> for String {
    fn from(color: Rgba) -> Self {
        color.to_string()
    }
}
