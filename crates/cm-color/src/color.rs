// SPDX-License-Identifier: MIT
//
// Fixed-width hex RGB colors.
//
// Palettes arrive as text, usually straight out of a theme's settings, so
// the only accepted spelling is the one every theme editor produces:
// `#RRGGBB`, case-insensitive, the `#` optional. Short (`#rgb`) and alpha
// (`#rrggbbaa`) forms are rejected rather than guessed at, because a
// silently misread channel would show up later as a wrong contrast ratio
// that nobody can trace back to the palette.
//
// Pipeline:
//
//   "#RRGGBB" → Rgb (u8 × 3) → sRGB (f64, 0–1) → linear light (f64, 0–1)

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

use crate::error::ColorError;

// ─── Rgb ─────────────────────────────────────────────────────────────────────

/// An opaque 8-bit sRGB color.
///
/// # Examples
///
/// ```
/// use cm_color::Rgb;
///
/// let teal = Rgb::hex("#008080").unwrap();
/// assert_eq!((teal.r, teal.g, teal.b), (0, 128, 128));
/// assert_eq!(teal.to_string(), "#008080");
///
/// assert!(Rgb::hex("#08f").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Pure black, `#000000`.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Pure white, `#ffffff`.
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RRGGBB` string (the `#` is optional, surrounding
    /// whitespace is ignored).
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidColorFormat`] unless the input holds
    /// exactly six hexadecimal digits.
    pub fn hex(s: &str) -> Result<Self, ColorError> {
        parse_hex(s)
    }

    /// Channels as a tuple, in `(r, g, b)` order.
    #[inline]
    #[must_use]
    pub const fn channels(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Channels normalized to `0.0..=1.0` (`v / 255`).
    #[must_use]
    pub fn to_srgb(self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }

    /// Lowercase `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

// ─── Serde ───────────────────────────────────────────────────────────────────
//
// Colors travel as their hex spelling so exported matrices stay readable and
// feed straight back into a palette file.

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct HexVisitor;

        impl Visitor<'_> for HexVisitor {
            type Value = Rgb;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a #RRGGBB color string")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Rgb, E> {
                parse_hex(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(HexVisitor)
    }
}

// ─── Converter ───────────────────────────────────────────────────────────────

/// Convert a hex color string into its `(r, g, b)` byte channels.
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorFormat`] for anything that isn't a
/// six-digit hex triplet.
pub fn to_rgb(color: &str) -> Result<(u8, u8, u8), ColorError> {
    parse_hex(color).map(Rgb::channels)
}

// ─── sRGB Transfer ───────────────────────────────────────────────────────────
//
// The WCAG 2.x relative-luminance definition uses 0.03928 as the breakpoint
// of the piecewise sRGB curve (IEC 61966-2-1 says 0.04045; no 8-bit value
// falls between the two, so results agree for every hex color).

/// Breakpoint between the linear and power segments of the sRGB curve.
pub const SRGB_LINEAR_BREAKPOINT: f64 = 0.039_28;

/// Convert a single sRGB component (0.0–1.0) to linear light (remove gamma).
#[inline]
#[must_use]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= SRGB_LINEAR_BREAKPOINT {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

// ─── Hex Parsing ─────────────────────────────────────────────────────────────

fn parse_hex(input: &str) -> Result<Rgb, ColorError> {
    let trimmed = input.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
    let bytes = digits.as_bytes();

    if bytes.is_empty() {
        return Err(ColorError::invalid(input, "empty color"));
    }
    if bytes.len() != 6 {
        return Err(ColorError::invalid(input, "expected exactly 6 hex digits"));
    }

    let channel = |i: usize| {
        parse_hex_byte(bytes[i], bytes[i + 1])
            .ok_or_else(|| ColorError::invalid(input, "contains a non-hex digit"))
    };

    Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
const fn parse_hex_byte(hi: u8, lo: u8) -> Option<u8> {
    match (parse_hex_digit(hi), parse_hex_digit(lo)) {
        (Some(hi), Some(lo)) => Some(hi << 4 | lo),
        _ => None,
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
