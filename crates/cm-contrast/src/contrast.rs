//! WCAG contrast ratios and their rating tiers.
//!
//! Two layers live here:
//!
//! - string contracts ([`relative_luminance`], [`contrast_ratio`]) that parse
//!   their inputs and surface malformed colors as [`ColorError`];
//! - infallible kernels ([`luminance`], [`ratio_from_luminance`]) that work on
//!   already-parsed values, so the matrix builder can compute each color's
//!   luminance once and reuse it for every pair.
//!
//! Rating tiers:
//!
//! | ratio       | tier  | meaning                                  |
//! |-------------|-------|------------------------------------------|
//! | `>= 7.0`    | AAA   | enhanced contrast for body text          |
//! | `>= 4.5`    | AA    | minimum contrast for body text           |
//! | `>= 3.0`    | G     | large text and graphical objects only    |
//! | otherwise   | NONE  | below every informative threshold        |

use std::fmt;

use cm_color::{ColorError, Rgb, srgb_to_linear};
use serde::Serialize;

/// Lowest ratio that earns [`Rating::Aaa`].
pub const AAA_MIN_RATIO: f64 = 7.0;

/// Lowest ratio that earns [`Rating::Aa`].
pub const AA_MIN_RATIO: f64 = 4.5;

/// Lowest ratio that earns [`Rating::G`].
pub const GRAPHICS_MIN_RATIO: f64 = 3.0;

/// Luminance above which a background reads as light.
pub const DARK_LUMINANCE_MAX: f64 = 0.5;

// ---------------------------------------------------------------------------
// Luminance
// ---------------------------------------------------------------------------

/// Relative luminance of a parsed color per WCAG 2.x.
///
/// Uses the standard sRGB linearization + weighted sum formula:
///   L = 0.2126 * `R_lin` + 0.7152 * `G_lin` + 0.0722 * `B_lin`
///
/// Returns a value in [0.0, 1.0] where 0 is black and 1 is white.
#[must_use]
pub fn luminance(color: Rgb) -> f64 {
    let (r, g, b) = color.to_srgb();
    let r_lin = srgb_to_linear(r);
    let g_lin = srgb_to_linear(g);
    let b_lin = srgb_to_linear(b);
    0.2126f64.mul_add(r_lin, 0.7152f64.mul_add(g_lin, 0.0722 * b_lin))
}

/// Relative luminance of a hex color string.
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorFormat`] if `color` is not `#RRGGBB`.
pub fn relative_luminance(color: &str) -> Result<f64, ColorError> {
    let rgb = Rgb::hex(color)?;
    let lum = luminance(rgb);
    tracing::trace!(%rgb, lum, "relative luminance");
    Ok(lum)
}

/// Whether a background of luminance `lum` needs light text to stay legible.
#[inline]
#[must_use]
pub fn is_dark(lum: f64) -> bool {
    lum <= DARK_LUMINANCE_MAX
}

// ---------------------------------------------------------------------------
// Contrast ratio
// ---------------------------------------------------------------------------

/// Contrast ratio between two luminances.
///
/// Returns a value in [1.0, 21.0]. The formula is:
///   (`L_lighter` + 0.05) / (`L_darker` + 0.05)
///
/// Argument order does not matter.
#[must_use]
pub fn ratio_from_luminance(la: f64, lb: f64) -> f64 {
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// WCAG contrast ratio between two hex color strings.
///
/// # Errors
///
/// Returns the [`ColorError`] of whichever side fails to parse first (`a`
/// before `b`).
pub fn contrast_ratio(a: &str, b: &str) -> Result<f64, ColorError> {
    let la = relative_luminance(a)?;
    let lb = relative_luminance(b)?;
    Ok(ratio_from_luminance(la, lb))
}

// ---------------------------------------------------------------------------
// Rating
// ---------------------------------------------------------------------------

/// Accessibility tier of a contrast ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Rating {
    #[serde(rename = "AAA")]
    Aaa,
    #[serde(rename = "AA")]
    Aa,
    /// Legible for large text and graphics only.
    #[serde(rename = "G")]
    G,
    /// Below 3:1; carries no label.
    #[serde(rename = "NONE")]
    None,
}

impl Rating {
    /// Classify a ratio. Lower bounds are inclusive; NaN rates [`Rating::None`].
    #[must_use]
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= AAA_MIN_RATIO {
            Self::Aaa
        } else if ratio >= AA_MIN_RATIO {
            Self::Aa
        } else if ratio >= GRAPHICS_MIN_RATIO {
            Self::G
        } else {
            Self::None
        }
    }

    /// Display label, or `None` when the ratio earns no tier.
    #[must_use]
    pub const fn label(self) -> Option<&'static str> {
        match self {
            Self::Aaa => Some("AAA"),
            Self::Aa => Some("AA"),
            Self::G => Some("G"),
            Self::None => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self.label() {
            Some(label) => label,
            None => "NONE",
        }
    }

    /// True for the tiers that pass for normal-size body text.
    #[must_use]
    pub const fn is_text_legible(self) -> bool {
        matches!(self, Self::Aaa | Self::Aa)
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a ratio into its [`Rating`] tier.
#[must_use]
pub fn rating(ratio: f64) -> Rating {
    Rating::from_ratio(ratio)
}

// ---------------------------------------------------------------------------
// Text tone
// ---------------------------------------------------------------------------

/// Foreground tone that stays legible on a given background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextTone {
    /// Black text, for light backgrounds.
    Dark,
    /// White text, for dark backgrounds.
    Light,
}

impl TextTone {
    #[must_use]
    pub const fn for_background(is_dark: bool) -> Self {
        if is_dark { Self::Light } else { Self::Dark }
    }

    #[must_use]
    pub const fn rgb(self) -> Rgb {
        match self {
            Self::Dark => Rgb::BLACK,
            Self::Light => Rgb::WHITE,
        }
    }

    /// Short CSS hex spelling (`#000` / `#FFF`).
    #[must_use]
    pub const fn css(self) -> &'static str {
        match self {
            Self::Dark => "#000",
            Self::Light => "#FFF",
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
