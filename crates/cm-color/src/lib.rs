// SPDX-License-Identifier: MIT
//
// cm-color — the color layer of contrast-matrix.
//
// Parses fixed-width `#RRGGBB` strings into 8-bit sRGB triples and exposes
// the sRGB transfer function used by the luminance math upstream. Nothing
// here knows about contrast or palettes; it only turns text into channels
// and refuses text that isn't a color.

pub mod color;
pub mod error;

pub use color::{Rgb, srgb_to_linear, to_rgb};
pub use error::ColorError;
