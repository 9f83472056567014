//! # cm-contrast — WCAG contrast analysis for named palettes
//!
//! Turns a palette of named hex colors into a pairwise accessibility matrix.
//! Everything here is a pure function of its inputs; presentation lives in
//! `cm-render`.
//!
//! # Architecture
//!
//! ```text
//! Palette (name → "#RRGGBB", ordered)
//!     │
//!     ▼
//! cm_color:    parse hex → Rgb           (malformed input → ColorError)
//!     │
//!     ▼
//! contrast.rs: relative luminance, contrast ratio, Rating tier
//!     │
//!     ▼
//! matrix.rs:   n × n ContrastMatrix in palette order
//! ```
//!
//! # Example
//!
//! ```
//! use cm_contrast::{Palette, Rating, build_matrix};
//!
//! let palette = Palette::new().with("ink", "#1a1a1a").with("paper", "#fafafa");
//! let matrix = build_matrix(&palette)?;
//!
//! let cell = matrix.cell("ink", "paper").unwrap();
//! assert_eq!(cell.rating, Rating::Aaa);
//! # Ok::<(), cm_contrast::MatrixError>(())
//! ```

pub mod contrast;
pub mod matrix;
pub mod palette;

pub use cm_color::{ColorError, Rgb};
pub use contrast::{Rating, TextTone, contrast_ratio, rating, relative_luminance};
pub use matrix::{ContrastMatrix, MatrixCell, MatrixError, MatrixRow, build_matrix};
pub use palette::{Palette, PaletteError, Swatch};
