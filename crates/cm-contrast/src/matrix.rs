//! Pairwise contrast matrix over a palette.
//!
//! Rows and columns both follow palette order; every ordered pair is
//! present, the diagonal included. Each color is parsed and its luminance
//! computed once up front, then every cell is a single ratio + rating.
//!
//! ```text
//!            col 0      col 1      …
//! row 0   (a0, a0)   (a0, a1)
//! row 1   (a1, a0)   (a1, a1)
//! ```

use cm_color::{ColorError, Rgb};
use serde::Serialize;
use thiserror::Error;

use crate::contrast::{Rating, TextTone, is_dark, luminance, ratio_from_luminance};
use crate::palette::Palette;

/// A palette entry whose color could not be used.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    #[error("palette entry {name:?}: {source}")]
    InvalidSwatch {
        name: String,
        #[source]
        source: ColorError,
    },
}

// ---------------------------------------------------------------------------
// Cells and rows
// ---------------------------------------------------------------------------

/// Contrast of one ordered (row, column) pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatrixCell {
    /// Name of the column entry.
    pub column: String,
    /// Background: the row color.
    pub row_color: Rgb,
    /// Foreground: the column color.
    pub column_color: Rgb,
    pub ratio: f64,
    pub rating: Rating,
}

impl MatrixCell {
    /// The ratio with `precision` decimals, e.g. `"4.5"`.
    #[must_use]
    pub fn display_ratio(&self, precision: usize) -> String {
        format!("{:.precision$}", self.ratio)
    }
}

/// One palette entry and its contrast against every column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatrixRow {
    pub name: String,
    pub color: Rgb,
    pub luminance: f64,
    /// `luminance <= 0.5`: light text reads better on this background.
    pub is_dark: bool,
    pub cells: Vec<MatrixCell>,
}

impl MatrixRow {
    /// Foreground tone to label this color with.
    #[must_use]
    pub const fn text_tone(&self) -> TextTone {
        TextTone::for_background(self.is_dark)
    }
}

// ---------------------------------------------------------------------------
// ContrastMatrix
// ---------------------------------------------------------------------------

/// The complete n × n contrast matrix of a palette.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ContrastMatrix {
    rows: Vec<MatrixRow>,
}

impl ContrastMatrix {
    #[must_use]
    pub fn rows(&self) -> &[MatrixRow] {
        &self.rows
    }

    #[must_use]
    pub fn into_rows(self) -> Vec<MatrixRow> {
        self.rows
    }

    /// Number of rows (equal to the number of columns).
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column headers in order: `(name, color, is_dark)`.
    pub fn columns(&self) -> impl Iterator<Item = (&str, Rgb, bool)> {
        self.rows.iter().map(|r| (r.name.as_str(), r.color, r.is_dark))
    }

    /// First row called `name`.
    #[must_use]
    pub fn row(&self, name: &str) -> Option<&MatrixRow> {
        self.rows.iter().find(|r| r.name == name)
    }

    /// Cell at (`row`, `column`), by name. Duplicate names resolve to the
    /// first occurrence.
    #[must_use]
    pub fn cell(&self, row: &str, column: &str) -> Option<&MatrixCell> {
        let col = self.rows.iter().position(|r| r.name == column)?;
        self.row(row)?.cells.get(col)
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// A parsed palette entry with its luminance cached.
struct Resolved<'a> {
    name: &'a str,
    color: Rgb,
    luminance: f64,
}

/// Compute the contrast matrix of `palette`.
///
/// An empty palette yields an empty matrix.
///
/// # Errors
///
/// Returns [`MatrixError::InvalidSwatch`] for the first entry (in palette
/// order) whose color is not a valid `#RRGGBB` string.
pub fn build_matrix(palette: &Palette) -> Result<ContrastMatrix, MatrixError> {
    let resolved = palette
        .iter()
        .map(|swatch| {
            let color = Rgb::hex(&swatch.color).map_err(|source| MatrixError::InvalidSwatch {
                name: swatch.name.clone(),
                source,
            })?;
            Ok::<_, MatrixError>(Resolved {
                name: &swatch.name,
                color,
                luminance: luminance(color),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let rows = resolved
        .iter()
        .map(|row| MatrixRow {
            name: row.name.to_owned(),
            color: row.color,
            luminance: row.luminance,
            is_dark: is_dark(row.luminance),
            cells: resolved
                .iter()
                .map(|col| {
                    let ratio = ratio_from_luminance(row.luminance, col.luminance);
                    MatrixCell {
                        column: col.name.to_owned(),
                        row_color: row.color,
                        column_color: col.color,
                        ratio,
                        rating: Rating::from_ratio(ratio),
                    }
                })
                .collect(),
        })
        .collect::<Vec<_>>();

    tracing::debug!(size = rows.len(), "built contrast matrix");
    Ok(ContrastMatrix { rows })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
