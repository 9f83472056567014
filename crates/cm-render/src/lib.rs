// SPDX-License-Identifier: MIT
//
// cm-render — presentation for contrast matrices.
//
// Every renderer takes a finished `ContrastMatrix` and decides only how it
// looks: which tiers get a label, which get a ratio, what text tone sits on
// each swatch. None of them compute contrast; that already happened in
// cm-contrast, so the same matrix can be rendered, exported, or tested
// without going through any of this.

pub mod ansi;
pub mod html;

use cm_contrast::ContrastMatrix;

pub use ansi::render_ansi;
pub use html::render_html;

/// Output flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// Standalone HTML table (`div.accessibility-colour-checker`).
    Html,
    /// Terminal table, 24-bit color escapes unless disabled.
    #[default]
    Ansi,
    /// The matrix itself as pretty-printed JSON.
    Json,
}

/// Knobs shared by the renderers. JSON ignores all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Print `R.R : 1` next to AA/AAA labels.
    pub show_ratios: bool,
    /// HTML only: emit the "Show Ratings" checkbox.
    pub show_toggle: bool,
    /// Decimals in printed ratios.
    pub precision: usize,
    /// Terminal only: emit color escapes.
    pub color: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_ratios: true,
            show_toggle: true,
            precision: 1,
            color: true,
        }
    }
}

/// Serialize the matrix as pretty JSON.
///
/// # Errors
///
/// Propagates `serde_json` failures (not expected for well-formed matrices).
pub fn render_json(matrix: &ContrastMatrix) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(matrix)
}

/// Render `matrix` in the requested format.
///
/// # Errors
///
/// Only [`Format::Json`] can fail.
pub fn render(
    matrix: &ContrastMatrix,
    format: Format,
    options: &RenderOptions,
) -> Result<String, serde_json::Error> {
    match format {
        Format::Html => Ok(render_html(matrix, options)),
        Format::Ansi => Ok(render_ansi(matrix, options)),
        Format::Json => render_json(matrix),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cm_contrast::{Palette, build_matrix};

    #[test]
    fn json_is_row_array() {
        let matrix = build_matrix(&Palette::new().with("a", "#000000")).unwrap();
        let text = render(&matrix, Format::Json, &RenderOptions::default()).unwrap();
        assert!(text.trim_start().starts_with('['));
        assert!(text.contains("\"rating\": \"NONE\""));
    }

    #[test]
    fn empty_matrix_renders_everywhere() {
        let matrix = build_matrix(&Palette::new()).unwrap();
        let opts = RenderOptions::default();
        assert_eq!(render(&matrix, Format::Json, &opts).unwrap(), "[]");
        assert!(render(&matrix, Format::Html, &opts).unwrap().contains("colour-matrix"));
        assert!(render(&matrix, Format::Ansi, &opts).is_ok());
    }
}
