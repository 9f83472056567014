// SPDX-License-Identifier: MIT
//
// HTML accessibility matrix.
//
// Markup contract (class names and custom properties are what the
// companion stylesheet and clipboard script key off):
//
//   div.accessibility-colour-checker
//     [Show Ratings toggle]
//     table.colour-matrix
//       tr: th "Colour", th per column  (swatch header)
//       tr per row: th (swatch header), td.rating-cell per column
//
// Swatch headers carry `data-colour="var(--NAME)"` for copy-on-click and set
// `--bg-colour` / `--text-colour` inline. Rating cells set the row color as
// background and the column color as text so the cell previews the pair.
//
// Per tier:
//
//   NONE     → empty td.rating-cell
//   G        → td.rating-cell.not-text, label only
//   AA, AAA  → label + "R.R : 1" (unless ratios are hidden)

use std::sync::LazyLock;

use cm_contrast::{ContrastMatrix, MatrixCell, Rating, Rgb, TextTone};
use regex::Regex;

use crate::RenderOptions;

const TOGGLE: &str = concat!(
    "Show Ratings",
    r#"<input type="checkbox" id="toggleRatings" name="toggleRatings"/>"#,
    r#"<label class="toggle-button" for="toggleRatings"><span>Show Ratings</span></label>"#,
);

/// Characters that can't appear in a CSS custom property name unescaped.
static NON_IDENT: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_-]").ok());

/// Render the matrix as an HTML fragment.
#[must_use]
pub fn render_html(matrix: &ContrastMatrix, options: &RenderOptions) -> String {
    let mut out = String::with_capacity(256 + matrix.len() * matrix.len() * 160);

    out.push_str(r#"<div class="accessibility-colour-checker">"#);
    if options.show_toggle {
        out.push_str(TOGGLE);
    }
    out.push_str(r#"<table class="colour-matrix">"#);

    // ── Header ──────────────────────────────────────────────
    out.push_str("<tr><th>Colour</th>");
    for (name, color, is_dark) in matrix.columns() {
        push_swatch_header(&mut out, name, color, TextTone::for_background(is_dark), false);
    }
    out.push_str("</tr>");

    // ── Body ────────────────────────────────────────────────
    for row in matrix.rows() {
        out.push_str("<tr>");
        push_swatch_header(&mut out, &row.name, row.color, row.text_tone(), true);
        for cell in &row.cells {
            push_cell(&mut out, cell, options);
        }
        out.push_str("</tr>");
    }

    out.push_str("</table></div>");
    out
}

fn push_swatch_header(out: &mut String, name: &str, color: Rgb, tone: TextTone, row: bool) {
    // Row headers carry a bare `tooltip` attribute as well.
    let tooltip = if row { " tooltip" } else { "" };
    out.push_str(&format!(
        concat!(
            r#"<th{tooltip} data-tooltip="Copy to clipboard" data-colour="var(--{ident})" "#,
            r#"style="--bg-colour:{color}; --text-colour:{tone};">"#,
            r#"<span class="colour-name">{name}</span><br>"#,
            r#"<span class="colour-value">{color}</span></th>"#,
        ),
        tooltip = tooltip,
        ident = escape(&css_ident(name)),
        color = color,
        tone = tone.css(),
        name = escape(name),
    ));
}

fn push_cell(out: &mut String, cell: &MatrixCell, options: &RenderOptions) {
    let Some(label) = cell.rating.label() else {
        out.push_str(r#"<td class="rating-cell"></td>"#);
        return;
    };

    let class = if cell.rating == Rating::G {
        "rating-cell not-text"
    } else {
        "rating-cell"
    };

    out.push_str(&format!(
        r#"<td class="{class}" style="--bg-colour:{bg}; --text-colour:{fg};"><span class="rating rating-{label}">{label}</span>"#,
        bg = cell.row_color,
        fg = cell.column_color,
    ));

    if options.show_ratios && cell.rating.is_text_legible() {
        out.push_str(&format!(
            r#"<span class="colours"><span>{}</span> : 1</span>"#,
            cell.display_ratio(options.precision)
        ));
    }

    out.push_str("</td>");
}

/// Reduce a palette name to something usable after `--` in `var(...)`.
fn css_ident(name: &str) -> String {
    NON_IDENT.as_ref().map_or_else(
        || name.to_owned(),
        |re| re.replace_all(name, "-").into_owned(),
    )
}

/// Escape HTML special characters
fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use cm_contrast::{Palette, build_matrix};
    use pretty_assertions::assert_eq;

    fn black_white() -> ContrastMatrix {
        build_matrix(&Palette::new().with("black", "#000000").with("white", "#FFFFFF")).unwrap()
    }

    #[test]
    fn wrapper_and_toggle() {
        let html = render_html(&black_white(), &RenderOptions::default());
        assert!(html.starts_with(r#"<div class="accessibility-colour-checker">Show Ratings<input"#));
        assert!(html.ends_with("</table></div>"));
    }

    #[test]
    fn toggle_can_be_hidden() {
        let opts = RenderOptions {
            show_toggle: false,
            ..RenderOptions::default()
        };
        let html = render_html(&black_white(), &opts);
        assert!(!html.contains("toggleRatings"));
    }

    #[test]
    fn header_swatch_markup() {
        let html = render_html(&black_white(), &RenderOptions::default());
        assert!(html.contains(concat!(
            r#"<th data-tooltip="Copy to clipboard" data-colour="var(--black)" "#,
            r#"style="--bg-colour:#000000; --text-colour:#FFF;">"#,
            r#"<span class="colour-name">black</span><br><span class="colour-value">#000000</span></th>"#,
        )));
        assert!(html.contains(r#"<th tooltip data-tooltip="Copy to clipboard" data-colour="var(--white)" style="--bg-colour:#ffffff; --text-colour:#000;">"#));
    }

    #[test]
    fn aaa_cell_shows_ratio() {
        let html = render_html(&black_white(), &RenderOptions::default());
        assert!(html.contains(concat!(
            r#"<td class="rating-cell" style="--bg-colour:#000000; --text-colour:#ffffff;">"#,
            r#"<span class="rating rating-AAA">AAA</span>"#,
            r#"<span class="colours"><span>21.0</span> : 1</span></td>"#,
        )));
    }

    #[test]
    fn none_cells_are_empty() {
        let html = render_html(&black_white(), &RenderOptions::default());
        assert_eq!(html.matches(r#"<td class="rating-cell"></td>"#).count(), 2);
    }

    #[test]
    fn graphics_tier_has_no_ratio() {
        // Red on white is ~4.0:1 — G.
        let matrix =
            build_matrix(&Palette::new().with("red", "#ff0000").with("white", "#ffffff")).unwrap();
        let html = render_html(&matrix, &RenderOptions::default());
        assert!(html.contains(concat!(
            r#"<td class="rating-cell not-text" style="--bg-colour:#ff0000; --text-colour:#ffffff;">"#,
            r#"<span class="rating rating-G">G</span></td>"#,
        )));
        assert!(!html.contains("colours"));
    }

    #[test]
    fn ratios_can_be_hidden() {
        let opts = RenderOptions {
            show_ratios: false,
            ..RenderOptions::default()
        };
        let html = render_html(&black_white(), &opts);
        assert!(html.contains("rating-AAA"));
        assert!(!html.contains(r#"class="colours""#));
    }

    #[test]
    fn precision_is_respected() {
        let opts = RenderOptions {
            precision: 2,
            ..RenderOptions::default()
        };
        let html = render_html(&black_white(), &opts);
        assert!(html.contains("<span>21.00</span> : 1"));
    }

    #[test]
    fn names_are_escaped() {
        let matrix = build_matrix(&Palette::new().with("<b>\"x\" & y", "#123456")).unwrap();
        let html = render_html(&matrix, &RenderOptions::default());
        assert!(html.contains("&lt;b&gt;&quot;x&quot; &amp; y"));
        assert!(html.contains("var(---b--x----y)"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn css_ident_keeps_valid_names() {
        assert_eq!(css_ident("accent-2_dark"), "accent-2_dark");
        assert_eq!(css_ident("Base Color"), "Base-Color");
    }

    #[test]
    fn empty_matrix_is_header_only() {
        let html = render_html(&ContrastMatrix::default(), &RenderOptions::default());
        assert!(html.contains(r#"<table class="colour-matrix"><tr><th>Colour</th></tr></table>"#));
    }
}
