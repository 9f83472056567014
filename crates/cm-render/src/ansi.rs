// SPDX-License-Identifier: MIT
//
// Terminal rendering of a contrast matrix.
//
// Layout mirrors the HTML table: a header row of swatches, then one row per
// palette entry. Swatch headers are painted in their own color with the
// legible text tone; rating cells are painted on the row color in the
// column color, so each cell previews the exact pair it rates.
//
//   ┌────────┬────────────┬────────────┐
//   │        │ black      │ white      │
//   │ black  │            │ AAA 21.0:1 │
//   │ white  │ AAA 21.0:1 │            │
//   └────────┴────────────┴────────────┘   (borders not drawn)
//
// The escape writers below are pure functions over `impl Write`; with
// `color` off none of them are called and the output is plain text.

use std::io::{self, Write};

use cm_contrast::{ContrastMatrix, MatrixCell, Rating, Rgb, TextTone};
use unicode_width::UnicodeWidthStr;

use crate::RenderOptions;

bitflags::bitflags! {
    /// SGR text attributes used by the table.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    pub struct Attr: u8 {
        /// SGR 1 — increased intensity.
        const BOLD      = 1 << 0;
        /// SGR 2 — decreased intensity (faint).
        const DIM       = 1 << 1;
        /// SGR 4 — single underline.
        const UNDERLINE = 1 << 2;
    }
}

/// Gap between columns.
const GUTTER: &str = " ";

// ─── Escape writers ──────────────────────────────────────────────────────────

/// Reset all SGR attributes to terminal defaults (SGR 0).
#[inline]
pub fn reset(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[0m")
}

/// Set a 24-bit foreground color.
#[inline]
pub fn fg(w: &mut impl Write, color: Rgb) -> io::Result<()> {
    write!(w, "\x1b[38;2;{};{};{}m", color.r, color.g, color.b)
}

/// Set a 24-bit background color.
#[inline]
pub fn bg(w: &mut impl Write, color: Rgb) -> io::Result<()> {
    write!(w, "\x1b[48;2;{};{};{}m", color.r, color.g, color.b)
}

/// Emit SGR codes for text attributes as a single CSI sequence.
///
/// Does nothing if no attributes are set.
pub fn attrs(w: &mut impl Write, attr: Attr) -> io::Result<()> {
    if attr.is_empty() {
        return Ok(());
    }

    let codes: Vec<&str> = [
        (Attr::BOLD, "1"),
        (Attr::DIM, "2"),
        (Attr::UNDERLINE, "4"),
    ]
    .into_iter()
    .filter(|(flag, _)| attr.contains(*flag))
    .map(|(_, code)| code)
    .collect();

    write!(w, "\x1b[{}m", codes.join(";"))
}

// ─── Table ───────────────────────────────────────────────────────────────────

/// A styled run of text padded to a fixed display width.
struct Span<'a> {
    text: &'a str,
    colors: Option<(Rgb, Rgb)>,
    attr: Attr,
}

impl Span<'_> {
    fn write(&self, w: &mut impl Write, width: usize, color: bool) -> io::Result<()> {
        let styled = color && (self.colors.is_some() || !self.attr.is_empty());
        if styled {
            if let Some((background, foreground)) = self.colors {
                bg(w, background)?;
                fg(w, foreground)?;
            }
            attrs(w, self.attr)?;
        }

        let pad = width.saturating_sub(self.text.width());
        write!(w, " {}{} ", self.text, " ".repeat(pad))?;

        if styled {
            reset(w)?;
        }
        Ok(())
    }
}

/// Text shown inside a rating cell (empty for `Rating::None`).
fn cell_text(cell: &MatrixCell, options: &RenderOptions) -> String {
    match cell.rating.label() {
        None => String::new(),
        Some(label) if options.show_ratios && cell.rating.is_text_legible() => {
            format!("{label} {}:1", cell.display_ratio(options.precision))
        }
        Some(label) => label.to_owned(),
    }
}

/// Write the matrix as a terminal table.
///
/// # Errors
///
/// Propagates write errors from `w`.
pub fn write_ansi(
    w: &mut impl Write,
    matrix: &ContrastMatrix,
    options: &RenderOptions,
) -> io::Result<()> {
    let texts: Vec<Vec<String>> = matrix
        .rows()
        .iter()
        .map(|row| row.cells.iter().map(|c| cell_text(c, options)).collect())
        .collect();

    let name_width = matrix.columns().map(|(n, _, _)| n.width()).max().unwrap_or(0);

    // Column j is as wide as its header or its widest cell.
    let col_widths: Vec<usize> = matrix
        .columns()
        .enumerate()
        .map(|(j, (name, _, _))| {
            texts
                .iter()
                .map(|row| row[j].width())
                .fold(name.width(), usize::max)
        })
        .collect();

    // ── Header ──────────────────────────────────────────────
    Span { text: "", colors: None, attr: Attr::empty() }.write(w, name_width, options.color)?;
    for ((name, color, is_dark), width) in matrix.columns().zip(&col_widths) {
        w.write_all(GUTTER.as_bytes())?;
        Span {
            text: name,
            colors: Some((color, TextTone::for_background(is_dark).rgb())),
            attr: Attr::BOLD,
        }
        .write(w, *width, options.color)?;
    }
    writeln!(w)?;

    // ── Body ────────────────────────────────────────────────
    for (row, row_texts) in matrix.rows().iter().zip(&texts) {
        Span {
            text: &row.name,
            colors: Some((row.color, row.text_tone().rgb())),
            attr: Attr::BOLD,
        }
        .write(w, name_width, options.color)?;

        for ((cell, text), width) in row.cells.iter().zip(row_texts).zip(&col_widths) {
            w.write_all(GUTTER.as_bytes())?;
            let span = match cell.rating {
                Rating::None => Span { text, colors: None, attr: Attr::empty() },
                Rating::G => Span {
                    text,
                    colors: Some((cell.row_color, cell.column_color)),
                    attr: Attr::DIM,
                },
                Rating::Aa | Rating::Aaa => Span {
                    text,
                    colors: Some((cell.row_color, cell.column_color)),
                    attr: Attr::BOLD,
                },
            };
            span.write(w, *width, options.color)?;
        }
        writeln!(w)?;
    }

    Ok(())
}

/// Render the matrix as a terminal table string.
#[must_use]
pub fn render_ansi(matrix: &ContrastMatrix, options: &RenderOptions) -> String {
    let mut buf = Vec::with_capacity(matrix.len() * matrix.len() * 48 + 64);
    // Writing into a Vec cannot fail.
    let _ = write_ansi(&mut buf, matrix, options);
    String::from_utf8_lossy(&buf).into_owned()
}

// ─── Tests ───────────────────────────────────────────────────────────────────
