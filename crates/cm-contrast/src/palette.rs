//! Named, ordered color palettes.
//!
//! A palette is owned by the caller and read in insertion order; that order
//! becomes both the row and column order of the contrast matrix. Colors are
//! kept as the caller's raw text and only parsed when a matrix is built, so
//! a bad entry is reported against its name.

use std::collections::HashSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One named entry of a [`Palette`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Swatch {
    pub name: String,
    pub color: String,
}

impl Swatch {
    #[must_use]
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
        }
    }
}

/// Failure to read a palette document.
#[derive(Debug, Error)]
pub enum PaletteError {
    #[error("malformed palette: {0}")]
    Json(#[from] serde_json::Error),
}

/// Ordered sequence of named colors.
///
/// Names are expected to be unique but this is not enforced; duplicates
/// simply produce extra rows and columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "PaletteDocument")]
pub struct Palette {
    swatches: Vec<Swatch>,
}

impl Palette {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            swatches: Vec::new(),
        }
    }

    /// Append an entry at the end.
    pub fn push(&mut self, name: impl Into<String>, color: impl Into<String>) {
        self.swatches.push(Swatch::new(name, color));
    }

    /// Builder form of [`push`](Self::push).
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, color: impl Into<String>) -> Self {
        self.push(name, color);
        self
    }

    /// Parse a palette from JSON.
    ///
    /// Two shapes are accepted:
    ///
    /// ```json
    /// { "base": "#ffffff", "contrast": "#222222" }
    /// ```
    ///
    /// ```json
    /// [ { "name": "base", "slug": "base", "color": "#ffffff" } ]
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::Json`] if the text matches neither shape.
    pub fn from_json(text: &str) -> Result<Self, PaletteError> {
        let palette: Self = serde_json::from_str(text)?;
        palette.warn_on_duplicates();
        Ok(palette)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.swatches.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.swatches.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Swatch> {
        self.swatches.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.swatches.iter().map(|s| s.name.as_str())
    }

    /// Color text of the first entry called `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.swatches
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.color.as_str())
    }

    fn warn_on_duplicates(&self) {
        let mut seen = HashSet::with_capacity(self.swatches.len());
        for swatch in &self.swatches {
            if !seen.insert(swatch.name.as_str()) {
                tracing::warn!(name = %swatch.name, "duplicate palette name");
            }
        }
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a Swatch;
    type IntoIter = std::slice::Iter<'a, Swatch>;

    fn into_iter(self) -> Self::IntoIter {
        self.swatches.iter()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Palette {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            swatches: iter
                .into_iter()
                .map(|(name, color)| Swatch::new(name, color))
                .collect(),
        }
    }
}

impl From<IndexMap<String, String>> for Palette {
    fn from(map: IndexMap<String, String>) -> Self {
        map.into_iter().collect()
    }
}

impl From<Vec<Swatch>> for Palette {
    fn from(swatches: Vec<Swatch>) -> Self {
        Self { swatches }
    }
}

// ---------------------------------------------------------------------------
// Wire shapes
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
#[serde(untagged)]
enum PaletteDocument {
    Map(IndexMap<String, String>),
    List(Vec<Swatch>),
}

impl From<PaletteDocument> for Palette {
    fn from(doc: PaletteDocument) -> Self {
        match doc {
            PaletteDocument::Map(map) => map.into(),
            PaletteDocument::List(list) => list.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builder_keeps_insertion_order() {
        let palette = Palette::new()
            .with("white", "#ffffff")
            .with("black", "#000000")
            .with("accent", "#1e73be");
        let names: Vec<_> = palette.names().collect();
        assert_eq!(names, ["white", "black", "accent"]);
        assert_eq!(palette.len(), 3);
    }

    #[test]
    fn duplicates_are_kept() {
        let palette: Palette = [("a", "#000000"), ("a", "#ffffff")].into_iter().collect();
        assert_eq!(palette.len(), 2);
        assert_eq!(palette.get("a"), Some("#000000"));
    }

    #[test]
    fn json_object_preserves_order() {
        let palette =
            Palette::from_json(r##"{"zeta": "#000000", "alpha": "#ffffff", "mid": "#808080"}"##)
                .unwrap();
        let names: Vec<_> = palette.names().collect();
        assert_eq!(names, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn json_list_ignores_extra_fields() {
        let palette = Palette::from_json(
            r##"[
                {"name": "contrast", "slug": "contrast", "color": "#222222"},
                {"name": "base", "slug": "base", "color": "#ffffff"}
            ]"##,
        )
        .unwrap();
        assert_eq!(
            palette.iter().cloned().collect::<Vec<_>>(),
            vec![
                Swatch::new("contrast", "#222222"),
                Swatch::new("base", "#ffffff"),
            ]
        );
    }

    #[test]
    fn json_colors_stay_unparsed() {
        // Validation happens when the matrix is built, not on load.
        let palette = Palette::from_json(r#"{"odd": "var(--x)"}"#).unwrap();
        assert_eq!(palette.get("odd"), Some("var(--x)"));
    }

    #[test]
    fn json_empty_object_is_empty_palette() {
        assert!(Palette::from_json("{}").unwrap().is_empty());
        assert!(Palette::from_json("[]").unwrap().is_empty());
    }

    #[test]
    fn json_wrong_shape_is_error() {
        assert!(Palette::from_json(r#"{"a": 1}"#).is_err());
        assert!(Palette::from_json(r##""#ffffff""##).is_err());
        assert!(Palette::from_json("not json").is_err());
    }
}
