//! Assignment of display colors to segment categories.
use crate::geometry::Segment;
use colorous::{Color, CATEGORY10};
use plotters::style::RGBColor;
use std::collections::HashMap;

/// Categorical palette used for segment categories.
pub const CATEGORY_PALETTE: [Color; 10] = CATEGORY10;

/// Returns the palette color for the given palette index.
///
/// Indices beyond the palette size wrap around.
#[must_use]
pub const fn palette_color(index: usize) -> RGBColor {
    let c = CATEGORY_PALETTE[index % CATEGORY_PALETTE.len()];
    RGBColor(c.r, c.g, c.b)
}

/// Ordered mapping from category label to palette index.
///
/// Categories get consecutive indices in the order they are first inserted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryColorMap {
    categories: Vec<String>,
    indices: HashMap<String, usize>,
}
impl CategoryColorMap {
    /// Builds the map from the categories of the given segments in first-seen order.
    #[must_use]
    pub fn from_segments(segments: &[Segment]) -> Self {
        let mut map = Self::default();
        for segment in segments {
            map.insert(segment.category());
        }
        map
    }
    /// Insert a category and return its palette index.
    ///
    /// The second value is `true` if the category was not known before.
    pub fn insert(&mut self, category: &str) -> (usize, bool) {
        if let Some(idx) = self.indices.get(category) {
            return (*idx, false);
        }
        let idx = self.categories.len();
        self.categories.push(category.to_owned());
        self.indices.insert(category.to_owned(), idx);
        (idx, true)
    }
    /// Returns the palette index of a category or `None` if unknown.
    #[must_use]
    pub fn palette_index(&self, category: &str) -> Option<usize> {
        self.indices.get(category).copied()
    }
    /// Returns the display color of a category or `None` if unknown.
    #[must_use]
    pub fn color(&self, category: &str) -> Option<RGBColor> {
        self.palette_index(category).map(palette_color)
    }
    /// Returns the legend entries, i.e. all categories in first-seen order.
    #[must_use]
    pub fn legend_entries(&self) -> &[String] {
        &self.categories
    }
    /// Returns the number of distinct categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }
    /// Returns `true` if no category has been inserted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
