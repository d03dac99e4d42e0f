#![warn(missing_docs)]
//! Line-segment geometry as dumped by the ray-tracing simulator.
//!
//! The simulator writes its scene into a JSON document with a top-level `"Geometry"` list. Each
//! entry of this list is a geometry object (e.g. a mirror, a target or the moth-eye structure
//! itself) consisting of a category label and a list of straight segments:
//!
//! ```json
//! {
//!   "Geometry": [
//!     {
//!       "Type": "Mirror",
//!       "Segments": [ { "A": {"X": 0.0, "Y": 0.0}, "B": {"X": 1.0, "Y": 1.0} } ]
//!     }
//!   ]
//! }
//! ```
//!
//! This module decodes such a document into a flat, ordered list of [`Segment`]s.
mod document;

pub use document::GeometryDocument;

use crate::error::MeResult;
use nalgebra::Point2;
use std::path::Path;

/// Category used for geometry objects without a (non-empty) `"Type"` entry.
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// A straight line between two 2D points, tagged with the category of its geometry object.
///
/// Both endpoints may coincide. In this case the segment is degenerate but still valid.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    a: Point2<f64>,
    b: Point2<f64>,
    category: String,
}
impl Segment {
    /// Creates a new [`Segment`].
    ///
    /// An empty `category` is replaced by [`UNKNOWN_CATEGORY`].
    #[must_use]
    pub fn new(a: Point2<f64>, b: Point2<f64>, category: &str) -> Self {
        let category = if category.is_empty() {
            UNKNOWN_CATEGORY
        } else {
            category
        };
        Self {
            a,
            b,
            category: category.to_owned(),
        }
    }
    /// Returns the start point of this [`Segment`].
    #[must_use]
    pub const fn a(&self) -> &Point2<f64> {
        &self.a
    }
    /// Returns the end point of this [`Segment`].
    #[must_use]
    pub const fn b(&self) -> &Point2<f64> {
        &self.b
    }
    /// Returns the category label of this [`Segment`].
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }
    /// Returns the euclidean length of this [`Segment`].
    #[must_use]
    pub fn length(&self) -> f64 {
        nalgebra::distance(&self.a, &self.b)
    }
    /// Returns `true` if both endpoints coincide.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.a == self.b
    }
}

/// Load all segments of the geometry document at the given path.
///
/// The segments are returned in document order (geometry object order, then segment order
/// within the object). A document without `"Geometry"` entry results in an empty list.
///
/// # Errors
///
/// This function will return an error if
///   - the file cannot be read ([`MothEyeError::Io`](crate::error::MothEyeError::Io)).
///   - the file is not valid JSON or a segment lacks one of its `"A"`, `"B"`, `"X"` or `"Y"`
///     entries ([`MothEyeError::MalformedDocument`](crate::error::MothEyeError::MalformedDocument)).
///     No partial result is returned in this case.
pub fn load_segments(path: &Path) -> MeResult<Vec<Segment>> {
    Ok(GeometryDocument::from_file(path)?.segments())
}

/// Decode the segments of a geometry document given as string.
///
/// # Errors
///
/// This function returns the same [`MothEyeError::MalformedDocument`](crate::error::MothEyeError::MalformedDocument)
/// errors as [`load_segments`].
pub fn segments_from_str(document: &str) -> MeResult<Vec<Segment>> {
    Ok(GeometryDocument::from_string(document)?.segments())
}
