//! Schema of the simulator's geometry document.
use super::{Segment, UNKNOWN_CATEGORY};
use crate::error::{MeResult, MothEyeError};
use log::{debug, info, warn};
use nalgebra::Point2;
use serde::Deserialize;
use std::{fs, path::Path};

/// The geometry part of a simulation output document.
///
/// Only the entries needed for rendering are decoded. All other entries written by the
/// simulator (rays, settings, ...) are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeometryDocument {
    #[serde(rename = "Geometry")]
    geometry: Option<Vec<GeometryGroup>>,
}

#[derive(Debug, Clone, Deserialize)]
struct GeometryGroup {
    #[serde(rename = "Type", default)]
    category: Option<String>,
    // the simulator omits this entry for objects without segments
    #[serde(rename = "Segments", default)]
    segments: Vec<SegmentRecord>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
struct SegmentRecord {
    #[serde(rename = "A")]
    a: PointRecord,
    #[serde(rename = "B")]
    b: PointRecord,
}

#[derive(Debug, Clone, Copy, Deserialize)]
struct PointRecord {
    #[serde(rename = "X")]
    x: f64,
    #[serde(rename = "Y")]
    y: f64,
}
impl From<PointRecord> for Point2<f64> {
    fn from(p: PointRecord) -> Self {
        Self::new(p.x, p.y)
    }
}

impl GeometryDocument {
    /// Create a new [`GeometryDocument`] from a JSON file at the given path.
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///   - the given path is not found or readable.
    ///   - the parsing / deserialization of the file failed.
    pub fn from_file(path: &Path) -> MeResult<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            MothEyeError::Io(format!("cannot read file {} : {}", path.display(), e))
        })?;
        Self::from_string(&contents)
    }
    /// Create a new [`GeometryDocument`] from the given JSON string.
    ///
    /// # Errors
    ///
    /// This function will return a [`MothEyeError::MalformedDocument`] if the string is not valid
    /// JSON or a segment lacks a required endpoint or coordinate.
    pub fn from_string(document: &str) -> MeResult<Self> {
        let document: Self = serde_json::from_str(document).map_err(|e| {
            MothEyeError::MalformedDocument(format!("parsing of geometry failed: {e}"))
        })?;
        if document.geometry.is_none() {
            warn!("document does not contain a \"Geometry\" entry. No segments loaded.");
        }
        Ok(document)
    }
    /// Returns the number of geometry objects in this document.
    #[must_use]
    pub fn nr_of_groups(&self) -> usize {
        self.geometry.as_ref().map_or(0, Vec::len)
    }
    /// Flatten all geometry objects into a list of [`Segment`]s.
    ///
    /// Segments are ordered by geometry object first and by their position within the object
    /// second. Objects without category get [`UNKNOWN_CATEGORY`].
    #[must_use]
    pub fn segments(&self) -> Vec<Segment> {
        let mut segments = Vec::new();
        for group in self.geometry.iter().flatten() {
            let category = group
                .category
                .as_deref()
                .filter(|c| !c.is_empty())
                .unwrap_or(UNKNOWN_CATEGORY);
            debug!(
                "geometry object '{category}' with {} segments",
                group.segments.len()
            );
            segments.extend(
                group
                    .segments
                    .iter()
                    .map(|s| Segment::new(s.a.into(), s.b.into(), category)),
            );
        }
        info!(
            "loaded {} segments from {} geometry objects",
            segments.len(),
            self.nr_of_groups()
        );
        segments
    }
}
