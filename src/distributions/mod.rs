#![warn(missing_docs)]
//! Discrete probability distributions used as input of the ray-tracing simulator.
//!
//! The simulator draws ray angles and wavelengths from tabulated probability distributions. This
//! module generates these tables and writes them as JSON documents of the form
//! `{"Name": ..., "<axis>": [...], "Probability": [...]}`.
pub mod angular;
pub mod solar;

pub use angular::{AngularDistribution, GaussianAngularDistribution};
pub use solar::{SolarColumn, SolarSpectrum, SpectralDistribution};

use crate::error::{MeResult, MothEyeError};
use kahan::KahanSummator;
use log::info;
use serde::Serialize;
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

/// Normalize the given weights such that they sum up to one.
///
/// # Errors
///
/// This function returns an error if the sum of all weights is not positive and finite.
pub fn normalize(weights: &[f64]) -> MeResult<Vec<f64>> {
    let sum: f64 = weights.iter().kahan_sum().sum();
    if !sum.is_normal() || sum.is_sign_negative() {
        return Err(MothEyeError::Distribution(format!(
            "sum of weights must be positive and finite, got {sum}"
        )));
    }
    Ok(weights.iter().map(|w| w / sum).collect())
}

/// Write a serializable document as pretty printed JSON (4 spaces indentation) to the given path.
///
/// # Errors
///
/// This function returns an error if the file cannot be created or the serialization fails.
pub fn save_json<T: Serialize>(document: &T, path: &Path) -> MeResult<()> {
    let file = File::create(path).map_err(|e| {
        MothEyeError::Io(format!("could not create file {}: {e}", path.display()))
    })?;
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(BufWriter::new(file), formatter);
    document.serialize(&mut serializer).map_err(|e| {
        MothEyeError::Io(format!("writing to file {} failed: {e}", path.display()))
    })?;
    serializer.into_inner().flush().map_err(|e| {
        MothEyeError::Io(format!("writing to file {} failed: {e}", path.display()))
    })?;
    info!("distribution written to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;
    use assert_matches::assert_matches;
    #[test]
    fn normalize_weights() {
        let p = normalize(&[1.0, 3.0, 4.0]).unwrap();
        assert_relative_eq!(p[0], 0.125);
        assert_relative_eq!(p[1], 0.375);
        assert_relative_eq!(p[2], 0.5);
    }
    #[test]
    fn normalize_invalid() {
        assert_matches!(normalize(&[]), Err(MothEyeError::Distribution(_)));
        assert!(normalize(&[0.0, 0.0]).is_err());
        assert!(normalize(&[1.0, -2.0]).is_err());
        assert!(normalize(&[1.0, f64::NAN]).is_err());
    }
    #[test]
    fn save_json_indent() {
        #[derive(Serialize)]
        struct Doc {
            #[serde(rename = "Name")]
            name: String,
        }
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.json");
        save_json(
            &Doc {
                name: "test".into(),
            },
            &path,
        )
        .unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "{\n    \"Name\": \"test\"\n}");
    }
    #[test]
    fn save_json_invalid_path() {
        assert_matches!(
            save_json(&1.0, Path::new("./this_dir_does_not_exist/doc.json")),
            Err(MothEyeError::Io(_))
        );
    }
}
