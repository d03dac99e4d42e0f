//! Gaussian distribution of ray angles.
use super::{normalize, save_json};
use crate::{
    degree,
    error::{MeResult, MothEyeError},
    plottable::CurvePlot,
    utils::griddata::linspace,
};
use serde::{Deserialize, Serialize};
use std::{f64::consts::PI, path::Path};
use uom::si::{angle::degree, f64::Angle};

/// Name of the generated angular distribution documents.
pub const ANGULAR_DISTRIBUTION_NAME: &str = "Angle Normal Distribution";

/// Generator for a discretized normal distribution of angles.
///
/// The angles are sampled equidistantly over `[-2σ, 2σ]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussianAngularDistribution {
    sigma: Angle,
    mu: Angle,
    num_points: usize,
}
impl Default for GaussianAngularDistribution {
    fn default() -> Self {
        Self {
            sigma: degree!(5.0),
            mu: degree!(0.0),
            num_points: 10000,
        }
    }
}
impl GaussianAngularDistribution {
    /// Create a new angular Gaussian distribution generator.
    ///
    /// # Attributes
    ///
    /// - `sigma`: standard deviation of the distribution
    /// - `mu`: mean value of the distribution
    /// - `num_points`: number of sampled angles
    ///
    /// # Errors
    ///
    /// This function will return an error if
    ///   - sigma is non-finite, zero or below zero
    ///   - mu is non-finite
    ///   - less than two points are requested
    pub fn new(sigma: Angle, mu: Angle, num_points: usize) -> MeResult<Self> {
        if !sigma.is_normal() || sigma.is_sign_negative() {
            return Err(MothEyeError::Distribution(
                "sigma must be greater than zero and finite!".into(),
            ));
        }
        if !mu.is_finite() {
            return Err(MothEyeError::Distribution(
                "mean value must be finite!".into(),
            ));
        }
        if num_points < 2 {
            return Err(MothEyeError::Distribution(
                "at least two sample points are needed!".into(),
            ));
        }
        Ok(Self {
            sigma,
            mu,
            num_points,
        })
    }
    /// Returns the standard deviation of this distribution.
    #[must_use]
    pub const fn sigma(&self) -> Angle {
        self.sigma
    }
    /// Returns the mean value of this distribution.
    #[must_use]
    pub const fn mu(&self) -> Angle {
        self.mu
    }
    /// Returns the number of sampled angles.
    #[must_use]
    pub const fn num_points(&self) -> usize {
        self.num_points
    }
    /// Generators for the standard set of widths (σ = 5°, 10°, ..., 40°) around 0°.
    #[must_use]
    pub fn default_sweep() -> Vec<Self> {
        (1..=8)
            .map(|i| Self {
                sigma: degree!(5.0 * f64::from(i)),
                ..Self::default()
            })
            .collect()
    }
    /// Returns the standard deviation in degrees.
    ///
    /// Values within a few ulps of an integer are snapped to it, since [`Angle`] stores radians
    /// and converting back does not reproduce e.g. 15° exactly.
    #[must_use]
    pub fn sigma_in_degree(&self) -> f64 {
        snap_to_integer(self.sigma.get::<degree>())
    }
    /// File name of the generated document, e.g. `10DegGaussian.json` for σ = 5°.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!(
            "{}DegGaussian.json",
            snap_to_integer(2.0 * self.sigma.get::<degree>())
        )
    }
    /// Generate the discretized distribution.
    ///
    /// The normal probability density is sampled over `[-2σ, 2σ]`, weighted with the sample step
    /// and normalized such that all probabilities sum up to one.
    ///
    /// # Errors
    ///
    /// This function returns an error if the sampling grid cannot be created or the weights
    /// cannot be normalized.
    pub fn generate(&self) -> MeResult<AngularDistribution> {
        let sigma = self.sigma.get::<degree>();
        let mu = self.mu.get::<degree>();
        let angles = linspace(-2.0 * sigma, 2.0 * sigma, self.num_points)?;
        let delta = angles[1] - angles[0];
        let weights: Vec<f64> = angles
            .iter()
            .map(|x| normal_pdf(*x, mu, sigma) * delta)
            .collect();
        Ok(AngularDistribution {
            name: ANGULAR_DISTRIBUTION_NAME.to_owned(),
            angle: angles.as_slice().to_vec(),
            probability: normalize(&weights)?,
        })
    }
}

fn snap_to_integer(value: f64) -> f64 {
    let rounded = value.round();
    if (value - rounded).abs() <= 1e-9 * rounded.abs().max(1.0) {
        rounded
    } else {
        value
    }
}

fn normal_pdf(x: f64, mu: f64, sigma: f64) -> f64 {
    (-0.5 * ((x - mu) / sigma).powi(2)).exp() / (sigma * f64::sqrt(2.0 * PI))
}

/// Tabulated probability of ray angles (in degrees).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AngularDistribution {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Angle")]
    angle: Vec<f64>,
    #[serde(rename = "Probability")]
    probability: Vec<f64>,
}
impl AngularDistribution {
    /// Returns the name of this distribution.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
    /// Returns the sampled angles in degrees.
    #[must_use]
    pub fn angles(&self) -> &[f64] {
        &self.angle
    }
    /// Returns the probability of each sampled angle.
    #[must_use]
    pub fn probabilities(&self) -> &[f64] {
        &self.probability
    }
    /// Write this distribution as JSON document to the given path.
    ///
    /// # Errors
    ///
    /// This function returns an error if the file cannot be written.
    pub fn save(&self, path: &Path) -> MeResult<()> {
        save_json(self, path)
    }
    /// Create a plot of the probability over the angle.
    #[must_use]
    pub fn to_curve_plot(&self, title: &str) -> CurvePlot {
        let mut plot = CurvePlot::new(title, "angle in degree", "probability");
        plot.add_xy(&self.angle, &self.probability, None);
        plot
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use kahan::KahanSummator;
    #[test]
    fn default() {
        let d = GaussianAngularDistribution::default();
        assert_relative_eq!(d.sigma().get::<degree>(), 5.0);
        assert_relative_eq!(d.mu().get::<degree>(), 0.0);
        assert_eq!(d.num_points(), 10000);
    }
    #[test]
    fn new() {
        assert!(GaussianAngularDistribution::new(degree!(5.0), degree!(0.0), 100).is_ok());
        for value in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(GaussianAngularDistribution::new(degree!(value), degree!(0.0), 100).is_err());
        }
        assert!(GaussianAngularDistribution::new(degree!(5.0), degree!(f64::NAN), 100).is_err());
        assert!(GaussianAngularDistribution::new(degree!(5.0), degree!(0.0), 1).is_err());
    }
    #[test]
    fn file_name() {
        assert_eq!(
            GaussianAngularDistribution::default().file_name(),
            "10DegGaussian.json"
        );
        let d = GaussianAngularDistribution::new(degree!(7.5), degree!(0.0), 10).unwrap();
        assert_eq!(d.file_name(), "15DegGaussian.json");
        let d = GaussianAngularDistribution::new(degree!(1.25), degree!(0.0), 10).unwrap();
        assert_eq!(d.file_name(), "2.5DegGaussian.json");
    }
    #[test]
    fn sigma_in_degree() {
        let d = GaussianAngularDistribution::new(degree!(15.0), degree!(0.0), 10).unwrap();
        assert_eq!(d.sigma_in_degree(), 15.0);
        let d = GaussianAngularDistribution::new(degree!(0.3), degree!(0.0), 10).unwrap();
        assert_relative_eq!(d.sigma_in_degree(), 0.3);
    }
    #[test]
    fn default_sweep() {
        let sweep = GaussianAngularDistribution::default_sweep();
        assert_eq!(sweep.len(), 8);
        assert_relative_eq!(sweep[0].sigma().get::<degree>(), 5.0);
        assert_relative_eq!(sweep[7].sigma().get::<degree>(), 40.0);
        let names: Vec<String> = sweep.iter().map(GaussianAngularDistribution::file_name).collect();
        assert_eq!(
            names,
            vec![
                "10DegGaussian.json",
                "20DegGaussian.json",
                "30DegGaussian.json",
                "40DegGaussian.json",
                "50DegGaussian.json",
                "60DegGaussian.json",
                "70DegGaussian.json",
                "80DegGaussian.json",
            ]
        );
        let sigmas: Vec<f64> = sweep
            .iter()
            .map(GaussianAngularDistribution::sigma_in_degree)
            .collect();
        assert_eq!(sigmas, vec![5., 10., 15., 20., 25., 30., 35., 40.]);
    }
    #[test]
    fn generate() {
        let d = GaussianAngularDistribution::new(degree!(10.0), degree!(0.0), 11)
            .unwrap()
            .generate()
            .unwrap();
        assert_eq!(d.name(), ANGULAR_DISTRIBUTION_NAME);
        assert_eq!(d.angles().len(), 11);
        assert_eq!(d.probabilities().len(), 11);
        assert_relative_eq!(d.angles()[0], -20.0);
        assert_relative_eq!(d.angles()[5], 0.0);
        assert_relative_eq!(d.angles()[10], 20.0);
        let sum: f64 = d.probabilities().iter().kahan_sum().sum();
        assert_abs_diff_eq!(sum, 1.0, epsilon = 1e-12);
        let max = d.probabilities().iter().copied().fold(f64::MIN, f64::max);
        assert_relative_eq!(max, d.probabilities()[5]);
        assert_relative_eq!(d.probabilities()[0], d.probabilities()[10]);
        // exp(-2) ratio between the border (2σ) and the center
        assert_relative_eq!(
            d.probabilities()[0] / d.probabilities()[5],
            (-2.0f64).exp(),
            max_relative = 1e-12
        );
    }
    #[test]
    fn generate_shifted_mean() {
        let d = GaussianAngularDistribution::new(degree!(10.0), degree!(10.0), 5)
            .unwrap()
            .generate()
            .unwrap();
        // the sampled range stays centered around zero
        assert_relative_eq!(d.angles()[0], -20.0);
        assert_relative_eq!(d.angles()[4], 20.0);
        let p = d.probabilities();
        assert!(p[3] > p[1]);
        assert_relative_eq!(p[2], p[4]);
    }
    #[test]
    fn save_and_read() {
        let d = GaussianAngularDistribution::new(degree!(5.0), degree!(0.0), 5)
            .unwrap()
            .generate()
            .unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dist.json");
        d.save(&path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("{\n    \"Name\": \"Angle Normal Distribution\",\n    \"Angle\": ["));
        let read: AngularDistribution = serde_json::from_str(&content).unwrap();
        assert_eq!(read.angles().len(), 5);
        assert_eq!(read.name(), d.name());
    }
    #[test]
    fn curve_plot() {
        let d = GaussianAngularDistribution::new(degree!(5.0), degree!(0.0), 5)
            .unwrap()
            .generate()
            .unwrap();
        let plot = d.to_curve_plot("gauss");
        assert_eq!(plot.series().len(), 1);
        assert_eq!(plot.series()[0].data().len(), 5);
    }
}
