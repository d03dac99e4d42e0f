#![warn(missing_docs)]
//! Effective refractive index of graded (moth-eye) surface structures.
//!
//! A horizontal slice through a sub-wavelength structure contains the structure material with a
//! certain area fraction (the fill factor) and the ambient medium otherwise. Such a slice behaves
//! like a homogeneous layer whose refractive index is obtained by a mixing rule.
use crate::{
    error::{MeResult, MothEyeError},
    nanometer,
    plottable::{CurvePlot, CurveSeries},
    refractive_index::{
        refr_index_vaccuum, RefrIndexGas, RefrIndexSellmeier1, RefractiveIndex,
        RefractiveIndexType,
    },
    utils::griddata::linspace,
};
use log::debug;
use plotters::style::{Color, RGBColor};
use std::f64::consts::PI;
use uom::si::{f64::Length, length::nanometer};

/// Number of height slices of the default scenario.
pub const DEFAULT_NR_OF_SLICES: usize = 100;
/// Number of sampled wavelengths of the default scenario.
pub const DEFAULT_NR_OF_WAVELENGTHS: usize = 10000;

/// Area fraction of the structure material in a slice at a given height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FillFactorModel {
    /// Fill factor decreasing linearly from one at the base (height 0) to zero at the top.
    Linear {
        /// total height of the pattern
        pattern_height: f64,
    },
    /// Spherical caps arranged in a hexagonal lattice.
    ///
    /// The height is measured from the top of the cap. Heights outside `[0, 2R]` do not cut the
    /// sphere.
    HexagonalSphericalCap {
        /// radius of the spheres
        sphere_radius: f64,
        /// side length of the hexagonal unit cell
        hexagon_side: f64,
    },
}
impl FillFactorModel {
    /// Create a hexagonal spherical cap model.
    ///
    /// # Errors
    ///
    /// This function returns an error if the radius or the side length is not positive and finite.
    pub fn hexagonal(sphere_radius: f64, hexagon_side: f64) -> MeResult<Self> {
        if !sphere_radius.is_normal()
            || sphere_radius.is_sign_negative()
            || !hexagon_side.is_normal()
            || hexagon_side.is_sign_negative()
        {
            return Err(MothEyeError::RefractiveIndex(
                "sphere radius and hexagon side must be positive and finite".into(),
            ));
        }
        Ok(Self::HexagonalSphericalCap {
            sphere_radius,
            hexagon_side,
        })
    }
    /// Create a linear model.
    ///
    /// # Errors
    ///
    /// This function returns an error if the pattern height is not positive and finite.
    pub fn linear(pattern_height: f64) -> MeResult<Self> {
        if !pattern_height.is_normal() || pattern_height.is_sign_negative() {
            return Err(MothEyeError::RefractiveIndex(
                "pattern height must be positive and finite".into(),
            ));
        }
        Ok(Self::Linear { pattern_height })
    }
    /// Returns the fill factor at the given height.
    ///
    /// # Errors
    ///
    /// This function returns an error if the height is not finite.
    pub fn fill_factor(&self, height: f64) -> MeResult<f64> {
        if !height.is_finite() {
            return Err(MothEyeError::RefractiveIndex("height must be finite".into()));
        }
        let ff = match *self {
            Self::Linear { pattern_height } => {
                ((pattern_height - height) / pattern_height).clamp(0.0, 1.0)
            }
            Self::HexagonalSphericalCap {
                sphere_radius,
                hexagon_side,
            } => {
                if height < 0.0 || height > 2.0 * sphere_radius {
                    0.0
                } else {
                    let hexagon_area = 1.5 * f64::sqrt(3.0) * hexagon_side * hexagon_side;
                    let circle_area = PI * height.mul_add(-height, 2.0 * sphere_radius * height);
                    circle_area / hexagon_area
                }
            }
        };
        Ok(ff)
    }
}

/// Rule for combining the refractive indices of two media with a given fill factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MixingRule {
    /// Volume-weighted average `f n₁ + (1 - f) n₂`.
    Linear,
    /// Power-law average `(f n₁^q + (1 - f) n₂^q)^(1/q)`.
    Power {
        /// exponent of the power law
        q: f64,
    },
}
impl Default for MixingRule {
    fn default() -> Self {
        Self::Power { q: 2.0 / 3.0 }
    }
}
impl MixingRule {
    /// Mix the refractive indices `n1` (fraction `fill_factor`) and `n2`.
    ///
    /// # Errors
    ///
    /// This function returns an error if the fill factor is outside `[0, 1]` or the exponent of a
    /// power rule is zero or not finite.
    pub fn mix(&self, fill_factor: f64, n1: f64, n2: f64) -> MeResult<f64> {
        if !(0.0..=1.0).contains(&fill_factor) {
            return Err(MothEyeError::RefractiveIndex(format!(
                "fill factor must be within [0, 1], got {fill_factor}"
            )));
        }
        match *self {
            Self::Linear => Ok(fill_factor.mul_add(n1, (1.0 - fill_factor) * n2)),
            Self::Power { q } => {
                if !q.is_normal() {
                    return Err(MothEyeError::RefractiveIndex(
                        "exponent of the power mixing rule must be non-zero and finite".into(),
                    ));
                }
                Ok(fill_factor
                    .mul_add(n1.powf(q), (1.0 - fill_factor) * n2.powf(q))
                    .powf(1.0 / q))
            }
        }
    }
}

/// Effective refractive index of one height slice over a set of wavelengths.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexCurve {
    height: f64,
    fill_factor: f64,
    values: Vec<f64>,
}
impl IndexCurve {
    /// Returns the height of this slice.
    #[must_use]
    pub const fn height(&self) -> f64 {
        self.height
    }
    /// Returns the fill factor of this slice.
    #[must_use]
    pub const fn fill_factor(&self) -> f64 {
        self.fill_factor
    }
    /// Returns the effective refractive index for each wavelength.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

/// Model of a structured material surrounded by an ambient medium.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectiveIndexModel {
    structure: RefractiveIndexType,
    ambient: RefractiveIndexType,
    fill_factor: FillFactorModel,
    mixing: MixingRule,
}
impl Default for EffectiveIndexModel {
    /// Hexagonally arranged PDMS spherical caps in standard air with a pattern height of 1.
    fn default() -> Self {
        Self {
            structure: RefrIndexSellmeier1::pdms().to_enum(),
            ambient: RefrIndexGas::standard_air().to_enum(),
            fill_factor: FillFactorModel::HexagonalSphericalCap {
                sphere_radius: 1.0,
                hexagon_side: 2.0 / f64::sqrt(3.0),
            },
            mixing: MixingRule::default(),
        }
    }
}
impl EffectiveIndexModel {
    /// Creates a new [`EffectiveIndexModel`].
    #[must_use]
    pub const fn new(
        structure: RefractiveIndexType,
        ambient: RefractiveIndexType,
        fill_factor: FillFactorModel,
        mixing: MixingRule,
    ) -> Self {
        Self {
            structure,
            ambient,
            fill_factor,
            mixing,
        }
    }
    /// PDMS structure in vacuum with a linear fill factor and linear mixing.
    #[must_use]
    pub fn linear_pdms(pattern_height: f64) -> Self {
        Self::new(
            RefrIndexSellmeier1::pdms().to_enum(),
            refr_index_vaccuum().to_enum(),
            FillFactorModel::Linear { pattern_height },
            MixingRule::Linear,
        )
    }
    /// Returns the fill factor model of this [`EffectiveIndexModel`].
    #[must_use]
    pub const fn fill_factor_model(&self) -> FillFactorModel {
        self.fill_factor
    }
    /// Returns the mixing rule of this [`EffectiveIndexModel`].
    #[must_use]
    pub const fn mixing_rule(&self) -> MixingRule {
        self.mixing
    }
    /// Calculate the effective refractive index at the given height and wavelength.
    ///
    /// # Errors
    ///
    /// This function returns an error if the refractive index of one of the media cannot be
    /// calculated or the fill factor is invalid.
    pub fn effective_index(&self, height: f64, wavelength: Length) -> MeResult<f64> {
        let ff = self.fill_factor.fill_factor(height)?;
        self.mix_at(ff, wavelength)
    }
    fn mix_at(&self, fill_factor: f64, wavelength: Length) -> MeResult<f64> {
        let n1 = self.structure.get_refractive_index(wavelength)?;
        let n2 = self.ambient.get_refractive_index(wavelength)?;
        self.mixing.mix(fill_factor, n1, n2)
    }
    /// Calculate one effective index curve over all wavelengths for each height.
    ///
    /// # Errors
    ///
    /// This function returns an error if one of the values cannot be calculated.
    pub fn index_curves(
        &self,
        heights: &[f64],
        wavelengths: &[Length],
    ) -> MeResult<Vec<IndexCurve>> {
        heights
            .iter()
            .map(|height| {
                let fill_factor = self.fill_factor.fill_factor(*height)?;
                debug!("height {height}: fill factor {fill_factor}");
                let values = wavelengths
                    .iter()
                    .map(|w| self.mix_at(fill_factor, *w))
                    .collect::<MeResult<Vec<f64>>>()?;
                Ok(IndexCurve {
                    height: *height,
                    fill_factor,
                    values,
                })
            })
            .collect()
    }
}

/// Equidistant heights `[0, pattern_height]` of the given number of slices.
///
/// # Errors
///
/// This function returns an error if the pattern height is not finite.
pub fn slice_heights(pattern_height: f64, nr_of_slices: usize) -> MeResult<Vec<f64>> {
    Ok(linspace(0.0, pattern_height, nr_of_slices)?.as_slice().to_vec())
}

/// Equidistant wavelengths between `start` and `end`.
///
/// # Errors
///
/// This function returns an error if the limits are not finite.
pub fn wavelength_grid(start: Length, end: Length, nr_of_points: usize) -> MeResult<Vec<Length>> {
    let grid = linspace(start.get::<nanometer>(), end.get::<nanometer>(), nr_of_points)?;
    Ok(grid.iter().map(|w| nanometer!(*w)).collect())
}

/// Wavelength grid of the default scenario (250 nm to 900 nm).
///
/// # Errors
///
/// This function does not fail for the fixed default limits but propagates grid errors.
pub fn default_wavelengths() -> MeResult<Vec<Length>> {
    wavelength_grid(
        nanometer!(250.0),
        nanometer!(900.0),
        DEFAULT_NR_OF_WAVELENGTHS,
    )
}

/// Create a plot of the effective index over the wavelength with one line per height.
///
/// Lines are colored along the magma colormap in the order of the curves.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn to_curve_plot(curves: &[IndexCurve], wavelengths: &[Length], title: &str) -> CurvePlot {
    let lambdas: Vec<f64> = wavelengths.iter().map(|w| w.get::<nanometer>()).collect();
    let mut plot = CurvePlot::new(title, "wavelength in nm", "effective refractive index");
    let gradient = colorous::MAGMA;
    for (i, curve) in curves.iter().enumerate() {
        let c = gradient.eval_continuous(i as f64 / curves.len() as f64);
        let data = lambdas.iter().copied().zip(curve.values.iter().copied()).collect();
        plot.add_series(CurveSeries::new(
            data,
            RGBColor(c.r, c.g, c.b).to_rgba(),
            None,
        ));
    }
    plot
}
