//! Refractive index following the three-term Sellmeier equation.
use serde::{Deserialize, Serialize};
use uom::si::{f64::Length, length::micrometer};

use super::{RefractiveIndex, RefractiveIndexType};
use crate::error::{MeResult, MothEyeError};

/// Three-term Sellmeier equation `n² = 1 + Σ kᵢλ² / (λ² - lᵢ)` with λ in µm.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct RefrIndexSellmeier1 {
    k1: f64,
    k2: f64,
    k3: f64,
    l1: f64,
    l2: f64,
    l3: f64,
}
impl RefrIndexSellmeier1 {
    /// Create a new refractive index model following the Sellmeier equation.
    ///
    /// The `l` coefficients are given in µm².
    ///
    /// # Errors
    ///
    /// This function will return an error if the given coefficients are not finite.
    pub fn new(k1: f64, k2: f64, k3: f64, l1: f64, l2: f64, l3: f64) -> MeResult<Self> {
        if [k1, k2, k3, l1, l2, l3].iter().any(|c| !c.is_finite()) {
            return Err(MothEyeError::RefractiveIndex(
                "all coefficients must be finite.".into(),
            ));
        }
        Ok(Self {
            k1,
            k2,
            k3,
            l1,
            l2,
            l3,
        })
    }
    /// Single-term Sellmeier model of polydimethylsiloxane (PDMS).
    #[must_use]
    pub const fn pdms() -> Self {
        Self {
            k1: 1.0093,
            k2: 0.0,
            k3: 0.0,
            l1: 0.013_185,
            l2: 0.0,
            l3: 0.0,
        }
    }
}
impl Default for RefrIndexSellmeier1 {
    fn default() -> Self {
        Self::pdms()
    }
}
impl RefractiveIndex for RefrIndexSellmeier1 {
    fn get_refractive_index(&self, wavelength: Length) -> MeResult<f64> {
        let lambda = wavelength.get::<micrometer>();
        let l_sq = lambda * lambda;
        Ok(f64::sqrt(
            1.0 + self.k1 * l_sq / (l_sq - self.l1)
                + self.k2 * l_sq / (l_sq - self.l2)
                + self.k3 * l_sq / (l_sq - self.l3),
        ))
    }
    fn to_enum(&self) -> RefractiveIndexType {
        RefractiveIndexType::Sellmeier1(self.clone())
    }
}
