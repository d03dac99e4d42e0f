//! Two-term dispersion formula for gases such as air.
use serde::{Deserialize, Serialize};
use uom::si::{f64::Length, length::micrometer};

use super::{RefractiveIndex, RefractiveIndexType};
use crate::error::{MeResult, MothEyeError};

/// Two-term dispersion formula of gases `n = 1 + B1 / (C1 - λ⁻²) + B2 / (C2 - λ⁻²)` with λ in µm.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct RefrIndexGas {
    b1: f64,
    b2: f64,
    c1: f64,
    c2: f64,
}
impl RefrIndexGas {
    /// Create a new gas dispersion model.
    ///
    /// The `c` coefficients are given in µm⁻².
    ///
    /// # Errors
    ///
    /// This function will return an error if the given coefficients are not finite.
    pub fn new(b1: f64, b2: f64, c1: f64, c2: f64) -> MeResult<Self> {
        if [b1, b2, c1, c2].iter().any(|c| !c.is_finite()) {
            return Err(MothEyeError::RefractiveIndex(
                "all coefficients must be finite.".into(),
            ));
        }
        Ok(Self { b1, b2, c1, c2 })
    }
    /// Standard air (15 °C, 101325 Pa, 450 ppm CO₂).
    #[must_use]
    pub const fn standard_air() -> Self {
        Self {
            b1: 0.057_921_05,
            b2: 0.001_679_17,
            c1: 238.0185,
            c2: 57.362,
        }
    }
}
impl Default for RefrIndexGas {
    fn default() -> Self {
        Self::standard_air()
    }
}
impl RefractiveIndex for RefrIndexGas {
    fn get_refractive_index(&self, wavelength: Length) -> MeResult<f64> {
        let inv_l_sq = wavelength.get::<micrometer>().powi(-2);
        Ok(1.0 + self.b1 / (self.c1 - inv_l_sq) + self.b2 / (self.c2 - inv_l_sq))
    }
    fn to_enum(&self) -> RefractiveIndexType {
        RefractiveIndexType::Gas(self.clone())
    }
}
#[cfg(test)]
mod test {
    use super::*;
    use crate::nanometer;
    use approx::assert_relative_eq;
    #[test]
    fn new() {
        assert!(RefrIndexGas::new(f64::NAN, 1.0, 1.0, 1.0).is_err());
        assert!(RefrIndexGas::new(1.0, 1.0, 1.0, f64::NEG_INFINITY).is_err());
        assert!(RefrIndexGas::new(0.05, 0.001, 200.0, 50.0).is_ok());
    }
    #[test]
    fn standard_air() {
        let n = RefrIndexGas::standard_air();
        assert_relative_eq!(
            n.get_refractive_index(nanometer!(633.0)).unwrap(),
            1.000_276_5,
            epsilon = 1e-6
        );
        let uv = n.get_refractive_index(nanometer!(250.0)).unwrap();
        let ir = n.get_refractive_index(nanometer!(900.0)).unwrap();
        assert!(uv > ir);
        assert!(ir > 1.0);
    }
    #[test]
    fn to_enum() {
        assert_eq!(
            RefrIndexGas::default().to_enum(),
            RefractiveIndexType::Gas(RefrIndexGas::standard_air())
        );
    }
}
