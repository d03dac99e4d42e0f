//! Constant refractive index, independent of the wavelength.
use serde::{Deserialize, Serialize};
use uom::si::f64::Length;

use super::{RefractiveIndex, RefractiveIndexType};
use crate::error::{MeResult, MothEyeError};

/// Wavelength-independent refractive index.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct RefrIndexConst {
    refractive_index: f64,
}
impl RefrIndexConst {
    /// Create a new constant refractive index.
    ///
    /// # Errors
    ///
    /// This function will return an error if the given value is < 1.0 or not finite.
    pub fn new(refractive_index: f64) -> MeResult<Self> {
        if refractive_index < 1.0 || !refractive_index.is_finite() {
            return Err(MothEyeError::RefractiveIndex(
                "refractive index must be >=1.0 and finite.".into(),
            ));
        }
        Ok(Self { refractive_index })
    }
}
impl Default for RefrIndexConst {
    fn default() -> Self {
        refr_index_vaccuum()
    }
}
impl RefractiveIndex for RefrIndexConst {
    fn get_refractive_index(&self, _wavelength: Length) -> MeResult<f64> {
        Ok(self.refractive_index)
    }
    fn to_enum(&self) -> RefractiveIndexType {
        RefractiveIndexType::Const(self.clone())
    }
}
/// Refractive index of vacuum (1.0).
#[must_use]
pub const fn refr_index_vaccuum() -> RefrIndexConst {
    RefrIndexConst {
        refractive_index: 1.0,
    }
}
