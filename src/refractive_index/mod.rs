//! Module for handling the refractive index of the materials of a moth-eye coating.
#![warn(missing_docs)]
use std::fmt::Display;

use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};
use uom::si::f64::Length;

pub mod refr_index_const;
pub mod refr_index_gas;
pub mod refr_index_sellmeier1;

pub use refr_index_const::{refr_index_vaccuum, RefrIndexConst};
pub use refr_index_gas::RefrIndexGas;
pub use refr_index_sellmeier1::RefrIndexSellmeier1;

use crate::error::{MeResult, MothEyeError};

/// Available models for the calculation of refractive index
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, EnumIter)]
pub enum RefractiveIndexType {
    /// Trivial model returning a wavelength-independant constant
    Const(RefrIndexConst),
    /// Sellmeier 1 model
    Sellmeier1(RefrIndexSellmeier1),
    /// Two-term dispersion model of gases
    Gas(RefrIndexGas),
}

impl Default for RefractiveIndexType {
    fn default() -> Self {
        Self::Sellmeier1(RefrIndexSellmeier1::default())
    }
}

impl RefractiveIndexType {
    /// Get the refractive index value of the [`RefractiveIndexType`] for the given wavelength.
    ///
    /// # Errors
    ///
    /// This function returns an error if the the refractive index could not be calculated e.g.:
    ///   - the given wavelength is not positive and finite.
    ///   - the model would calculate a value below 1.0, NaN or infinity
    pub fn get_refractive_index(&self, wavelength: Length) -> MeResult<f64> {
        if !wavelength.is_normal() || wavelength.is_sign_negative() {
            return Err(MothEyeError::RefractiveIndex(
                "wavelength must be positive and finite".into(),
            ));
        }
        let refr_index = match self {
            Self::Const(refr_index_const) => refr_index_const.get_refractive_index(wavelength)?,
            Self::Sellmeier1(refr_index_sellmeier1) => {
                refr_index_sellmeier1.get_refractive_index(wavelength)?
            }
            Self::Gas(refr_index_gas) => refr_index_gas.get_refractive_index(wavelength)?,
        };
        if refr_index < 1.0 || !refr_index.is_finite() {
            return Err(MothEyeError::RefractiveIndex(
                "refractive index calculated by model is <1.0 or not finite".into(),
            ));
        }
        Ok(refr_index)
    }

    /// Creates a default instance of a refractive index type by name.
    ///
    /// # Returns
    /// - `Some(RefractiveIndexType)` if the name is recognized.
    /// - `None` if the name is unknown.
    #[must_use]
    pub fn default_from_name(name: &str) -> Option<Self> {
        Self::iter().find(|ref_ind_type| format!("{ref_ind_type}") == name)
    }
}

impl Display for RefractiveIndexType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Const(_) => write!(f, "Constant"),
            Self::Sellmeier1(_) => write!(f, "Sellmeier equation"),
            Self::Gas(_) => write!(f, "Gas dispersion equation"),
        }
    }
}
/// All refractive index models must implement this trait.
pub trait RefractiveIndex {
    /// Get the refractive index value of the current model for the given wavelength.
    ///
    /// # Errors
    ///
    /// This function returns an error if the the refractive index could not be calculated.
    fn get_refractive_index(&self, wavelength: Length) -> MeResult<f64>;
    /// Create a corresponding [`RefractiveIndexType`] value.
    fn to_enum(&self) -> RefractiveIndexType;
}
