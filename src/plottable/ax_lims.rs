//! This module contains the [`AxLims`] struct, which is used to define the axis limits of a plot.
use approx::{abs_diff_ne, RelativeEq};
use log::warn;

use crate::utils::filter_data::get_min_max_filter_nonfinite;

/// Struct that holds the maximum and minimum values of an axis
#[derive(Clone, Debug, Copy, PartialEq)]
pub struct AxLims {
    /// minimum value of the axis
    pub min: f64,
    /// maximum value of the axis
    pub max: f64,
}

impl AxLims {
    ///Creates a new [`AxLims`] struct
    /// # Attributes
    /// -`min`: minimum value of the ax limit
    /// -`max`: maximum value of the ax limit
    ///
    /// # Returns
    /// This function retuns Some([`AxLims`]) or None if the chosen minimum or maximum valus is NaN or infinite
    #[must_use]
    pub fn new(min: f64, max: f64) -> Option<Self> {
        let axlim = Self { min, max };
        if axlim.check_validity() {
            Some(axlim)
        } else {
            warn!("Invalid axis limits. Must be finite and min < max. Use default");
            None
        }
    }

    /// Creates useful [`AxLims`] spanning all finite values of the given data.
    ///
    /// Data without any finite value or with a single distinct value still yields a non-empty
    /// range (see [`AxLims::create_useful_axlims`]).
    #[must_use]
    pub fn finite_from_values(values: &[f64]) -> Option<Self> {
        let (min, max) = get_min_max_filter_nonfinite(values).unwrap_or((f64::NAN, f64::NAN));
        Self::create_useful_axlims(min, max)
    }

    /// Checks the validity of the delivered min and max values and returns a true if it is valid, false otherwise
    #[must_use]
    pub fn check_validity(self) -> bool {
        self.max.is_finite()
            && self.min.is_finite()
            && abs_diff_ne!(self.max, self.min)
            && self.max > self.min
    }

    /// Returns the span `max - min` of this [`AxLims`].
    #[must_use]
    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// Shifts the minimum and the maximum to lower and higher values, respectively.
    /// The range expands by the `expansion_factor`, therefore, each limit is shifted by `range` * (`expansion_factor`-1.)/2.
    /// # Attributes
    /// -`expansion_factor`: relative extension of the range. must be positive, non-zero, not NAN and finite
    pub fn expand_lim_range_by_factor(&mut self, expansion_factor: f64) {
        if expansion_factor.is_normal() && expansion_factor.is_sign_positive() {
            let range = self.range();
            self.max += range * (expansion_factor - 1.) / 2.;
            self.min -= range * (expansion_factor - 1.) / 2.;
        } else {
            warn!("Cannot expand ax limits! Expansion factor must be normal and positive!");
        }
    }

    /// This function creates an [`AxLims`] struct from the provided `min` and `max` values
    /// # Returns
    /// If the minimum and maximum value are chosen such that min < max and both finite, the function returns Some([`AxLims`]) with these limits.
    /// If these criteria are not fulfilled, the values are changed accordingly to provide valid axlims. If for some reason, these values are still not okay, the function returns None
    #[must_use]
    pub fn create_useful_axlims(min_in: f64, max_in: f64) -> Option<Self> {
        if !min_in.is_finite() && !max_in.is_finite() {
            return Self::new(-0.5, 0.5);
        }

        let (min, max) = if !min_in.is_finite() {
            (max_in, max_in)
        } else if !max_in.is_finite() {
            (min_in, min_in)
        } else {
            (min_in, max_in)
        };

        let (mut min, mut max) = if max < min { (max, min) } else { (min, max) };

        let mut ax_range = max - min;

        //min and max approximately equal: use the absolute value as range
        if max.relative_eq(&min, f64::EPSILON, f64::EPSILON) {
            ax_range = max.abs();
            min = max - ax_range / 2.;
            max += ax_range * 0.5;
        }

        //still no span (e.g. both zero)
        if ax_range < f64::EPSILON {
            max = 0.5;
            min = -0.5;
        }
        Self::new(min, max)
    }
}
