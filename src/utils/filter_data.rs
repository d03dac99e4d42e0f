//! Functions for filtering sampled data before plotting.

use num::Float;

/// This method returns the minimum and maximum value of the provided values while ignoring non-finite values
///
/// # Returns
///
/// If successful, this method returns an Option containting the minimum and maximum value: Option<(min, max)>.
/// If `ax_vals` is empty or contains only non-finite values (inf, -inf, NaN), None is returned
#[must_use]
pub fn get_min_max_filter_nonfinite<T: Float>(ax_vals: &[T]) -> Option<(T, T)> {
    let (min, max) = ax_vals.iter().copied().filter(|x| x.is_finite()).fold(
        (T::infinity(), T::neg_infinity()),
        |(current_min, current_max), val| (current_min.min(val), current_max.max(val)),
    );
    if !min.is_finite() || !max.is_finite() {
        None
    } else {
        Some((min, max))
    }
}
