//! Module for creating sampling grids

#![warn(missing_docs)]
use crate::error::{MeResult, MothEyeError};
use log::warn;
use nalgebra::{DVector, Scalar};
use num::{Float, NumCast};

/// Creates a linearly spaced Vector (Matrix with 1 column and `num` rows) from `start` to `end`.
///
/// Both limits are included, i.e. the step is `(end - start) / (num - 1)`.
/// # Attributes
/// - `start`:  Start value of the array
/// - `end`:    end value of the array
/// - `num`:    number of elements
///
/// # Errors
/// This function will return an error if `start` or `end` are not finite or if `num` cannot be
/// casted to the float type.
pub fn linspace<T: Float + Scalar>(start: T, end: T, num: usize) -> MeResult<DVector<T>> {
    if !start.is_finite() || !end.is_finite() {
        return Err(MothEyeError::Other(
            "start and end values must be finite!".into(),
        ));
    };

    let mut linspace = DVector::<T>::from_element(num, start);
    if num < 2 {
        warn!("Using linspace with less than two elements results in an empty Vector for num=0 or a Vector with one entry being num=start");
        return Ok(linspace);
    }

    let bin_size = (end - start)
        / <T as NumCast>::from(num - 1)
            .ok_or_else(|| MothEyeError::Other("Cannot Cast usize to float type!".into()))?;

    for (step, val) in linspace.iter_mut().enumerate() {
        let step = <T as NumCast>::from(step)
            .ok_or_else(|| MothEyeError::Other("Cannot Cast usize to float type!".into()))?;
        *val = *val + step * bin_size;
    }
    Ok(linspace)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::utils::test_helper::test_helper::check_logs;
    use approx::assert_relative_eq;
    #[test]
    fn linspace_test() {
        let l = linspace(1.0, 3.0, 5).unwrap();
        assert_eq!(l.len(), 5);
        assert_relative_eq!(l[0], 1.0);
        assert_relative_eq!(l[1], 1.5);
        assert_relative_eq!(l[4], 3.0);
        let l = linspace(3.0, 1.0, 3).unwrap();
        assert_relative_eq!(l[1], 2.0);
        assert_relative_eq!(l[2], 1.0);
    }
    #[test]
    fn linspace_non_finite() {
        assert!(linspace(f64::NAN, 1.0, 10).is_err());
        assert!(linspace(0.0, f64::INFINITY, 10).is_err());
    }
    #[test]
    fn linspace_too_short() {
        testing_logger::setup();
        let l = linspace(2.0, 5.0, 1).unwrap();
        assert_eq!(l.len(), 1);
        assert_relative_eq!(l[0], 2.0);
        let l = linspace(2.0, 5.0, 0).unwrap();
        assert!(l.is_empty());
        check_logs(
            log::Level::Warn,
            vec![
                "Using linspace with less than two elements results in an empty Vector for num=0 or a Vector with one entry being num=start",
                "Using linspace with less than two elements results in an empty Vector for num=0 or a Vector with one entry being num=start",
            ],
        );
    }
}
