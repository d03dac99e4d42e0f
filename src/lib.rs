//! This is the documentation for the **motheye** software package, a toolbox accompanying a 2D
//! ray-tracing simulator of moth-eye anti-reflection coatings.
//!
//! The package covers
//!   - loading and rendering of the line-segment [`geometry`] of a simulated scene,
//!   - generation of the angular and spectral probability [`distributions`] used as ray sources,
//!   - refractive index models ([`refractive_index`]) and the graded [`effective_medium`] of the
//!     moth-eye structure.
#![allow(clippy::module_name_repetitions)]

pub mod console;
pub mod distributions;
pub mod effective_medium;
pub mod error;
pub mod geometry;
pub mod plottable;
pub mod refractive_index;
pub mod utils;

/// Return the version information of the currently built motheye executable.
#[must_use]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_owned()
}
#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn get_ver() {
        let version = get_version();
        assert_eq!(version.split('.').count(), 3);
        assert!(version.split('.').all(|n| n.parse::<u32>().is_ok()));
    }
}
