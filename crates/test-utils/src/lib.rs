//! Shared test utilities for the contour-map workspace.
//!
//! This crate provides common testing infrastructure including:
//! - Synthetic survey grid generators
//! - Survey file fixtures
//! - Approximate equality macros for distances and display coordinates
//!
//! # Usage
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```
//!
//! Then import in your tests:
//!
//! ```ignore
//! use test_utils::{cone_grid, fixtures};
//! ```

pub mod fixtures;
pub mod generators;

// Re-export commonly used items at the crate root
pub use generators::*;

/// Macro for approximate floating-point equality assertions.
///
/// # Usage
///
/// ```ignore
/// use test_utils::assert_approx_eq;
///
/// assert_approx_eq!(1.0001_f64, 1.0_f64, 0.001_f64); // passes
/// assert_approx_eq!(1.1_f32, 1.0_f32, 0.001_f32);    // fails
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $epsilon:expr) => {{
        let left: f64 = $left as f64;
        let right: f64 = $right as f64;
        let epsilon: f64 = $epsilon as f64;
        let diff = (left - right).abs();
        if diff > epsilon {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}` > epsilon `{:?}`",
                left, right, diff, epsilon
            );
        }
    }};
}

/// Approximate equality of `(x, y)` display positions, one epsilon for both axes.
///
/// ```ignore
/// assert_coords_approx_eq!(renderer.position(&x, &y), (16.0 / 3.0, 7.0), 1e-9);
/// ```
#[macro_export]
macro_rules! assert_coords_approx_eq {
    ($actual:expr, ($x:expr, $y:expr), $epsilon:expr) => {{
        let (actual_x, actual_y): (f64, f64) = $actual;
        $crate::assert_approx_eq!(actual_x, $x, $epsilon);
        $crate::assert_approx_eq!(actual_y, $y, $epsilon);
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_assert_approx_eq_passes() {
        assert_approx_eq!(1.0001, 1.0, 0.001);
        assert_approx_eq!(0.0, 0.0, 0.0001);
        assert_approx_eq!(-5.5, -5.500001, 0.0001);
    }

    #[test]
    #[should_panic(expected = "assertion failed")]
    fn test_assert_approx_eq_fails() {
        assert_approx_eq!(1.1, 1.0, 0.001);
    }

    #[test]
    fn test_assert_coords_approx_eq_passes() {
        assert_coords_approx_eq!((1.0001, 2.0001), (1.0, 2.0), 0.001);
    }

    #[test]
    #[should_panic(expected = "assertion failed")]
    fn test_assert_coords_approx_eq_checks_y() {
        assert_coords_approx_eq!((1.0, 2.5), (1.0, 2.0), 0.001);
    }
}
