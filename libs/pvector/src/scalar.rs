//! Scalar helpers shared by the vector operations.

use std::f64::consts::PI;

use crate::core::operand::VectorLike;
use crate::core::vector::PVector;

/// Linear interpolation `a + (b - a) * amount`.
///
/// # Examples
/// ```
/// use pvector::lerp_val;
/// assert_eq!(lerp_val(10.0, 20.0, 0.75), 17.5);
/// ```
pub fn lerp_val(a: f64, b: f64, amount: f64) -> f64 {
    a + (b - a) * amount
}

/// Angle in radians between two vectors, `acos(a·b / (|a| |b|))`.
///
/// `NaN` when either vector is zero.
///
/// # Examples
/// ```
/// use pvector::{angle_between, PVector};
/// let angle = angle_between(&PVector::UNIT_X, &PVector::UNIT_Y);
/// assert_eq!(angle, std::f64::consts::FRAC_PI_2);
/// ```
pub fn angle_between(a: &impl VectorLike, b: &impl VectorLike) -> f64 {
    let (a, b) = (PVector::from_like(a), PVector::from_like(b));
    (a.dot(&b) / (a.magnitude_sq() * b.magnitude_sq()).sqrt()).acos()
}

/// Converts radians to degrees.
pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * (180.0 / PI)
}

/// Converts degrees to radians.
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees / (180.0 / PI)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_lerp_val() {
        assert_eq!(lerp_val(10.0, 20.0, 0.75), 17.5);
        assert_eq!(lerp_val(10.0, 20.0, 0.0), 10.0);
        assert_eq!(lerp_val(10.0, 20.0, 1.0), 20.0);
        assert_eq!(lerp_val(10.0, 20.0, 2.0), 30.0);
    }

    #[test]
    fn test_angle_between() {
        let a = PVector::new(1.0, 0.0, 0.0);
        let b = PVector::new(1.0, 1.0, 0.0);
        assert_relative_eq!(angle_between(&a, &b), PI / 4.0, epsilon = 1e-12);
        assert_relative_eq!(angle_between(&a, &(-a)), PI);
    }

    #[test]
    fn test_angle_between_zero_vector_is_nan() {
        assert!(angle_between(&PVector::ZERO, &PVector::UNIT_X).is_nan());
    }

    #[test]
    fn test_degree_conversions() {
        assert_relative_eq!(radians_to_degrees(PI), 180.0);
        assert_relative_eq!(degrees_to_radians(90.0), PI / 2.0);
        assert_relative_eq!(radians_to_degrees(degrees_to_radians(37.5)), 37.5, epsilon = 1e-12);
    }
}
