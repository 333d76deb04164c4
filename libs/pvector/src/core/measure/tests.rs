//! Tests for scalar reads and comparisons.

use std::f64::consts::{FRAC_PI_2, PI};

use approx::assert_relative_eq;

use super::*;

#[test]
fn magnitude_of_3_4_5_triangle() {
    assert_eq!(PVector::new(4.0, 3.0, 0.0).magnitude(), 5.0);
}

#[test]
fn magnitude_sq_sums_squares() {
    assert_eq!(PVector::new(10.0, 10.0, 25.0).magnitude_sq(), 825.0);
}

#[test]
fn dist_is_euclidean() {
    let a = PVector::new(100.0, 50.0, 0.0);
    let b = PVector::new(200.0, 60.0, 0.0);
    assert_eq!(((a.dist(&b) * 10.0).round()) / 10.0, 100.5);
}

/// Z participates in the squared distance.
#[test]
fn dist_sq_uses_all_three_axes() {
    let a = PVector::new(0.0, 0.0, 0.0);
    let b = PVector::new(1.0, 2.0, 2.0);
    assert_eq!(a.dist_sq(&b), 9.0);
    assert_eq!(a.dist(&b), 3.0);
}

#[test]
fn per_axis_distance_is_target_minus_self() {
    let a = PVector::new(100.0, 50.0, 30.0);
    let b = PVector::new(200.0, 60.0, 10.0);
    assert_eq!(a.dist_x(&b), 100.0);
    assert_eq!(a.dist_y(&b), 10.0);
    assert_eq!(a.dist_z(&b), -20.0);
}

#[test]
fn manhattan_dist_sums_signed_differences() {
    let a = PVector::new(100.0, 50.0, 30.0);
    let b = PVector::new(200.0, 60.0, 10.0);
    assert_eq!(a.manhattan_dist(&b), 90.0);
    assert_eq!(a.manhattan_dist_abs(&b), 130.0);
}

#[test]
fn angle_2d_follows_atan2() {
    assert_eq!(PVector::new(0.0, 5.0, 0.0).angle_2d(), FRAC_PI_2);
    assert_eq!(PVector::new(-1.0, 0.0, 0.0).angle_2d(), PI);
    assert_eq!(PVector::ZERO.angle_2d(), 0.0);
}

#[test]
fn dot_product() {
    let a = PVector::new(10.0, 20.0, 2.0);
    assert_eq!(a.dot(&PVector::new(60.0, 80.0, 6.0)), 2212.0);
    assert_eq!(a.dot(&[1.0, 1.0]), 30.0);
}

// =============================================================================
// ZERO / EQUALITY
// =============================================================================

#[test]
fn is_zero_boundary() {
    // 0.9e-4² = 8.1e-9 is below the threshold, 1.1e-4² = 1.21e-8 above.
    assert!(PVector::new(0.9e-4, 0.0, 0.0).is_zero());
    assert!(!PVector::new(1.1e-4, 0.0, 0.0).is_zero());
}

/// The comparison is strict: exactly the epsilon is not zero.
#[test]
fn is_zero_is_strict_at_epsilon() {
    let v = PVector::new(ZERO_EPSILON.sqrt(), 0.0, 0.0);
    let at_epsilon = v.magnitude_sq();
    assert_eq!(v.is_zero(), at_epsilon < ZERO_EPSILON);
    assert!(!PVector::new(ZERO_EPSILON, ZERO_EPSILON, 1.0).is_zero());
}

#[test]
fn is_zero_with_custom_epsilon() {
    let config = VectorConfig::new(1e-2, 8, 0.0).unwrap();
    let v = PVector::new(0.05, 0.0, 0.0);
    assert!(v.is_zero_with(&config));
    assert!(!v.is_zero());
}

#[test]
fn is_equal_to_is_exact() {
    let a = PVector::new(1.0, 2.0, 3.0);
    assert!(a.is_equal_to(&PVector::new(1.0, 2.0, 3.0)));
    assert!(!a.is_equal_to(&PVector::new(1.0, 2.0, 3.000_001)));
}

#[test]
fn is_equal_to_matches_default_config() {
    let a = PVector::new(1.0, 2.0, 3.0);
    let config = VectorConfig::default();
    for b in [PVector::new(1.0, 2.0, 3.0), PVector::new(1.0, 2.0, 3.000_001)] {
        assert_eq!(a.is_equal_to(&b), a.is_equal_with(&b, &config));
        assert_eq!(a.is_equal_to(&b), a.is_equal_within(&b, DEFAULT_EQUALITY_TOLERANCE));
    }
}

#[test]
fn is_equal_within_tolerance() {
    let a = PVector::new(1.0, 2.0, 3.0);
    assert!(a.is_equal_within(&[1.1, 1.9, 3.0], 0.11));
    assert!(!a.is_equal_within(&[1.2, 2.0, 3.0], 0.11));
}

#[test]
fn is_equal_with_config_tolerance() {
    let config = VectorConfig::new(1e-8, 8, 0.5).unwrap();
    let a = PVector::new(1.0, 2.0, 3.0);
    assert!(a.is_equal_with(&PVector::new(1.4, 2.4, 2.6), &config));
}

#[test]
fn nan_is_never_equal() {
    let a = PVector::new(f64::NAN, 0.0, 0.0);
    assert!(!a.is_equal_to(&a));
}

#[test]
fn unit_vectors_have_unit_length() {
    for v in [PVector::UNIT_X, PVector::UNIT_Y, PVector::UNIT_Z] {
        assert_relative_eq!(v.magnitude(), 1.0);
    }
}
