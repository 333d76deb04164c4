//! Tests for the per-axis families.

use super::*;

// =============================================================================
// SET
// =============================================================================

#[test]
fn set_x_from_scalar_and_vector() {
    let mut v = PVector::new(1.0, 2.0, 3.0);
    v.set_x(9.0);
    assert_eq!(v.x, 9.0);
    v.set_x(PVector::new(4.0, 100.0, 100.0));
    assert_eq!(v, PVector::new(4.0, 2.0, 3.0));
}

/// An explicit zero on the source vector is copied, not skipped.
#[test]
fn set_copies_explicit_zero_components() {
    let mut v = PVector::new(5.0, 5.0, 5.0);
    v.set(PVector::new(0.0, 1.0, 0.0));
    assert_eq!(v, PVector::new(0.0, 1.0, 0.0));
}

#[test]
fn set_from_two_axis_array_zeroes_z() {
    let mut v = PVector::new(5.0, 5.0, 5.0);
    v.set([1.0, 2.0]);
    assert_eq!(v, PVector::new(1.0, 2.0, 0.0));
}

#[test]
fn set_xyz_overwrites_everything() {
    let mut v = PVector::new(5.0, 5.0, 5.0);
    v.set_xyz(1.0, 2.0, 3.0);
    assert_eq!(v.to_array(), [1.0, 2.0, 3.0]);
}

// =============================================================================
// ARITHMETIC
// =============================================================================

#[test]
fn add_scalar_and_vector() {
    let mut v = PVector::new(10.0, 20.0, 30.0);
    v.add(1.0).add(PVector::new(1.0, 2.0, 3.0));
    assert_eq!(v, PVector::new(12.0, 23.0, 34.0));
}

#[test]
fn single_axis_arithmetic_leaves_other_axes() {
    let mut v = PVector::new(10.0, 20.0, 30.0);
    v.add_x(5.0).sub_y(5.0).mult_z(2.0);
    assert_eq!(v, PVector::new(15.0, 15.0, 60.0));
    v.div_x(3.0).div_y(PVector::new(0.0, 5.0, 0.0));
    assert_eq!(v, PVector::new(5.0, 3.0, 60.0));
}

#[test]
fn mult_by_vector_is_axis_wise() {
    let mut v = PVector::new(2.0, 3.0, 4.0);
    v.mult(PVector::new(10.0, 100.0, 0.5));
    assert_eq!(v, PVector::new(20.0, 300.0, 2.0));
}

#[test]
fn div_by_zero_follows_ieee() {
    let mut v = PVector::new(1.0, -1.0, 0.0);
    v.div(0.0);
    assert_eq!(v.x, f64::INFINITY);
    assert_eq!(v.y, f64::NEG_INFINITY);
    assert!(v.z.is_nan());
}

// =============================================================================
// BOUNDS
// =============================================================================

#[test]
fn min_and_max_are_per_axis() {
    let mut v = PVector::new(-5.0, 50.0, 150.0);
    v.min(0.0).max(100.0);
    assert_eq!(v, PVector::new(0.0, 50.0, 100.0));
}

#[test]
fn min_with_vector_bounds() {
    let mut v = PVector::new(1.0, 1.0, 1.0);
    v.min(PVector::new(2.0, 0.0, 5.0));
    assert_eq!(v, PVector::new(2.0, 1.0, 5.0));
}

#[test]
fn max_single_axis() {
    let mut v = PVector::new(10.0, 10.0, 10.0);
    v.max_y(3.0).min_z(20.0);
    assert_eq!(v, PVector::new(10.0, 3.0, 20.0));
}

#[test]
fn clamp_with_vector_bounds() {
    let mut v = PVector::new(-1.0, 5.0, 11.0);
    v.clamp(PVector::new(0.0, 0.0, 0.0), PVector::new(10.0, 4.0, 10.0));
    assert_eq!(v, PVector::new(0.0, 4.0, 10.0));
}

#[test]
fn clamp_single_axis() {
    let mut v = PVector::new(-1.0, -1.0, -1.0);
    v.clamp_x(0.0, 1.0).clamp_z(-5.0, -2.0);
    assert_eq!(v, PVector::new(0.0, -1.0, -2.0));
}

// =============================================================================
// INVERT / LERP
// =============================================================================

#[test]
fn invert_twice_is_identity() {
    let original = PVector::new(3.0, -4.0, 5.5);
    let mut v = original;
    v.invert().invert();
    assert!(v.is_equal_to(&original));
}

#[test]
fn invert_single_axes() {
    let mut v = PVector::new(1.0, 2.0, 3.0);
    v.invert_x().invert_z();
    assert_eq!(v, PVector::new(-1.0, 2.0, -3.0));
    v.invert_y();
    assert_eq!(v, PVector::new(-1.0, -2.0, -3.0));
}

#[test]
fn lerp_toward_vector() {
    let mut v = PVector::new(10.0, 15.0, 20.0);
    v.lerp(PVector::new(20.0, 20.0, 10.0), 0.5);
    assert_eq!(v, PVector::new(15.0, 17.5, 15.0));
}

#[test]
fn lerp_single_axis_toward_scalar() {
    let mut v = PVector::new(10.0, 10.0, 10.0);
    v.lerp_x(20.0, 0.75).lerp_y(0.0, 1.0).lerp_z(50.0, 0.0);
    assert_eq!(v, PVector::new(17.5, 0.0, 10.0));
}
