//! Tests for the derived non-mutating layer.

use super::*;

#[test]
fn derived_functions_leave_input_untouched() {
    let v = PVector::new(10.0, 20.0, 2.0);
    let sum = add(&v, 1.0);
    let crossed = cross(&v, &PVector::new(60.0, 80.0, 6.0));
    assert_eq!(sum, PVector::new(11.0, 21.0, 3.0));
    assert_eq!(crossed, PVector::new(-40.0, 60.0, -400.0));
    assert_eq!(v, PVector::new(10.0, 20.0, 2.0));
}

#[test]
fn derived_matches_in_place_method() {
    let v = PVector::new(3.0, -4.0, 12.0);
    let mut expected = v;
    expected.clamp(-1.0, 5.0).invert_y().lerp(PVector::UNIT_Z, 0.25);

    let step = clamp(&v, -1.0, 5.0);
    let step = invert_y(&step);
    let got = lerp(&step, PVector::UNIT_Z, 0.25);
    assert_eq!(got, expected);
}

#[test]
fn derived_projection_and_magnitude() {
    let v = PVector::new_2d(100.0, 0.0);
    assert_eq!(project_onto(&v, &PVector::new_2d(100.0, 100.0)), PVector::new_2d(50.0, 50.0));
    assert_eq!(set_magnitude(&PVector::ZERO, 3.0), PVector::new(3.0, 0.0, 0.0));
    assert_eq!(zero(&v), PVector::ZERO);
}

#[test]
fn derived_apply_runs_on_copy() {
    let v = PVector::new(1.0, 1.0, 1.0);
    let out = apply(&v, |p| {
        p.set_z(9.0);
    });
    assert_eq!(out.z, 9.0);
    assert_eq!(v.z, 1.0);
}

#[test]
fn derived_rounding() {
    let v = PVector::new(1.26, -1.26, 0.5);
    assert_eq!(to_fixed(&v, 1), PVector::new(1.3, -1.3, 0.5));
    assert_eq!(floor(&v).to_array(), [1.0, -2.0, 0.0]);
    assert_eq!(ceil(&v).to_array(), [2.0, -1.0, 1.0]);
    assert_eq!(round(&v).to_array(), [1.0, -1.0, 1.0]);
}
