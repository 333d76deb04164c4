//! Non-mutating counterparts of the in-place operations.
//!
//! Each function copies its first argument, runs the method of the same
//! name on the copy and returns it. The table below is the whole layer:
//! adding a mutating method means adding one line here.
//!
//! # Examples
//! ```
//! use pvector::{functional, PVector};
//!
//! let v = PVector::new(3.0, 4.0, 0.0);
//! let unit = functional::normalize(&v);
//! assert_eq!(unit, PVector::new(0.6, 0.8, 0.0));
//! assert_eq!(v, PVector::new(3.0, 4.0, 0.0));
//! ```

use crate::core::operand::{Operand, VectorLike};
use crate::core::vector::PVector;

macro_rules! derive_non_mutating {
    ($($name:ident($($arg:ident: $ty:ty),*);)*) => {
        $(
            #[doc = concat!("Copy of `v` after [`PVector::", stringify!($name), "`].")]
            pub fn $name(v: &PVector $(, $arg: $ty)*) -> PVector {
                let mut out = *v;
                out.$name($($arg),*);
                out
            }
        )*
    };
}

derive_non_mutating! {
    set(value: impl Into<Operand>);
    set_x(value: impl Into<Operand>);
    set_y(value: impl Into<Operand>);
    set_z(value: impl Into<Operand>);
    set_xyz(x: f64, y: f64, z: f64);
    zero();

    add(value: impl Into<Operand>);
    add_x(value: impl Into<Operand>);
    add_y(value: impl Into<Operand>);
    add_z(value: impl Into<Operand>);
    sub(value: impl Into<Operand>);
    sub_x(value: impl Into<Operand>);
    sub_y(value: impl Into<Operand>);
    sub_z(value: impl Into<Operand>);
    mult(value: impl Into<Operand>);
    mult_x(value: impl Into<Operand>);
    mult_y(value: impl Into<Operand>);
    mult_z(value: impl Into<Operand>);
    div(value: impl Into<Operand>);
    div_x(value: impl Into<Operand>);
    div_y(value: impl Into<Operand>);
    div_z(value: impl Into<Operand>);

    min(bound: impl Into<Operand>);
    min_x(bound: impl Into<Operand>);
    min_y(bound: impl Into<Operand>);
    min_z(bound: impl Into<Operand>);
    max(bound: impl Into<Operand>);
    max_x(bound: impl Into<Operand>);
    max_y(bound: impl Into<Operand>);
    max_z(bound: impl Into<Operand>);
    clamp(min: impl Into<Operand>, max: impl Into<Operand>);
    clamp_x(min: impl Into<Operand>, max: impl Into<Operand>);
    clamp_y(min: impl Into<Operand>, max: impl Into<Operand>);
    clamp_z(min: impl Into<Operand>, max: impl Into<Operand>);

    invert();
    invert_x();
    invert_y();
    invert_z();
    lerp(target: impl Into<Operand>, amount: f64);
    lerp_x(target: impl Into<Operand>, amount: f64);
    lerp_y(target: impl Into<Operand>, amount: f64);
    lerp_z(target: impl Into<Operand>, amount: f64);

    normalize();
    set_magnitude(magnitude: impl Into<Operand>);
    min_magnitude(magnitude: impl Into<Operand>);
    max_magnitude(magnitude: impl Into<Operand>);
    clamp_magnitude(min: impl Into<Operand>, max: impl Into<Operand>);
    rotate_to(angle: f64);
    rotate_by(delta: f64);
    cross(other: &impl VectorLike);
    project_onto(other: &impl VectorLike);
    apply(f: impl FnOnce(&mut PVector));

    round();
    floor();
    ceil();
    to_fixed(precision: u32);
    to_fixed_default();
}

#[cfg(test)]
mod tests;
