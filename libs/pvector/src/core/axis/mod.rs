//! Per-axis building blocks.
//!
//! Every family comes as `op_x`, `op_y`, `op_z` plus a whole-vector `op`
//! that applies the same argument to all three axes. Arguments are
//! [`Operand`]s: a scalar is used as-is, a vector contributes its matching
//! axis.
//!
//! `min`/`max`/`clamp` work axis by axis. They never look at the magnitude;
//! see `min_magnitude` and friends for that.

use super::operand::{Axis, Operand};
use super::vector::PVector;
use crate::scalar::lerp_val;

impl PVector {
    fn combine_axis(&mut self, axis: Axis, operand: &Operand, f: impl Fn(f64, f64) -> f64) {
        let slot = self.axis_mut(axis);
        *slot = f(*slot, operand.component(axis));
    }

    fn clamp_axis(&mut self, axis: Axis, min: &Operand, max: &Operand) {
        let (lo, hi) = (min.component(axis), max.component(axis));
        let slot = self.axis_mut(axis);
        if *slot < lo {
            *slot = lo;
        } else if *slot > hi {
            *slot = hi;
        }
    }
}

/// Generates a binary per-axis family: the whole-vector method and its three
/// single-axis variants.
macro_rules! axis_family {
    ($(
        $(#[$doc:meta])*
        $whole:ident / $x:ident, $y:ident, $z:ident => |$cur:ident, $arg:ident| $body:expr;
    )*) => {
        impl PVector {
            $(
                $(#[$doc])*
                pub fn $whole(&mut self, v: impl Into<Operand>) -> &mut Self {
                    let v = v.into();
                    for axis in Axis::ALL {
                        self.combine_axis(axis, &v, |$cur, $arg| $body);
                    }
                    self
                }

                #[doc = concat!("[`Self::", stringify!($whole), "`] on the X axis only.")]
                pub fn $x(&mut self, v: impl Into<Operand>) -> &mut Self {
                    self.combine_axis(Axis::X, &v.into(), |$cur, $arg| $body);
                    self
                }

                #[doc = concat!("[`Self::", stringify!($whole), "`] on the Y axis only.")]
                pub fn $y(&mut self, v: impl Into<Operand>) -> &mut Self {
                    self.combine_axis(Axis::Y, &v.into(), |$cur, $arg| $body);
                    self
                }

                #[doc = concat!("[`Self::", stringify!($whole), "`] on the Z axis only.")]
                pub fn $z(&mut self, v: impl Into<Operand>) -> &mut Self {
                    self.combine_axis(Axis::Z, &v.into(), |$cur, $arg| $body);
                    self
                }
            )*
        }
    };
}

axis_family! {
    /// Copies a scalar into every axis, or a vector axis by axis.
    ///
    /// # Examples
    /// ```
    /// use pvector::PVector;
    /// let mut v = PVector::ZERO;
    /// v.set(3.0);
    /// assert_eq!(v, PVector::new(3.0, 3.0, 3.0));
    /// v.set(PVector::new(1.0, 2.0, 0.0));
    /// assert_eq!(v, PVector::new(1.0, 2.0, 0.0));
    /// ```
    set / set_x, set_y, set_z => |_cur, arg| arg;

    /// Adds a scalar or a vector.
    add / add_x, add_y, add_z => |cur, arg| cur + arg;

    /// Subtracts a scalar or a vector.
    sub / sub_x, sub_y, sub_z => |cur, arg| cur - arg;

    /// Multiplies by a scalar, or axis-wise by a vector.
    mult / mult_x, mult_y, mult_z => |cur, arg| cur * arg;

    /// Divides by a scalar, or axis-wise by a vector.
    ///
    /// Division by zero follows IEEE 754 and yields infinities or `NaN`.
    div / div_x, div_y, div_z => |cur, arg| cur / arg;

    /// Raises each axis to at least the given bound.
    ///
    /// # Examples
    /// ```
    /// use pvector::PVector;
    /// let mut v = PVector::new(-5.0, 2.0, 8.0);
    /// v.min(0.0);
    /// assert_eq!(v, PVector::new(0.0, 2.0, 8.0));
    /// ```
    min / min_x, min_y, min_z => |cur, arg| if cur < arg { arg } else { cur };

    /// Lowers each axis to at most the given bound.
    max / max_x, max_y, max_z => |cur, arg| if cur > arg { arg } else { cur };
}

impl PVector {
    /// Sets all three axes from exact values.
    pub fn set_xyz(&mut self, x: f64, y: f64, z: f64) -> &mut Self {
        *self = Self::new(x, y, z);
        self
    }

    /// Keeps each axis inside `[min, max]`.
    ///
    /// Below `min` snaps to `min`; otherwise above `max` snaps to `max`.
    ///
    /// # Examples
    /// ```
    /// use pvector::PVector;
    /// let mut v = PVector::new(-5.0, 50.0, 150.0);
    /// v.clamp(0.0, 100.0);
    /// assert_eq!(v, PVector::new(0.0, 50.0, 100.0));
    /// ```
    pub fn clamp(&mut self, min: impl Into<Operand>, max: impl Into<Operand>) -> &mut Self {
        let (min, max) = (min.into(), max.into());
        for axis in Axis::ALL {
            self.clamp_axis(axis, &min, &max);
        }
        self
    }

    /// [`Self::clamp`] on the X axis only.
    pub fn clamp_x(&mut self, min: impl Into<Operand>, max: impl Into<Operand>) -> &mut Self {
        self.clamp_axis(Axis::X, &min.into(), &max.into());
        self
    }

    /// [`Self::clamp`] on the Y axis only.
    pub fn clamp_y(&mut self, min: impl Into<Operand>, max: impl Into<Operand>) -> &mut Self {
        self.clamp_axis(Axis::Y, &min.into(), &max.into());
        self
    }

    /// [`Self::clamp`] on the Z axis only.
    pub fn clamp_z(&mut self, min: impl Into<Operand>, max: impl Into<Operand>) -> &mut Self {
        self.clamp_axis(Axis::Z, &min.into(), &max.into());
        self
    }

    /// Negates every axis.
    pub fn invert(&mut self) -> &mut Self {
        self.x = -self.x;
        self.y = -self.y;
        self.z = -self.z;
        self
    }

    /// Negates the X axis.
    pub fn invert_x(&mut self) -> &mut Self {
        self.x = -self.x;
        self
    }

    /// Negates the Y axis.
    pub fn invert_y(&mut self) -> &mut Self {
        self.y = -self.y;
        self
    }

    /// Negates the Z axis.
    pub fn invert_z(&mut self) -> &mut Self {
        self.z = -self.z;
        self
    }

    /// Moves each axis toward the target by `amount` (`0` stays, `1` arrives).
    ///
    /// # Examples
    /// ```
    /// use pvector::PVector;
    /// let mut v = PVector::new(10.0, 15.0, 20.0);
    /// v.lerp(PVector::new(20.0, 20.0, 10.0), 0.5);
    /// assert_eq!(v, PVector::new(15.0, 17.5, 15.0));
    /// ```
    pub fn lerp(&mut self, target: impl Into<Operand>, amount: f64) -> &mut Self {
        let target = target.into();
        for axis in Axis::ALL {
            self.combine_axis(axis, &target, |cur, arg| lerp_val(cur, arg, amount));
        }
        self
    }

    /// [`Self::lerp`] on the X axis only.
    pub fn lerp_x(&mut self, target: impl Into<Operand>, amount: f64) -> &mut Self {
        self.combine_axis(Axis::X, &target.into(), |cur, arg| lerp_val(cur, arg, amount));
        self
    }

    /// [`Self::lerp`] on the Y axis only.
    pub fn lerp_y(&mut self, target: impl Into<Operand>, amount: f64) -> &mut Self {
        self.combine_axis(Axis::Y, &target.into(), |cur, arg| lerp_val(cur, arg, amount));
        self
    }

    /// [`Self::lerp`] on the Z axis only.
    pub fn lerp_z(&mut self, target: impl Into<Operand>, amount: f64) -> &mut Self {
        self.combine_axis(Axis::Z, &target.into(), |cur, arg| lerp_val(cur, arg, amount));
        self
    }
}

#[cfg(test)]
mod tests;
