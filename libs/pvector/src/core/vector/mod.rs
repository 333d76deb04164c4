//! The [`PVector`] value type: three `f64` fields and its constructors.
//!
//! Instances are mutable working values. Mutating methods (spread across the
//! sibling modules) change the receiver in place and return `&mut Self` so
//! calls chain; `Clone`/`Copy` give an independent copy whenever the
//! starting value is still needed.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::operand::{Axis, VectorLike};

/// A 2D/3D Euclidean vector. A 2D vector is one with `z == 0`.
///
/// # Examples
/// ```
/// use pvector::PVector;
///
/// let mut v = PVector::new(100.0, 50.0, 0.0);
/// v.add(10.0).mult(2.0);
/// assert_eq!(v.to_string(), "{ x: 220, y: 120, z: 20 }");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PVector {
    /// The X axis
    pub x: f64,
    /// The Y axis
    pub y: f64,
    /// The Z axis, absent in 2D documents
    #[serde(default)]
    pub z: f64,
}

impl PVector {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Unit vector along X.
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit vector along Y.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit vector along Z.
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a vector from exact components.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Creates a vector in the XY plane.
    pub const fn new_2d(x: f64, y: f64) -> Self {
        Self::new(x, y, 0.0)
    }

    /// Creates a vector from optional components.
    ///
    /// Missing and `NaN` components become `0`.
    ///
    /// # Examples
    /// ```
    /// use pvector::PVector;
    /// let v = PVector::from_options(Some(1.0), None, Some(f64::NAN));
    /// assert_eq!(v, PVector::new(1.0, 0.0, 0.0));
    /// ```
    pub fn from_options(x: Option<f64>, y: Option<f64>, z: Option<f64>) -> Self {
        Self::new(
            coerce(x, Axis::X),
            coerce(y, Axis::Y),
            coerce(z, Axis::Z),
        )
    }

    /// Copies the components of any vector-like value.
    ///
    /// # Examples
    /// ```
    /// use pvector::PVector;
    /// assert_eq!(PVector::from_like(&[4.0, 12.0]), PVector::new(4.0, 12.0, 0.0));
    /// ```
    pub fn from_like<T: VectorLike + ?Sized>(source: &T) -> Self {
        Self::new(source.x(), source.y(), source.z())
    }

    /// Unit vector `(cos θ, sin θ, 0)` for an angle in radians.
    ///
    /// # Examples
    /// ```
    /// use pvector::PVector;
    /// let v = PVector::from_angle(0.0);
    /// assert_eq!(v, PVector::UNIT_X);
    /// ```
    pub fn from_angle(angle: f64) -> Self {
        Self::new_2d(angle.cos(), angle.sin())
    }

    /// Sets every axis to zero.
    pub fn zero(&mut self) -> &mut Self {
        *self = Self::ZERO;
        self
    }

    pub(crate) fn axis(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    pub(crate) fn axis_mut(&mut self, axis: Axis) -> &mut f64 {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
            Axis::Z => &mut self.z,
        }
    }
}

/// Lenient component read: absent or `NaN` values become `0`.
pub(crate) fn coerce(value: Option<f64>, axis: Axis) -> f64 {
    match value {
        Some(v) if !v.is_nan() => v,
        Some(_) => {
            trace!(%axis, "NaN component coerced to 0");
            0.0
        }
        None => {
            trace!(%axis, "missing or non-numeric component coerced to 0");
            0.0
        }
    }
}
