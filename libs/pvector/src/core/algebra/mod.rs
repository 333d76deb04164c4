//! Whole-vector algebra: normalization, magnitude control, planar rotation,
//! cross product and projection.
//!
//! ## Degenerate inputs
//!
//! - `normalize` on the zero vector is a no-op.
//! - `set_magnitude` on the zero vector points the result along +X.
//! - `project_onto` a zero vector divides by zero and leaves `NaN` on every
//!   axis. This is the documented result, not an error.

use tracing::debug;

use super::operand::{Operand, VectorLike};
use super::vector::PVector;

impl PVector {
    /// Scales to unit length in place. The zero vector is left unchanged.
    ///
    /// # Examples
    /// ```
    /// use pvector::PVector;
    /// let mut v = PVector::new(3.0, 0.0, 4.0);
    /// v.normalize();
    /// assert_eq!(v, PVector::new(0.6, 0.0, 0.8));
    /// ```
    pub fn normalize(&mut self) -> &mut Self {
        let mag_sq = self.magnitude_sq();
        if mag_sq > 0.0 {
            self.div(mag_sq.sqrt());
        } else {
            debug!("normalize on a zero vector left unchanged");
        }
        self
    }

    /// Rescales to the given length, a scalar or another vector's magnitude.
    ///
    /// A zero vector has no direction, so it becomes `(m, 0, 0)`.
    ///
    /// # Examples
    /// ```
    /// use pvector::PVector;
    /// let mut v = PVector::ZERO;
    /// v.set_magnitude(5.0);
    /// assert_eq!(v, PVector::new(5.0, 0.0, 0.0));
    /// ```
    pub fn set_magnitude(&mut self, magnitude: impl Into<Operand>) -> &mut Self {
        let magnitude = magnitude.into().magnitude();
        if self.magnitude_sq() == 0.0 {
            debug!(magnitude, "set_magnitude on a zero vector points along +X");
            return self.set_xyz(magnitude, 0.0, 0.0);
        }
        self.normalize().mult(magnitude)
    }

    /// Lengthens the vector to `magnitude` if it is currently shorter.
    pub fn min_magnitude(&mut self, magnitude: impl Into<Operand>) -> &mut Self {
        let magnitude = magnitude.into().magnitude();
        if self.magnitude_sq() < magnitude * magnitude {
            self.normalize().mult(magnitude);
        }
        self
    }

    /// Shortens the vector to `magnitude` if it is currently longer.
    ///
    /// # Examples
    /// ```
    /// use pvector::PVector;
    /// let mut v = PVector::new(30.0, 40.0, 0.0);
    /// v.max_magnitude(10.0);
    /// assert_eq!(v, PVector::new(6.0, 8.0, 0.0));
    /// ```
    pub fn max_magnitude(&mut self, magnitude: impl Into<Operand>) -> &mut Self {
        let magnitude = magnitude.into().magnitude();
        if self.magnitude_sq() > magnitude * magnitude {
            self.normalize().mult(magnitude);
        }
        self
    }

    /// Keeps the magnitude inside `[min, max]`.
    pub fn clamp_magnitude(
        &mut self,
        min: impl Into<Operand>,
        max: impl Into<Operand>,
    ) -> &mut Self {
        self.min_magnitude(min).max_magnitude(max)
    }

    /// Points the vector at `angle` radians in the XY plane.
    ///
    /// The new `x`/`y` are scaled by the full pre-call [`magnitude`], so a
    /// nonzero `z` feeds the planar length; `z` itself is untouched and the
    /// previous direction is discarded.
    ///
    /// [`magnitude`]: PVector::magnitude
    ///
    /// # Examples
    /// ```
    /// use pvector::PVector;
    /// let mut v = PVector::new(10.0, 0.0, 0.0);
    /// v.rotate_to(std::f64::consts::FRAC_PI_2).to_fixed(5);
    /// assert_eq!(v, PVector::new(0.0, 10.0, 0.0));
    /// ```
    pub fn rotate_to(&mut self, angle: f64) -> &mut Self {
        let length = self.magnitude();
        self.x = angle.cos() * length;
        self.y = angle.sin() * length;
        self
    }

    /// Rotates by `delta` radians around the Z axis.
    pub fn rotate_by(&mut self, delta: f64) -> &mut Self {
        let angle = self.angle_2d() + delta;
        self.rotate_to(angle)
    }

    /// Replaces the receiver with `self × other`.
    ///
    /// # Examples
    /// ```
    /// use pvector::PVector;
    /// let mut v = PVector::UNIT_X;
    /// v.cross(&PVector::UNIT_Y);
    /// assert_eq!(v, PVector::UNIT_Z);
    /// ```
    pub fn cross(&mut self, other: &impl VectorLike) -> &mut Self {
        let (ax, ay, az) = (self.x, self.y, self.z);
        let (bx, by, bz) = (other.x(), other.y(), other.z());
        self.x = ay * bz - by * az;
        self.y = az * bx - bz * ax;
        self.z = ax * by - bx * ay;
        self
    }

    /// Replaces the receiver with its projection onto `other`.
    ///
    /// Projecting onto the zero vector yields `NaN` on every axis.
    ///
    /// # Examples
    /// ```
    /// use pvector::PVector;
    /// let mut v = PVector::new_2d(100.0, 0.0);
    /// v.project_onto(&PVector::new_2d(100.0, 100.0));
    /// assert_eq!(v, PVector::new_2d(50.0, 50.0));
    /// ```
    pub fn project_onto(&mut self, other: &impl VectorLike) -> &mut Self {
        let target = PVector::from_like(other);
        let denominator = target.magnitude_sq();
        if denominator == 0.0 {
            debug!("project_onto a zero vector; result is NaN");
        }
        let coeff = self.dot(&target) / denominator;
        *self = target;
        self.mult(coeff)
    }

    /// Runs `f` on the receiver and returns it, for chaining custom steps.
    ///
    /// # Examples
    /// ```
    /// use pvector::PVector;
    /// let mut v = PVector::new(1.0, 2.0, 3.0);
    /// v.apply(|p| { p.mult_x(2.0).mult_y(2.0); }).add(1.0);
    /// assert_eq!(v, PVector::new(3.0, 5.0, 4.0));
    /// ```
    pub fn apply(&mut self, f: impl FnOnce(&mut PVector)) -> &mut Self {
        f(self);
        self
    }
}
