//! Scalar-producing reads and comparisons. Nothing here mutates.

use config::constants::{VectorConfig, DEFAULT_EQUALITY_TOLERANCE, ZERO_EPSILON};

use super::operand::VectorLike;
use super::vector::PVector;

impl PVector {
    /// Euclidean length.
    ///
    /// # Examples
    /// ```
    /// use pvector::PVector;
    /// assert_eq!(PVector::new(4.0, 3.0, 0.0).magnitude(), 5.0);
    /// ```
    pub fn magnitude(&self) -> f64 {
        self.magnitude_sq().sqrt()
    }

    /// Squared length, `x² + y² + z²`.
    pub fn magnitude_sq(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Euclidean distance to `other`.
    pub fn dist(&self, other: &impl VectorLike) -> f64 {
        self.dist_sq(other).sqrt()
    }

    /// Squared distance to `other` over all three axes.
    pub fn dist_sq(&self, other: &impl VectorLike) -> f64 {
        let (dx, dy, dz) = (self.dist_x(other), self.dist_y(other), self.dist_z(other));
        dx * dx + dy * dy + dz * dz
    }

    /// Signed X difference, `other.x - self.x`.
    pub fn dist_x(&self, other: &impl VectorLike) -> f64 {
        other.x() - self.x
    }

    /// Signed Y difference, `other.y - self.y`.
    pub fn dist_y(&self, other: &impl VectorLike) -> f64 {
        other.y() - self.y
    }

    /// Signed Z difference, `other.z - self.z`.
    pub fn dist_z(&self, other: &impl VectorLike) -> f64 {
        other.z() - self.z
    }

    /// Sum of the signed per-axis differences.
    ///
    /// Differences of opposite sign cancel out, so this is not a metric.
    /// Use [`Self::manhattan_dist_abs`] for the taxicab distance.
    ///
    /// # Examples
    /// ```
    /// use pvector::PVector;
    /// let a = PVector::new(0.0, 0.0, 0.0);
    /// assert_eq!(a.manhattan_dist(&PVector::new(1.0, -1.0, 0.0)), 0.0);
    /// assert_eq!(a.manhattan_dist_abs(&PVector::new(1.0, -1.0, 0.0)), 2.0);
    /// ```
    pub fn manhattan_dist(&self, other: &impl VectorLike) -> f64 {
        self.dist_x(other) + self.dist_y(other) + self.dist_z(other)
    }

    /// Taxicab distance: sum of absolute per-axis differences.
    pub fn manhattan_dist_abs(&self, other: &impl VectorLike) -> f64 {
        self.dist_x(other).abs() + self.dist_y(other).abs() + self.dist_z(other).abs()
    }

    /// Direction in the XY plane, `atan2(y, x)`, in radians.
    pub fn angle_2d(&self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Dot product.
    pub fn dot(&self, other: &impl VectorLike) -> f64 {
        self.x * other.x() + self.y * other.y() + self.z * other.z()
    }

    /// True when the squared magnitude is below
    /// [`ZERO_EPSILON`](config::constants::ZERO_EPSILON).
    ///
    /// # Examples
    /// ```
    /// use pvector::PVector;
    /// assert!(PVector::new(1e-5, 0.0, 0.0).is_zero());
    /// assert!(!PVector::new(1e-3, 0.0, 0.0).is_zero());
    /// ```
    pub fn is_zero(&self) -> bool {
        self.magnitude_sq() < ZERO_EPSILON
    }

    /// [`Self::is_zero`] with the threshold taken from `config`.
    pub fn is_zero_with(&self, config: &VectorConfig) -> bool {
        self.magnitude_sq() < config.zero_epsilon
    }

    /// Exact per-axis equality with any vector-like.
    pub fn is_equal_to(&self, other: &impl VectorLike) -> bool {
        self.is_equal_within(other, DEFAULT_EQUALITY_TOLERANCE)
    }

    /// True when every axis differs from `other` by at most `tolerance`.
    ///
    /// # Examples
    /// ```
    /// use pvector::PVector;
    /// let a = PVector::new(1.0, 2.0, 3.0);
    /// assert!(a.is_equal_within(&PVector::new(1.05, 1.95, 3.0), 0.1));
    /// assert!(!a.is_equal_to(&PVector::new(1.05, 1.95, 3.0)));
    /// ```
    pub fn is_equal_within(&self, other: &impl VectorLike, tolerance: f64) -> bool {
        (self.x - other.x()).abs() <= tolerance
            && (self.y - other.y()).abs() <= tolerance
            && (self.z - other.z()).abs() <= tolerance
    }

    /// [`Self::is_equal_within`] with the tolerance taken from `config`.
    pub fn is_equal_with(&self, other: &impl VectorLike, config: &VectorConfig) -> bool {
        self.is_equal_within(other, config.equality_tolerance)
    }
}

#[cfg(test)]
mod tests;
