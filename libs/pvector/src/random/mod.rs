//! Random vector factories.
//!
//! Every factory has a `_with` form taking the generator explicitly, so
//! callers can seed it and get reproducible output. The plain forms draw
//! from `rand::thread_rng()`.
//!
//! ## Sampling
//!
//! - `random_2d`: uniform angle in `[0, 2π)` fed to `PVector::from_angle`.
//! - `random_3d`: uniform `z` in `[-1, 1]` and uniform azimuth; `x` and `y`
//!   lie on the circle of radius `sqrt(1 - z²)`. This is uniform over the
//!   sphere, unlike normalizing three independent samples.
//! - `random`: each axis uniform in `[0, 1)`, optionally scaled or mapped
//!   into an axis-wise range.

use std::f64::consts::TAU;

use rand::Rng;

use crate::core::vector::PVector;

impl PVector {
    /// Unit vector in the XY plane with a uniformly random direction.
    pub fn random_2d() -> Self {
        Self::random_2d_with(&mut rand::thread_rng())
    }

    /// [`Self::random_2d`] drawing from `rng`.
    pub fn random_2d_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from_angle(rng.gen_range(0.0..TAU))
    }

    /// Unit vector with a direction uniformly distributed over the sphere.
    pub fn random_3d() -> Self {
        Self::random_3d_with(&mut rand::thread_rng())
    }

    /// [`Self::random_3d`] drawing from `rng`.
    ///
    /// # Examples
    /// ```
    /// use pvector::PVector;
    /// use rand::{rngs::StdRng, SeedableRng};
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let v = PVector::random_3d_with(&mut rng);
    /// assert!((v.magnitude() - 1.0).abs() < 1e-9);
    /// ```
    pub fn random_3d_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let azimuth = rng.gen_range(0.0..TAU);
        let z: f64 = rng.gen_range(-1.0..=1.0);
        let radius = (1.0 - z * z).sqrt();
        Self::new(radius * azimuth.cos(), radius * azimuth.sin(), z)
    }

    /// Each axis uniform in `[0, 1)`.
    pub fn random() -> Self {
        Self::random_with(&mut rand::thread_rng())
    }

    /// [`Self::random`] drawing from `rng`.
    pub fn random_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(rng.gen(), rng.gen(), rng.gen())
    }

    /// Each axis uniform in `[0, max)`, axis by axis.
    pub fn random_scaled(max: &PVector) -> Self {
        Self::random_scaled_with(&mut rand::thread_rng(), max)
    }

    /// [`Self::random_scaled`] drawing from `rng`.
    pub fn random_scaled_with<R: Rng + ?Sized>(rng: &mut R, max: &PVector) -> Self {
        let mut v = Self::random_with(rng);
        v.mult(max);
        v
    }

    /// Each axis uniform in `[min, max)`, axis by axis.
    pub fn random_between(min: &PVector, max: &PVector) -> Self {
        Self::random_between_with(&mut rand::thread_rng(), min, max)
    }

    /// [`Self::random_between`] drawing from `rng`.
    ///
    /// # Examples
    /// ```
    /// use pvector::PVector;
    /// use rand::{rngs::StdRng, SeedableRng};
    ///
    /// let mut rng = StdRng::seed_from_u64(1);
    /// let lo = PVector::new(-1.0, 10.0, 0.0);
    /// let hi = PVector::new(1.0, 20.0, 0.0);
    /// let v = PVector::random_between_with(&mut rng, &lo, &hi);
    /// assert!(v.y >= 10.0 && v.y < 20.0);
    /// ```
    pub fn random_between_with<R: Rng + ?Sized>(rng: &mut R, min: &PVector, max: &PVector) -> Self {
        let mut v = Self::random_with(rng);
        v.mult(*max - min).add(min);
        v
    }
}
