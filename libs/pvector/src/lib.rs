//! Chainable 2D/3D Euclidean vector for graphics, physics and animation code.
//!
//! [`PVector`] is a mutable value with three `f64` fields. Its methods
//! mutate in place and return `&mut Self`, so operations chain; the
//! [`functional`] module offers the same operations as pure functions that
//! return a modified copy.
//!
//! ## Architecture
//!
//! ```text
//! f64 → PVector fields → per-axis helpers (add_x, min_y, lerp_z, ...)
//!     → whole-vector operations (add, normalize, cross, ...)
//!     → functional layer, random factories, conversions
//! ```
//!
//! ## Example
//!
//! ```rust
//! use pvector::{functional, PVector};
//!
//! let mut velocity = PVector::new(3.0, 4.0, 0.0);
//! velocity.mult(2.0).max_magnitude(5.0);
//! assert_eq!(velocity.magnitude(), 5.0);
//!
//! let position = PVector::new(1.0, 1.0, 0.0);
//! let next = functional::add(&position, velocity);
//! assert_eq!(position, PVector::new(1.0, 1.0, 0.0));
//! assert_eq!(next.to_string(), "{ x: 4, y: 5, z: 0 }");
//! ```

pub mod core;
pub mod error;
pub mod functional;
pub mod random;
pub mod scalar;

// Re-export public API
pub use crate::core::operand::{Axis, Operand, VectorLike};
pub use crate::core::vector::PVector;
pub use error::{PVectorError, PVectorResult};
pub use scalar::{angle_between, degrees_to_radians, lerp_val, radians_to_degrees};
