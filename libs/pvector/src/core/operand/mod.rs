//! Scalar-or-vector arguments and the vector-like interchange contract.
//!
//! Most [`PVector`] operations accept either a bare number, applied to every
//! axis it touches, or a vector-like whose matching axis is used. [`Operand`]
//! is that tagged union; anything implementing [`VectorLike`] converts into
//! it by reference.
//!
//! A vector operand always supplies a component for every axis. Two-axis
//! inputs report `z = 0`, so an explicit zero and a missing axis behave the
//! same, and an explicit zero never falls back to some other value.

use std::fmt;

use glam::{DVec2, DVec3};

use super::vector::PVector;

// =============================================================================
// AXIS
// =============================================================================

/// One of the three scalar components of a vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The X component
    X,
    /// The Y component
    Y,
    /// The Z component
    Z,
}

impl Axis {
    /// All axes in storage order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        };
        f.write_str(name)
    }
}

// =============================================================================
// VECTOR-LIKE
// =============================================================================

/// Anything structurally exposing `x`, `y` and optionally `z`.
///
/// # Examples
/// ```
/// use pvector::VectorLike;
/// let p = [3.0, 4.0];
/// assert_eq!(p.z(), 0.0);
/// ```
pub trait VectorLike {
    /// The X component.
    fn x(&self) -> f64;

    /// The Y component.
    fn y(&self) -> f64;

    /// The Z component, `0` for two-axis values.
    fn z(&self) -> f64 {
        0.0
    }

    /// The component on `axis`.
    fn component(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x(),
            Axis::Y => self.y(),
            Axis::Z => self.z(),
        }
    }
}

impl VectorLike for PVector {
    fn x(&self) -> f64 {
        self.x
    }
    fn y(&self) -> f64 {
        self.y
    }
    fn z(&self) -> f64 {
        self.z
    }
}

impl VectorLike for [f64; 2] {
    fn x(&self) -> f64 {
        self[0]
    }
    fn y(&self) -> f64 {
        self[1]
    }
}

impl VectorLike for [f64; 3] {
    fn x(&self) -> f64 {
        self[0]
    }
    fn y(&self) -> f64 {
        self[1]
    }
    fn z(&self) -> f64 {
        self[2]
    }
}

impl VectorLike for (f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }
    fn y(&self) -> f64 {
        self.1
    }
}

impl VectorLike for (f64, f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }
    fn y(&self) -> f64 {
        self.1
    }
    fn z(&self) -> f64 {
        self.2
    }
}

impl VectorLike for DVec2 {
    fn x(&self) -> f64 {
        self.x
    }
    fn y(&self) -> f64 {
        self.y
    }
}

impl VectorLike for DVec3 {
    fn x(&self) -> f64 {
        self.x
    }
    fn y(&self) -> f64 {
        self.y
    }
    fn z(&self) -> f64 {
        self.z
    }
}

// =============================================================================
// OPERAND
// =============================================================================

/// A scalar or a vector argument.
///
/// # Examples
/// ```
/// use pvector::{Axis, Operand, PVector};
/// let by_scalar = Operand::from(2.0);
/// let by_vector = Operand::from(PVector::new(1.0, 2.0, 3.0));
/// assert_eq!(by_scalar.component(Axis::Z), 2.0);
/// assert_eq!(by_vector.component(Axis::Z), 3.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand {
    /// Applied unchanged to every axis.
    Scalar(f64),
    /// Contributes its matching axis.
    Vector(PVector),
}

impl Operand {
    /// The value this operand contributes to `axis`.
    pub fn component(&self, axis: Axis) -> f64 {
        match self {
            Operand::Scalar(value) => *value,
            Operand::Vector(v) => v.component(axis),
        }
    }

    /// The operand read as a length: the scalar itself, or the vector's
    /// magnitude.
    pub fn magnitude(&self) -> f64 {
        match self {
            Operand::Scalar(value) => *value,
            Operand::Vector(v) => v.magnitude(),
        }
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Operand::Scalar(value)
    }
}

impl From<PVector> for Operand {
    fn from(v: PVector) -> Self {
        Operand::Vector(v)
    }
}

impl From<[f64; 2]> for Operand {
    fn from(v: [f64; 2]) -> Self {
        Operand::Vector(PVector::from_like(&v))
    }
}

impl From<[f64; 3]> for Operand {
    fn from(v: [f64; 3]) -> Self {
        Operand::Vector(PVector::from_like(&v))
    }
}

impl From<DVec2> for Operand {
    fn from(v: DVec2) -> Self {
        Operand::Vector(PVector::from_like(&v))
    }
}

impl From<DVec3> for Operand {
    fn from(v: DVec3) -> Self {
        Operand::Vector(PVector::from_like(&v))
    }
}

impl<T: VectorLike + ?Sized> From<&T> for Operand {
    fn from(v: &T) -> Self {
        Operand::Vector(PVector::from_like(v))
    }
}
