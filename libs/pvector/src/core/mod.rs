//! Core data structures for the vector library.
//!
//! [`vector`] defines the field model; the sibling modules each add one slice
//! of the method set to `PVector` in dependency order: operands, per-axis
//! helpers, whole-vector algebra, measurements, conversions, operators.

pub mod operand;
pub mod vector;

mod algebra;
mod axis;
mod convert;
mod measure;
mod ops;
