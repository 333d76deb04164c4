//! # Config Crate
//!
//! Centralized numeric constants for the pvector workspace. Tolerances,
//! rounding precision and equality defaults live here so the vector crate
//! carries no literals of its own.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{ZERO_EPSILON, DEFAULT_FIXED_PRECISION};
//!
//! // A squared magnitude below ZERO_EPSILON counts as the zero vector
//! let mag_sq: f64 = 1e-9;
//! assert!(mag_sq < ZERO_EPSILON);
//!
//! // Rounding defaults to eight decimal digits
//! assert_eq!(DEFAULT_FIXED_PRECISION, 8);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Validated Snapshots**: [`constants::VectorConfig`] rejects nonsense values

pub mod constants;
