//! Numeric configuration shared by the vector library.
//!
//! Each public item documents its purpose with a minimal example so that
//! downstream code can stay declarative and avoid scattering literals.

use thiserror::Error;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Squared-magnitude threshold below which a vector counts as zero.
///
/// The comparison is strict: a squared magnitude of exactly this value is
/// not zero.
///
/// # Examples
/// ```
/// use config::constants::ZERO_EPSILON;
/// assert_eq!(ZERO_EPSILON, 1e-8);
/// ```
pub const ZERO_EPSILON: f64 = 1e-8;

/// Per-axis tolerance used by equality checks when none is supplied.
///
/// Zero means exact comparison.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_EQUALITY_TOLERANCE;
/// assert_eq!(DEFAULT_EQUALITY_TOLERANCE, 0.0);
/// ```
pub const DEFAULT_EQUALITY_TOLERANCE: f64 = 0.0;

/// Tolerance used when checking that a vector has unit length.
///
/// # Examples
/// ```
/// use config::constants::UNIT_LENGTH_TOLERANCE;
/// let length = 1.0 + 1e-12;
/// assert!((length - 1.0_f64).abs() < UNIT_LENGTH_TOLERANCE);
/// ```
pub const UNIT_LENGTH_TOLERANCE: f64 = 1e-9;

// =============================================================================
// ROUNDING CONSTANTS
// =============================================================================

/// Number of decimal digits kept by `to_fixed` when no precision is given.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_FIXED_PRECISION;
/// assert_eq!(DEFAULT_FIXED_PRECISION, 8);
/// ```
pub const DEFAULT_FIXED_PRECISION: u32 = 8;

/// Largest decimal precision accepted by rounding helpers.
///
/// An `f64` carries roughly 15-17 significant decimal digits; scaling by a
/// larger power of ten only adds noise.
pub const MAX_FIXED_PRECISION: u32 = 15;

// =============================================================================
// CONFIG SNAPSHOT
// =============================================================================

/// Immutable snapshot of the tolerances used by vector comparisons and
/// rounding.
///
/// # Examples
/// ```
/// use config::constants::VectorConfig;
/// let config = VectorConfig::default();
/// assert!(config.zero_epsilon > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VectorConfig {
    /// Squared-magnitude threshold for the zero test.
    pub zero_epsilon: f64,
    /// Decimal digits kept by fixed-precision rounding.
    pub fixed_precision: u32,
    /// Per-axis tolerance for equality checks.
    pub equality_tolerance: f64,
}

impl VectorConfig {
    /// Builds a configuration, validating every field.
    ///
    /// # Examples
    /// ```
    /// use config::constants::VectorConfig;
    /// let cfg = VectorConfig::new(1e-6, 4, 1e-3).expect("valid config");
    /// assert_eq!(cfg.fixed_precision, 4);
    /// ```
    pub fn new(
        zero_epsilon: f64,
        fixed_precision: u32,
        equality_tolerance: f64,
    ) -> Result<Self, ConfigError> {
        if !(zero_epsilon > 0.0) {
            return Err(ConfigError::InvalidEpsilon(zero_epsilon));
        }
        if fixed_precision > MAX_FIXED_PRECISION {
            return Err(ConfigError::InvalidPrecision(fixed_precision));
        }
        if !(equality_tolerance >= 0.0) {
            return Err(ConfigError::InvalidTolerance(equality_tolerance));
        }
        Ok(Self {
            zero_epsilon,
            fixed_precision,
            equality_tolerance,
        })
    }
}

impl Default for VectorConfig {
    fn default() -> Self {
        Self {
            zero_epsilon: ZERO_EPSILON,
            fixed_precision: DEFAULT_FIXED_PRECISION,
            equality_tolerance: DEFAULT_EQUALITY_TOLERANCE,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the zero epsilon is zero, negative or NaN.
    #[error("zero_epsilon must be positive: {0}")]
    InvalidEpsilon(f64),
    /// Raised when the requested precision exceeds [`MAX_FIXED_PRECISION`].
    #[error("fixed_precision must be <= {max}: {0}", max = MAX_FIXED_PRECISION)]
    InvalidPrecision(u32),
    /// Raised when the equality tolerance is negative or NaN.
    #[error("equality_tolerance must be >= 0: {0}")]
    InvalidTolerance(f64),
}
