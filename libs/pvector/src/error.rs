//! # Error Types
//!
//! Vector arithmetic never fails: degenerate inputs produce `NaN` or
//! infinities that propagate through later calls. Errors only exist at the
//! strict conversion boundary (slices of the wrong length, malformed text).

use thiserror::Error;

use crate::core::operand::Axis;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors raised by strict conversions into [`crate::PVector`].
///
/// ## Example
///
/// ```rust
/// use pvector::{PVector, PVectorError};
///
/// match "{ x: 1, y: oops, z: 0 }".parse::<PVector>() {
///     Ok(v) => println!("parsed {v}"),
///     Err(PVectorError::InvalidComponent { axis, value }) => {
///         eprintln!("bad {axis} component: {value}")
///     }
///     Err(e) => eprintln!("other error: {e}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PVectorError {
    /// A slice did not contain two or three components.
    #[error("expected 2 or 3 components, got {0}")]
    InvalidLength(usize),

    /// Text did not follow the `{ x: .., y: .., z: .. }` layout.
    #[error("cannot parse vector from {input:?}: {reason}")]
    Parse {
        /// The rejected input
        input: String,
        /// What was wrong with it
        reason: String,
    },

    /// A component in the text form was not a number.
    #[error("invalid {axis} component: {value:?}")]
    InvalidComponent {
        /// Axis the component belongs to
        axis: Axis,
        /// The raw text of the component
        value: String,
    },
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for strict vector conversions.
pub type PVectorResult<T> = Result<T, PVectorError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Test error display messages.
    #[test]
    fn test_error_display() {
        let len_err = PVectorError::InvalidLength(4);
        assert_eq!(len_err.to_string(), "expected 2 or 3 components, got 4");

        let comp_err = PVectorError::InvalidComponent {
            axis: Axis::Y,
            value: "oops".to_string(),
        };
        assert!(comp_err.to_string().contains("y component"));
        assert!(comp_err.to_string().contains("oops"));
    }

    /// Test error types are Send + Sync for cross-thread use.
    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PVectorError>();
    }
}
