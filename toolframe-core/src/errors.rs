//! Error types for the checked accessor surface.
//!
//! The decomposition routines themselves are total: they accept any real
//! input and produce a defined numeric result (see the crate docs on
//! preconditions). Errors arise only from the checked accessors -- indexed
//! component access and normalization of a degenerate quaternion.
//!
//! # Usage
//!
//! Fallible functions return [`FrameResult<T>`], which is
//! `Result<T, FrameError>`. Use the constructor method for consistent error
//! creation:
//!
//! ```
//! use toolframe_core::{FrameError, MathErrorKind};
//!
//! fn checked_recip(x: f64) -> Result<f64, FrameError> {
//!     if x == 0.0 {
//!         return Err(FrameError::math_error(
//!             "checked_recip",
//!             MathErrorKind::DivisionByZero,
//!             "argument is zero",
//!         ));
//!     }
//!     Ok(1.0 / x)
//! }
//! ```

use thiserror::Error;

/// Classification of mathematical errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathErrorKind {
    /// Input value is invalid for the operation (e.g. index out of bounds).
    InvalidInput,
    /// Attempted division by zero or near-zero value.
    DivisionByZero,
}

/// Error type for frame math operations.
#[derive(Error, Debug)]
pub enum FrameError {
    /// Numerical operation failure.
    #[error("math error in {operation} ({kind:?}): {message}")]
    MathError {
        operation: String,
        kind: MathErrorKind,
        message: String,
    },
}

/// Convenience alias for `Result<T, FrameError>`.
pub type FrameResult<T> = Result<T, FrameError>;

impl FrameError {
    /// Creates a [`MathError`](Self::MathError) with the given kind.
    pub fn math_error(operation: &str, kind: MathErrorKind, reason: &str) -> Self {
        Self::MathError {
            operation: operation.to_string(),
            kind,
            message: reason.to_string(),
        }
    }
}
