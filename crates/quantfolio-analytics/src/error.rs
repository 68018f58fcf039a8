//! Error types for portfolio analytics.
//!
//! This module defines the error types used throughout the analytics crate.

use quantfolio_math::MathError;
use thiserror::Error;

/// Result type for analytics operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

/// Errors that can occur during analytics calculations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalyticsError {
    /// Two inputs expected to align in length or shape do not.
    #[error("Dimension mismatch in {context}: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// What was being aligned (e.g. "weights vs covariance matrix").
        context: String,
        /// Expected length.
        expected: usize,
        /// Actual length.
        actual: usize,
    },

    /// A parameter is outside its valid range.
    #[error("Invalid parameter {name}: {reason}")]
    InvalidParameter {
        /// The parameter name.
        name: String,
        /// Why the value is invalid.
        reason: String,
    },

    /// Division by zero in a calculation.
    #[error("Division by zero in {operation}")]
    DivisionByZero {
        /// The operation that failed.
        operation: String,
    },

    /// No observations beyond the VaR threshold.
    #[error("No observations in the tail beyond the VaR threshold")]
    EmptyTail,

    /// Error propagated from a mathematical primitive.
    #[error(transparent)]
    Math(#[from] MathError),
}

impl AnalyticsError {
    /// Creates a dimension mismatch error.
    #[must_use]
    pub fn dimension_mismatch(context: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            context: context.into(),
            expected,
            actual,
        }
    }

    /// Creates an invalid parameter error.
    #[must_use]
    pub fn invalid_parameter(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Creates a division by zero error.
    #[must_use]
    pub fn division_by_zero(operation: impl Into<String>) -> Self {
        Self::DivisionByZero {
            operation: operation.into(),
        }
    }
}
