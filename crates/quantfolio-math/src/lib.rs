//! # Quantfolio Math
//!
//! Statistical and linear-algebra primitives for the Quantfolio portfolio
//! analytics library.
//!
//! This crate provides:
//!
//! - **Statistics**: mean, variance, covariance, empirical percentiles
//! - **Linear Algebra**: dimension-checked quadratic forms and projections
//!
//! ## Design Philosophy
//!
//! - **Explicit validation**: malformed inputs return errors, never NaN
//! - **Pure functions**: no state, no I/O, safe to call concurrently

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_precision_loss)]

pub mod error;
pub mod linalg;
pub mod stats;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::linalg::{project_returns, quadratic_form};
    pub use crate::stats::{
        mean, percentile, population_variance, sample_covariance, sample_variance,
    };
}

pub use error::{MathError, MathResult};
