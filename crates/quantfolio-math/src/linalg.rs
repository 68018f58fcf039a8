//! Linear-algebra helpers for portfolio calculations.
//!
//! Thin, dimension-checked wrappers over `ndarray` dot products.

use crate::error::{MathError, MathResult};
use log::debug;
use ndarray::{Array1, ArrayView1, ArrayView2};

/// Quadratic form `wᵀ A w`.
///
/// Used for the portfolio-variance calculation `wᵀ Σ w`, where `Σ` is a
/// covariance matrix aligned row/column with the weight vector.
///
/// # Errors
///
/// Returns [`MathError::DimensionMismatch`] when `a` is not square or its
/// order does not match the length of `w`.
pub fn quadratic_form(w: ArrayView1<'_, f64>, a: ArrayView2<'_, f64>) -> MathResult<f64> {
    let n = w.len();
    if a.nrows() != a.ncols() {
        return Err(MathError::dimension_mismatch(a.nrows(), a.ncols()));
    }
    if a.nrows() != n {
        return Err(MathError::dimension_mismatch(n, a.nrows()));
    }

    Ok(w.dot(&a.dot(&w)))
}

/// Projects a T×N returns matrix onto a weight vector.
///
/// Row `t` of the result is the portfolio return in period `t`:
/// `Σ_i returns[t][i] × w[i]`.
///
/// # Errors
///
/// Returns [`MathError::DimensionMismatch`] when the matrix column count
/// does not match the weight vector length.
pub fn project_returns(
    returns: ArrayView2<'_, f64>,
    w: ArrayView1<'_, f64>,
) -> MathResult<Array1<f64>> {
    if returns.ncols() != w.len() {
        return Err(MathError::dimension_mismatch(w.len(), returns.ncols()));
    }

    debug!(
        "projecting {}x{} returns matrix onto weight vector",
        returns.nrows(),
        returns.ncols()
    );
    Ok(returns.dot(&w))
}
