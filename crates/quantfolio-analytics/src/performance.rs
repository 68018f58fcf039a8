//! Portfolio performance and the optimization objective.
//!
//! Computes expected return and volatility from a weight vector, a mean
//! return vector and a covariance matrix, and exposes the penalized
//! Sharpe-ratio objective consumed by external optimizers.

use crate::config::AnalyticsConfig;
use crate::error::{AnalyticsError, AnalyticsResult};
use log::debug;
use ndarray::{ArrayView1, ArrayView2};
use quantfolio_math::linalg::quadratic_form;
use serde::{Deserialize, Serialize};

/// Expected return and volatility of a portfolio.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PortfolioPerformance {
    /// Weighted average expected return `Σ μᵢ wᵢ`.
    pub expected_return: f64,

    /// Portfolio standard deviation `√(wᵀ Σ w)`.
    pub volatility: f64,
}

/// Calculates portfolio expected return and volatility.
///
/// ## Formula
///
/// ```text
/// return     = Σ μ[i] × w[i]
/// volatility = √(wᵀ × Σ × w)
/// ```
///
/// The covariance matrix must be positive-semidefinite; a negative
/// quadratic form indicates a malformed matrix and is reported as an
/// error rather than silently coerced.
///
/// # Errors
///
/// Returns [`AnalyticsError::DimensionMismatch`] when the inputs do not
/// align on N, and [`AnalyticsError::InvalidParameter`] when the quadratic
/// form is negative.
pub fn portfolio_performance(
    weights: ArrayView1<'_, f64>,
    mean_returns: ArrayView1<'_, f64>,
    cov_matrix: ArrayView2<'_, f64>,
) -> AnalyticsResult<PortfolioPerformance> {
    let n = weights.len();
    if mean_returns.len() != n {
        return Err(AnalyticsError::dimension_mismatch(
            "weights vs mean returns",
            n,
            mean_returns.len(),
        ));
    }
    if cov_matrix.nrows() != n || cov_matrix.ncols() != n {
        return Err(AnalyticsError::dimension_mismatch(
            "weights vs covariance matrix",
            n,
            cov_matrix.nrows(),
        ));
    }

    let expected_return = mean_returns.dot(&weights);
    let variance = quadratic_form(weights, cov_matrix)?;

    if variance < 0.0 {
        return Err(AnalyticsError::invalid_parameter(
            "cov_matrix",
            format!("quadratic form is negative ({variance:.2e}); matrix is not PSD"),
        ));
    }

    let volatility = variance.sqrt();
    debug!("portfolio performance: return={expected_return:.6}, volatility={volatility:.6}");

    Ok(PortfolioPerformance {
        expected_return,
        volatility,
    })
}

/// Penalized Sharpe-ratio objective for an external minimizer.
///
/// ## Formula
///
/// ```text
/// sharpe    = (return − risk_free_rate) / volatility
/// penalty   = Σ w[i]²
/// objective = −sharpe + penalty_factor × penalty
/// ```
///
/// The Sharpe ratio is negated because the caller is expected to
/// *minimize* this function; the concentration penalty discourages
/// near-single-asset allocations. The penalty factor comes from
/// [`AnalyticsConfig::penalty_factor`].
///
/// # Errors
///
/// Returns [`AnalyticsError::DivisionByZero`] when the portfolio
/// volatility is exactly zero (e.g. a single-asset zero-variance
/// portfolio). This is surfaced as an error rather than a ±∞ sentinel so
/// that optimizers reject the candidate explicitly.
pub fn objective_function(
    weights: ArrayView1<'_, f64>,
    mean_returns: ArrayView1<'_, f64>,
    cov_matrix: ArrayView2<'_, f64>,
    risk_free_rate: f64,
    config: &AnalyticsConfig,
) -> AnalyticsResult<f64> {
    let perf = portfolio_performance(weights, mean_returns, cov_matrix)?;

    if perf.volatility == 0.0 {
        return Err(AnalyticsError::division_by_zero("Sharpe ratio"));
    }

    let sharpe = (perf.expected_return - risk_free_rate) / perf.volatility;
    let concentration_penalty = weights.dot(&weights);

    Ok(-sharpe + config.penalty_factor * concentration_penalty)
}
