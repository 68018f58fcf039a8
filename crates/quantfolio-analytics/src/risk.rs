//! Tail-risk, drawdown and benchmark-sensitivity metrics.
//!
//! Historical VaR and CVaR from a returns matrix and weight vector,
//! maximum drawdown of a portfolio return series, and beta versus a
//! benchmark series.

use crate::error::{AnalyticsError, AnalyticsResult};
use log::debug;
use ndarray::{ArrayView1, ArrayView2};
use quantfolio_math::linalg::project_returns;
use quantfolio_math::stats::{mean, percentile, sample_covariance, sample_variance};

/// Validates that a confidence level lies strictly inside (0, 1).
fn validate_confidence(confidence_level: f64) -> AnalyticsResult<()> {
    if !(confidence_level > 0.0 && confidence_level < 1.0) {
        return Err(AnalyticsError::invalid_parameter(
            "confidence_level",
            format!("must be in (0, 1), got {confidence_level}"),
        ));
    }
    Ok(())
}

/// Validates the T×N returns matrix against the weight vector.
fn validate_projection(
    returns_matrix: ArrayView2<'_, f64>,
    weights: ArrayView1<'_, f64>,
) -> AnalyticsResult<()> {
    if returns_matrix.ncols() != weights.len() {
        return Err(AnalyticsError::dimension_mismatch(
            "returns matrix columns vs weights",
            weights.len(),
            returns_matrix.ncols(),
        ));
    }
    Ok(())
}

/// VaR of an already-projected portfolio return series.
fn var_from_series(series: &[f64], confidence_level: f64) -> AnalyticsResult<f64> {
    let pct = (1.0 - confidence_level) * 100.0;
    Ok(-percentile(series, pct)?)
}

/// Historical Value at Risk at the given confidence level.
///
/// Projects the T×N returns matrix onto the weight vector, takes the
/// empirical percentile at `(1 − confidence) × 100` (linear interpolation
/// between order statistics) and negates it. The result is the loss
/// threshold such that, empirically, `1 − confidence` of periods returned
/// worse than `−VaR`.
///
/// # Errors
///
/// Returns [`AnalyticsError::InvalidParameter`] when `confidence_level`
/// is outside (0, 1), [`AnalyticsError::DimensionMismatch`] when matrix
/// columns do not match the weight vector, and an error for an empty
/// return series.
pub fn value_at_risk(
    returns_matrix: ArrayView2<'_, f64>,
    weights: ArrayView1<'_, f64>,
    confidence_level: f64,
) -> AnalyticsResult<f64> {
    validate_confidence(confidence_level)?;
    validate_projection(returns_matrix, weights)?;

    let series = project_returns(returns_matrix, weights)?.to_vec();
    let var = var_from_series(&series, confidence_level)?;

    debug!("historical VaR at {confidence_level}: {var:.6} over {} periods", series.len());
    Ok(var)
}

/// Conditional Value at Risk (expected shortfall) at the given
/// confidence level.
///
/// Computes VaR as in [`value_at_risk`], then averages the portfolio
/// returns at or beyond the threshold (`r ≤ −VaR`) and negates the mean.
/// CVaR is the expected loss conditional on being in the worst
/// `1 − confidence` tail, and is always at least as large as VaR.
///
/// # Errors
///
/// In addition to the errors of [`value_at_risk`], returns
/// [`AnalyticsError::EmptyTail`] when no observation lies at or beyond
/// the VaR threshold, rather than producing NaN from an empty mean.
pub fn conditional_value_at_risk(
    returns_matrix: ArrayView2<'_, f64>,
    weights: ArrayView1<'_, f64>,
    confidence_level: f64,
) -> AnalyticsResult<f64> {
    validate_confidence(confidence_level)?;
    validate_projection(returns_matrix, weights)?;

    let series = project_returns(returns_matrix, weights)?.to_vec();
    let var = var_from_series(&series, confidence_level)?;

    let tail: Vec<f64> = series.iter().copied().filter(|r| *r <= -var).collect();
    if tail.is_empty() {
        return Err(AnalyticsError::EmptyTail);
    }

    Ok(-mean(&tail)?)
}

/// Maximum drawdown of a per-period simple return series.
///
/// ## Formula
///
/// ```text
/// cumulative[t] = Π_{s≤t} (1 + r[s])
/// peak[t]       = max(cumulative[0..=t])
/// drawdown[t]   = (cumulative[t] − peak[t]) / peak[t]
/// ```
///
/// The result is the minimum drawdown over all periods: the worst
/// peak-to-trough decline, expressed as a negative fraction (0 for a
/// series that never declines from a peak).
///
/// # Errors
///
/// Returns [`AnalyticsError::InvalidParameter`] for an empty series and
/// [`AnalyticsError::DivisionByZero`] if the running peak reaches exactly
/// zero (a −100% first period).
pub fn max_drawdown(portfolio_returns: ArrayView1<'_, f64>) -> AnalyticsResult<f64> {
    if portfolio_returns.is_empty() {
        return Err(AnalyticsError::invalid_parameter(
            "portfolio_returns",
            "series is empty",
        ));
    }

    let mut cumulative = 1.0;
    let mut peak = f64::MIN;
    let mut worst: f64 = 0.0;

    for &r in portfolio_returns.iter() {
        cumulative *= 1.0 + r;
        peak = peak.max(cumulative);

        if peak == 0.0 {
            return Err(AnalyticsError::division_by_zero("drawdown peak"));
        }

        worst = worst.min((cumulative - peak) / peak);
    }

    Ok(worst)
}

/// Beta of the portfolio versus a benchmark return series.
///
/// Projects the T×N returns matrix onto the weight vector and divides the
/// sample covariance between portfolio and benchmark returns by the
/// sample variance of the benchmark. Both moments use the N−1
/// denominator, consistently, so a portfolio identical to its benchmark
/// has beta exactly 1 regardless of T.
///
/// # Errors
///
/// Returns [`AnalyticsError::DimensionMismatch`] when the inputs do not
/// align, an error when fewer than two periods are supplied, and
/// [`AnalyticsError::DivisionByZero`] when the benchmark variance is zero
/// (constant benchmark series).
pub fn beta(
    weights: ArrayView1<'_, f64>,
    returns_matrix: ArrayView2<'_, f64>,
    benchmark_returns: ArrayView1<'_, f64>,
) -> AnalyticsResult<f64> {
    validate_projection(returns_matrix, weights)?;
    if returns_matrix.nrows() != benchmark_returns.len() {
        return Err(AnalyticsError::dimension_mismatch(
            "returns matrix rows vs benchmark",
            returns_matrix.nrows(),
            benchmark_returns.len(),
        ));
    }

    let series = project_returns(returns_matrix, weights)?.to_vec();
    let benchmark = benchmark_returns.to_vec();

    let covariance = sample_covariance(&series, &benchmark)?;
    let benchmark_variance = sample_variance(&benchmark)?;

    if benchmark_variance == 0.0 {
        return Err(AnalyticsError::division_by_zero("benchmark variance"));
    }

    Ok(covariance / benchmark_variance)
}
