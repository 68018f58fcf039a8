//! Aggregate risk report for the reporting layer.

use crate::config::AnalyticsConfig;
use crate::error::AnalyticsResult;
use crate::performance::portfolio_performance;
use crate::risk::{beta, conditional_value_at_risk, max_drawdown, value_at_risk};
use ndarray::{ArrayView1, ArrayView2};
use quantfolio_math::linalg::project_returns;
use serde::{Deserialize, Serialize};

/// All portfolio risk/return metrics computed against a single config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskReport {
    /// Weighted average expected return.
    pub expected_return: f64,

    /// Portfolio standard deviation.
    pub volatility: f64,

    /// Sharpe ratio; `None` when volatility is zero.
    pub sharpe_ratio: Option<f64>,

    /// Historical VaR at the configured confidence level.
    pub value_at_risk: f64,

    /// Historical CVaR at the configured confidence level.
    pub conditional_value_at_risk: f64,

    /// Worst peak-to-trough decline (negative fraction).
    pub max_drawdown: f64,

    /// Beta versus the benchmark; `None` when no benchmark was supplied.
    pub beta: Option<f64>,

    /// Confidence level the tail metrics were computed at.
    pub confidence_level: f64,
}

/// Computes every risk/return metric in one call.
///
/// Convenience entry point for reporting callers: performance, Sharpe,
/// VaR, CVaR and maximum drawdown against the configured confidence
/// level, plus beta when a benchmark series is supplied.
///
/// # Errors
///
/// Propagates any error of the underlying metric functions; the first
/// failure aborts the report.
///
/// # Example
///
/// ```ignore
/// let report = risk_report(
///     weights.view(),
///     mean_returns.view(),
///     cov.view(),
///     returns.view(),
///     Some(benchmark.view()),
///     0.02,
///     &AnalyticsConfig::default(),
/// )?;
/// println!("VaR(95): {:.4}", report.value_at_risk);
/// ```
pub fn risk_report(
    weights: ArrayView1<'_, f64>,
    mean_returns: ArrayView1<'_, f64>,
    cov_matrix: ArrayView2<'_, f64>,
    returns_matrix: ArrayView2<'_, f64>,
    benchmark_returns: Option<ArrayView1<'_, f64>>,
    risk_free_rate: f64,
    config: &AnalyticsConfig,
) -> AnalyticsResult<RiskReport> {
    let perf = portfolio_performance(weights, mean_returns, cov_matrix)?;

    let sharpe_ratio = if perf.volatility > 0.0 {
        Some((perf.expected_return - risk_free_rate) / perf.volatility)
    } else {
        None
    };

    let var = value_at_risk(returns_matrix, weights, config.confidence_level)?;
    let cvar = conditional_value_at_risk(returns_matrix, weights, config.confidence_level)?;

    let series = project_returns(returns_matrix, weights)?;
    let drawdown = max_drawdown(series.view())?;

    let beta_value = match benchmark_returns {
        Some(benchmark) => Some(beta(weights, returns_matrix, benchmark)?),
        None => None,
    };

    Ok(RiskReport {
        expected_return: perf.expected_return,
        volatility: perf.volatility,
        sharpe_ratio,
        value_at_risk: var,
        conditional_value_at_risk: cvar,
        max_drawdown: drawdown,
        beta: beta_value,
        confidence_level: config.confidence_level,
    })
}
