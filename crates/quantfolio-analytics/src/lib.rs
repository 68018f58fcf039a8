//! # Quantfolio Analytics
//!
//! Portfolio risk/return analytics from weight vectors and historical or
//! statistical return data.
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: all calculations are stateless with explicit inputs
//! - **Caller-owned data**: mean returns, covariance matrices and returns
//!   matrices arrive already computed and aligned; this crate performs no
//!   data ingestion or time-series alignment
//! - **Explicit errors**: dimension mismatches, invalid parameters and
//!   degenerate denominators are surfaced as [`AnalyticsError`], never as
//!   NaN or ±∞
//!
//! ## Features
//!
//! - **Performance**: expected return and volatility from weights,
//!   mean returns and a covariance matrix
//! - **Objective**: penalized Sharpe-ratio objective for external
//!   minimizers, with a configurable concentration penalty
//! - **Tail Risk**: historical VaR and CVaR via interpolated empirical
//!   percentiles
//! - **Drawdown**: worst peak-to-trough decline of a return series
//! - **Beta**: sensitivity to a benchmark return series
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use ndarray::array;
//! use quantfolio_analytics::prelude::*;
//!
//! let weights = array![0.5, 0.5];
//! let mean_returns = array![0.10, 0.20];
//! let cov = array![[0.04, 0.01], [0.01, 0.09]];
//!
//! let perf = portfolio_performance(weights.view(), mean_returns.view(), cov.view())?;
//! println!("return {:.2}%, vol {:.2}%", perf.expected_return * 100.0, perf.volatility * 100.0);
//! ```
//!
//! ## Module Overview
//!
//! - [`performance`] - Expected return, volatility, optimization objective
//! - [`risk`] - VaR, CVaR, maximum drawdown, beta
//! - [`summary`] - Aggregate [`RiskReport`] entry point
//! - [`config`] - Tunable parameters (penalty factor, confidence level)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod performance;
pub mod risk;
pub mod summary;

// Re-export error types at crate root
pub use error::{AnalyticsError, AnalyticsResult};

// Re-export config
pub use config::{AnalyticsConfig, DEFAULT_CONFIDENCE_LEVEL, DEFAULT_PENALTY_FACTOR};

// Re-export analytics functions and types
pub use performance::{objective_function, portfolio_performance, PortfolioPerformance};
pub use risk::{beta, conditional_value_at_risk, max_drawdown, value_at_risk};
pub use summary::{risk_report, RiskReport};

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use quantfolio_analytics::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::{AnalyticsConfig, DEFAULT_CONFIDENCE_LEVEL, DEFAULT_PENALTY_FACTOR};
    pub use crate::error::{AnalyticsError, AnalyticsResult};
    pub use crate::performance::{objective_function, portfolio_performance, PortfolioPerformance};
    pub use crate::risk::{beta, conditional_value_at_risk, max_drawdown, value_at_risk};
    pub use crate::summary::{risk_report, RiskReport};

    // Re-export commonly used types from dependencies
    pub use quantfolio_math::{MathError, MathResult};
}
