//! Configuration for portfolio analytics computation.

use serde::{Deserialize, Serialize};

/// Default scaling factor for the concentration penalty in the
/// optimization objective.
pub const DEFAULT_PENALTY_FACTOR: f64 = 10.0;

/// Default confidence level for VaR and CVaR.
pub const DEFAULT_CONFIDENCE_LEVEL: f64 = 0.95;

/// Configuration for portfolio analytics computation.
///
/// Holds the only two tunable parameters of the crate: the concentration
/// penalty factor used by the optimization objective and the confidence
/// level used by the tail-risk metrics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Scaling factor applied to the concentration penalty `Σ wᵢ²`.
    pub penalty_factor: f64,

    /// Confidence level for VaR/CVaR, in (0, 1).
    pub confidence_level: f64,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            penalty_factor: DEFAULT_PENALTY_FACTOR,
            confidence_level: DEFAULT_CONFIDENCE_LEVEL,
        }
    }
}

impl AnalyticsConfig {
    /// Creates a new config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the concentration penalty factor.
    #[must_use]
    pub fn with_penalty_factor(mut self, factor: f64) -> Self {
        self.penalty_factor = factor;
        self
    }

    /// Sets the confidence level for VaR/CVaR.
    #[must_use]
    pub fn with_confidence_level(mut self, level: f64) -> Self {
        self.confidence_level = level;
        self
    }
}
