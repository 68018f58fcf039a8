//! Property-based tests for portfolio analytics invariants.
//!
//! These tests verify key mathematical properties that should always hold:
//! - CVaR dominates VaR at any confidence level
//! - Maximum drawdown of a non-declining series is zero
//! - Beta of a portfolio identical to its benchmark is one
//! - Scaling weights scales return and volatility linearly

use ndarray::{Array1, Array2};
use proptest::prelude::*;
use quantfolio_analytics::prelude::*;

// =============================================================================
// TEST DATA GENERATORS
// =============================================================================

/// Simple deterministic hash for test data generation.
fn simple_hash(seed: u64, i: u64) -> u64 {
    let mut x = seed.wrapping_add(i).wrapping_mul(0x517cc1b727220a95);
    x ^= x >> 32;
    x = x.wrapping_mul(0x517cc1b727220a95);
    x ^= x >> 32;
    x
}

/// Generates a T×N returns matrix with per-period returns in ±10%.
fn generate_returns(t: usize, n: usize, seed: u64) -> Array2<f64> {
    Array2::from_shape_fn((t, n), |(row, col)| {
        let hash = simple_hash(seed, (row * n + col) as u64);
        (hash % 2001) as f64 / 10000.0 - 0.1
    })
}

/// Generates a weight vector normalized to sum to one.
fn generate_weights(n: usize, seed: u64) -> Array1<f64> {
    let raw = Array1::from_shape_fn(n, |i| 1.0 + (simple_hash(seed, i as u64) % 100) as f64);
    let total = raw.sum();
    raw / total
}

// =============================================================================
// PROPERTY: CVAR >= VAR
// =============================================================================

#[test]
fn property_cvar_dominates_var() {
    for seed in 0..20 {
        for t in [3, 10, 50, 250] {
            let returns = generate_returns(t, 4, seed);
            let weights = generate_weights(4, seed);

            for confidence in [0.80, 0.90, 0.95, 0.99] {
                let var = value_at_risk(returns.view(), weights.view(), confidence).unwrap();
                let cvar =
                    conditional_value_at_risk(returns.view(), weights.view(), confidence).unwrap();

                assert!(
                    cvar >= var - 1e-12,
                    "CVaR {cvar} < VaR {var} for t={t}, seed={seed}, confidence={confidence}"
                );
            }
        }
    }
}

// =============================================================================
// PROPERTY: DRAWDOWN BOUNDS
// =============================================================================

#[test]
fn property_drawdown_of_rising_series_is_zero() {
    for seed in 0..20 {
        let series = Array1::from_shape_fn(30, |i| {
            0.001 + (simple_hash(seed, i as u64) % 500) as f64 / 10000.0
        });

        assert_eq!(max_drawdown(series.view()).unwrap(), 0.0, "seed={seed}");
    }
}

#[test]
fn property_drawdown_is_never_positive() {
    for seed in 0..20 {
        let returns = generate_returns(60, 1, seed);
        let series = returns.column(0).to_owned();

        let dd = max_drawdown(series.view()).unwrap();
        assert!((-1.0..=0.0).contains(&dd), "drawdown {dd} out of range, seed={seed}");
    }
}

// =============================================================================
// PROPERTY: BETA OF SELF IS ONE
// =============================================================================

#[test]
fn property_beta_of_self_benchmark_is_one() {
    for seed in 0..20 {
        let returns = generate_returns(40, 3, seed);
        let weights = generate_weights(3, seed);

        // Benchmark constructed to equal the portfolio series exactly.
        let benchmark = returns.dot(&weights);

        let b = beta(weights.view(), returns.view(), benchmark.view()).unwrap();
        assert!((b - 1.0).abs() < 1e-10, "beta {b} != 1, seed={seed}");
    }
}

// =============================================================================
// PROPERTY: SCALING LAWS
// =============================================================================

#[test]
fn property_scaling_weights_scales_performance() {
    for seed in 0..20 {
        let weights = generate_weights(3, seed);
        let doubled = &weights * 2.0;
        let mean_returns = Array1::from_shape_fn(3, |i| {
            0.02 + (simple_hash(seed, 100 + i as u64) % 100) as f64 / 1000.0
        });
        // Diagonal covariance keeps the matrix trivially PSD.
        let cov = Array2::from_shape_fn((3, 3), |(i, j)| {
            if i == j {
                0.01 + (simple_hash(seed, 200 + i as u64) % 50) as f64 / 1000.0
            } else {
                0.0
            }
        });

        let p1 = portfolio_performance(weights.view(), mean_returns.view(), cov.view()).unwrap();
        let p2 = portfolio_performance(doubled.view(), mean_returns.view(), cov.view()).unwrap();

        assert!((p2.expected_return - 2.0 * p1.expected_return).abs() < 1e-12);
        assert!((p2.volatility - 2.0 * p1.volatility).abs() < 1e-12);
    }
}

// =============================================================================
// RANDOMIZED PROPERTIES (PROPTEST)
// =============================================================================

proptest! {
    #[test]
    fn prop_cvar_dominates_var_on_arbitrary_series(
        series in prop::collection::vec(-0.2f64..0.2, 2..80),
        confidence in 0.5f64..0.999,
    ) {
        let t = series.len();
        let returns = Array2::from_shape_vec((t, 1), series).unwrap();
        let weights = Array1::from_elem(1, 1.0);

        let var = value_at_risk(returns.view(), weights.view(), confidence).unwrap();
        let cvar = conditional_value_at_risk(returns.view(), weights.view(), confidence).unwrap();

        prop_assert!(cvar >= var - 1e-12);
    }

    #[test]
    fn prop_drawdown_within_bounds(
        series in prop::collection::vec(-0.5f64..0.5, 1..80),
    ) {
        let arr = Array1::from_vec(series);
        let dd = max_drawdown(arr.view()).unwrap();

        prop_assert!(dd <= 0.0);
        prop_assert!(dd >= -1.0);
    }

    #[test]
    fn prop_var_negates_percentile_sign_convention(
        series in prop::collection::vec(0.001f64..0.1, 5..40),
    ) {
        // All-gain series: the loss threshold is negative (no loss at risk).
        let t = series.len();
        let returns = Array2::from_shape_vec((t, 1), series).unwrap();
        let weights = Array1::from_elem(1, 1.0);

        let var = value_at_risk(returns.view(), weights.view(), 0.95).unwrap();
        prop_assert!(var <= 0.0);
    }
}
