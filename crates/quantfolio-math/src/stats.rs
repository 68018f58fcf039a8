//! Descriptive statistics over return series.
//!
//! All functions operate on plain `f64` slices and validate their inputs
//! explicitly rather than propagating NaN.

use crate::error::{MathError, MathResult};
use log::trace;

/// Arithmetic mean of a series.
///
/// # Errors
///
/// Returns [`MathError::InsufficientData`] for an empty series.
pub fn mean(values: &[f64]) -> MathResult<f64> {
    if values.is_empty() {
        return Err(MathError::insufficient_data(1, 0));
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample variance (N-1 denominator).
///
/// # Errors
///
/// Returns [`MathError::InsufficientData`] when fewer than two points
/// are supplied.
pub fn sample_variance(values: &[f64]) -> MathResult<f64> {
    if values.len() < 2 {
        return Err(MathError::insufficient_data(2, values.len()));
    }
    let m = mean(values)?;
    let sum_sq: f64 = values.iter().map(|v| (v - m).powi(2)).sum();
    Ok(sum_sq / (values.len() - 1) as f64)
}

/// Population variance (N denominator).
///
/// # Errors
///
/// Returns [`MathError::InsufficientData`] for an empty series.
pub fn population_variance(values: &[f64]) -> MathResult<f64> {
    if values.is_empty() {
        return Err(MathError::insufficient_data(1, 0));
    }
    let m = mean(values)?;
    let sum_sq: f64 = values.iter().map(|v| (v - m).powi(2)).sum();
    Ok(sum_sq / values.len() as f64)
}

/// Sample covariance between two aligned series (N-1 denominator).
///
/// # Errors
///
/// Returns [`MathError::DimensionMismatch`] when the series differ in
/// length and [`MathError::InsufficientData`] when fewer than two points
/// are supplied.
pub fn sample_covariance(x: &[f64], y: &[f64]) -> MathResult<f64> {
    if x.len() != y.len() {
        return Err(MathError::dimension_mismatch(x.len(), y.len()));
    }
    if x.len() < 2 {
        return Err(MathError::insufficient_data(2, x.len()));
    }

    let mean_x = mean(x)?;
    let mean_y = mean(y)?;

    let sum: f64 = x
        .iter()
        .zip(y.iter())
        .map(|(xi, yi)| (xi - mean_x) * (yi - mean_y))
        .sum();

    Ok(sum / (x.len() - 1) as f64)
}

/// Empirical percentile with linear interpolation between order statistics.
///
/// `pct` is expressed in percent (e.g. `5.0` for the 5th percentile). The
/// rank is `pct / 100 × (n − 1)`; fractional ranks interpolate linearly
/// between the two neighbouring sorted observations.
///
/// # Errors
///
/// Returns [`MathError::InsufficientData`] for an empty series and
/// [`MathError::InvalidInput`] when `pct` lies outside `[0, 100]`.
pub fn percentile(values: &[f64], pct: f64) -> MathResult<f64> {
    if values.is_empty() {
        return Err(MathError::insufficient_data(1, 0));
    }
    if !(0.0..=100.0).contains(&pct) {
        return Err(MathError::invalid_input(format!(
            "percentile must be in [0, 100], got {pct}"
        )));
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let rank = pct / 100.0 * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    trace!("percentile {pct} over {} points: rank {rank:.3}", sorted.len());

    if lo == hi {
        return Ok(sorted[lo]);
    }

    let frac = rank - lo as f64;
    Ok(sorted[lo] + frac * (sorted[hi] - sorted[lo]))
}
