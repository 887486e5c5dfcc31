use crate::stats::error::StatsError;
use crate::stats::estimators::{Estimator, MeanEstimator};

/// Arithmetic mean of `values`.
///
/// The sum accumulates left to right in input order and is divided once by
/// the element count; ordinary floating-point rounding applies. The empty
/// sequence is the only rejected input.
pub fn average(values: &[f64]) -> Result<f64, StatsError> {
    if values.is_empty() {
        return Err(StatsError::EmptyInput);
    }

    let mut mean = MeanEstimator::default();
    for &v in values {
        mean.add(v);
    }
    Ok(mean.estimation())
}
