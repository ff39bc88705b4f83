//! Forecast accuracy metrics.

use crate::error::{ForecastError, Result};

/// Mean Absolute Percent Error, in percent.
///
/// Compares the first `real.len()` values of `output` against `real`, so an
/// output that extends past the observed range (fitted values followed by
/// forecasts) can be scored directly.
///
/// ```text
/// MAPE = 100 / n · Σ |real[i] − output[i]| / |real[i]|
/// ```
///
/// # Errors
/// * `EmptyData` if `real` is empty
/// * `DimensionMismatch` if `output` is shorter than `real`
/// * `UndefinedRatio` at the first zero in `real`; later terms are not summed
///
/// # Example
/// ```
/// use classical_forecast::utils::mean_absolute_percent_error;
///
/// let real = [100.0, 200.0];
/// let output = [110.0, 180.0, 250.0];
/// let mape = mean_absolute_percent_error(&real, &output).unwrap();
/// assert!((mape - 10.0).abs() < 1e-10);
/// ```
pub fn mean_absolute_percent_error(real: &[f64], output: &[f64]) -> Result<f64> {
    if real.is_empty() {
        return Err(ForecastError::EmptyData);
    }
    if real.len() > output.len() {
        return Err(ForecastError::DimensionMismatch {
            expected: real.len(),
            got: output.len(),
        });
    }

    let mut error = 0.0;
    for (index, (&actual, &predicted)) in real.iter().zip(output.iter()).enumerate() {
        if actual.abs() == 0.0 {
            return Err(ForecastError::UndefinedRatio { index });
        }
        error += (actual - predicted).abs() / actual.abs();
    }

    Ok(error / real.len() as f64 * 100.0)
}
