//! Simple linear regression by ordinary least squares.
//!
//! Used to fit the trend line of a deseasonalized series.

use crate::error::{ForecastError, Result};

/// Slope and intercept of a fitted line `y = intercept + slope * x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    /// Slope of the fitted line.
    pub slope: f64,
    /// Intercept of the fitted line.
    pub intercept: f64,
}

impl LinearFit {
    /// Evaluate the line at `x`.
    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}

/// Fit a line to paired samples using the closed-form OLS solution.
///
/// ```text
/// slope     = (n·Σxy − Σx·Σy) / (n·Σx² − (Σx)²)
/// intercept = (Σy − slope·Σx) / n
/// ```
///
/// # Errors
/// * `DimensionMismatch` if `x` and `y` differ in length
/// * `EmptyData` if there are no samples
/// * `NonFiniteFit` if the slope or intercept is not finite, e.g. when every
///   `x` is the same value
///
/// # Example
/// ```
/// use classical_forecast::utils::simple_linear_regression;
///
/// let x = [1.0, 2.0, 3.0, 4.0];
/// let y = [5.0, 8.0, 11.0, 14.0];
/// let fit = simple_linear_regression(&x, &y).unwrap();
/// assert!((fit.slope - 3.0).abs() < 1e-12);
/// assert!((fit.intercept - 2.0).abs() < 1e-12);
/// ```
pub fn simple_linear_regression(x: &[f64], y: &[f64]) -> Result<LinearFit> {
    if x.len() != y.len() {
        return Err(ForecastError::DimensionMismatch {
            expected: x.len(),
            got: y.len(),
        });
    }
    if x.is_empty() {
        return Err(ForecastError::EmptyData);
    }

    let n = x.len() as f64;
    let (mut sum_x, mut sum_y, mut sum_xx, mut sum_xy) = (0.0, 0.0, 0.0, 0.0);
    for (&xi, &yi) in x.iter().zip(y.iter()) {
        sum_x += xi;
        sum_y += yi;
        sum_xx += xi * xi;
        sum_xy += xi * yi;
    }

    let slope = (n * sum_xy - sum_x * sum_y) / (n * sum_xx - sum_x * sum_x);
    let intercept = (sum_y - slope * sum_x) / n;

    if !slope.is_finite() || !intercept.is_finite() {
        return Err(ForecastError::NonFiniteFit);
    }

    Ok(LinearFit { slope, intercept })
}
