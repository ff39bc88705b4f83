//! Classical multiplicative decomposition: seasonal index and linear trend.
//!
//! The series is modelled as `y(t) = trend(t) · seasonal(t mod p)`:
//! 1. The centered moving average estimates the local level.
//! 2. The ratio of each observation to its centered average, averaged per
//!    phase, gives the seasonal index.
//! 3. Dividing the series by the seasonal index removes the seasonality, and a
//!    straight line fitted over `t = 1..=n` gives the trend.

use crate::error::{ForecastError, Result};
use crate::transform::centered_moving_average;
use crate::utils::{mean, simple_linear_regression, LinearFit};
use tracing::{debug, trace, warn};

/// Configuration for seasonal index extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecompositionConfig {
    /// Number of observations per seasonal cycle.
    pub seasons: usize,
    /// Rescale the seasonal index so that it averages to 1.
    pub normalize_seasonal: bool,
}

impl DecompositionConfig {
    /// Raw (non-normalized) seasonal index with the given period.
    pub fn new(seasons: usize) -> Self {
        Self {
            seasons,
            normalize_seasonal: false,
        }
    }

    /// Enable or disable normalization of the seasonal index.
    pub fn with_normalized_seasonal(mut self, normalize: bool) -> Self {
        self.normalize_seasonal = normalize;
        self
    }

    /// Check that the period is usable.
    pub fn validate(&self) -> Result<()> {
        if self.seasons == 0 {
            return Err(ForecastError::InvalidParameter(
                "seasons must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Seasonal index of `series` with period `seasons`.
///
/// Equivalent to [`seasonal_components_with`] using
/// `DecompositionConfig::new(seasons)`.
pub fn seasonal_components(series: &[f64], seasons: usize) -> Result<Vec<f64>> {
    seasonal_components_with(series, &DecompositionConfig::new(seasons))
}

/// Seasonal index, one multiplier per phase of the cycle.
///
/// Each observation between the first and last centered average is divided by
/// its centered average. Phase `i` averages the ratios at indices
/// `i, i + p, i + 2p, …` lying strictly between `p / 2` and `n - p / 2`; the
/// observation at index `p / 2` takes part in no phase.
///
/// A phase with no eligible ratio is `NaN`. This only happens at the minimum
/// usable length, and makes the later trend fit fail with `NonFiniteFit`.
///
/// # Errors
/// * the errors of [`centered_moving_average`]
/// * `InsufficientData` when there are fewer centered averages than `seasons`
///
/// # Example
/// ```
/// use classical_forecast::seasonality::seasonal_components;
///
/// let y = [10.0, 12.0, 14.0, 16.0, 12.0, 14.0, 16.0, 18.0, 14.0, 16.0, 18.0, 20.0];
/// let seasonal = seasonal_components(&y, 4).unwrap();
/// assert_eq!(seasonal.len(), 4);
/// ```
pub fn seasonal_components_with(series: &[f64], config: &DecompositionConfig) -> Result<Vec<f64>> {
    config.validate()?;
    let seasons = config.seasons;
    let n = series.len();

    let cma = centered_moving_average(series, seasons)?;
    if cma.len() < seasons {
        debug!(
            seasons,
            observations = n,
            centered = cma.len(),
            "not enough centered averages for a seasonal index"
        );
        return Err(ForecastError::InsufficientData {
            needed: seasons,
            got: cma.len(),
        });
    }

    let offset = seasons / 2;
    let ratios: Vec<f64> = cma
        .iter()
        .enumerate()
        .map(|(i, level)| series[offset + i] / level)
        .collect();

    let (tl, tr) = (offset, n - offset);
    let mut indices = Vec::with_capacity(seasons);
    for phase in 0..seasons {
        let (sum, count) = (phase..tr)
            .step_by(seasons)
            .filter(|&j| j > tl)
            .fold((0.0, 0usize), |(sum, count), j| (sum + ratios[j - offset], count + 1));

        if count == 0 {
            warn!(phase, seasons, "no ratio available for seasonal phase");
            indices.push(f64::NAN);
        } else {
            let index = sum / count as f64;
            trace!(phase, samples = count, index, "seasonal phase");
            indices.push(index);
        }
    }

    if config.normalize_seasonal {
        let level = mean(&indices);
        if level.is_finite() && level != 0.0 {
            for index in indices.iter_mut() {
                *index /= level;
            }
        }
    }

    debug!(seasons, observations = n, ?indices, "seasonal index extracted");
    Ok(indices)
}

/// Divide each observation by the seasonal index of its phase.
pub fn deseasonalize(series: &[f64], seasonal: &[f64]) -> Vec<f64> {
    series
        .iter()
        .zip(seasonal.iter().cycle())
        .map(|(y, s)| y / s)
        .collect()
}

/// Fit the trend line over the deseasonalized series, with `t = 1..=n`.
///
/// # Errors
/// * `DimensionMismatch` if `seasonal` does not hold exactly `seasons` values
/// * `EmptyData` for an empty series
/// * `NonFiniteFit` for a degenerate fit (a single observation, a zero or
///   `NaN` seasonal index)
pub fn fit_trend(series: &[f64], seasonal: &[f64], seasons: usize) -> Result<LinearFit> {
    if seasons == 0 || seasonal.len() != seasons {
        return Err(ForecastError::DimensionMismatch {
            expected: seasons,
            got: seasonal.len(),
        });
    }

    let deseasonalized = deseasonalize(series, seasonal);
    let t: Vec<f64> = (1..=series.len()).map(|t| t as f64).collect();
    let fit = simple_linear_regression(&t, &deseasonalized)?;

    debug!(slope = fit.slope, intercept = fit.intercept, "trend fitted");
    Ok(fit)
}

/// Trend values for `t = 1..=number_of_outputs`.
///
/// The first `n` values reproduce the fit over the observed range; the rest
/// extrapolate it.
///
/// # Errors
/// Same as [`fit_trend`].
///
/// # Example
/// ```
/// use classical_forecast::seasonality::trend_components;
///
/// let y = [2.0, 4.0, 6.0, 8.0];
/// let trend = trend_components(&y, &[1.0, 1.0], 2, 6).unwrap();
/// assert_eq!(trend.len(), 6);
/// assert!((trend[5] - 12.0).abs() < 1e-10);
/// ```
pub fn trend_components(
    series: &[f64],
    seasonal: &[f64],
    seasons: usize,
    number_of_outputs: usize,
) -> Result<Vec<f64>> {
    let fit = fit_trend(series, seasonal, seasons)?;
    Ok(project_trend(&fit, number_of_outputs))
}

/// Evaluate a fitted trend at `t = 1..=number_of_outputs`.
pub fn project_trend(fit: &LinearFit, number_of_outputs: usize) -> Vec<f64> {
    (1..=number_of_outputs).map(|t| fit.predict(t as f64)).collect()
}
