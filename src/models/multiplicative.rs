//! Classical multiplicative decomposition forecaster.
//!
//! Forecasts are the product of a linear trend, fitted over the
//! deseasonalized series, and the seasonal index of the forecast step's phase:
//!
//! ```text
//! forecast(t) = (intercept + slope · t) · seasonal[(t - 1) mod p]
//! ```
//!
//! Steps `1..=n` reconstruct the observed range, later steps extrapolate it.

use crate::core::{Forecast, TimeSeries};
use crate::error::{ForecastError, Result};
use crate::models::Forecaster;
use crate::seasonality::{
    fit_trend, project_trend, seasonal_components_with, trend_components, DecompositionConfig,
};
use crate::utils::{mean_absolute_percent_error, quantile_normal, LinearFit};
use tracing::debug;

/// Seasonal index, trend and forecasts over the observed and future range.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastResult {
    /// One multiplier per seasonal phase (length `seasons`).
    pub seasonal_components: Vec<f64>,
    /// Trend value for `t = 1..=n + forecast_number`.
    pub trend_components: Vec<f64>,
    /// `trend_components[i] · seasonal_components[i mod seasons]`.
    pub forecasts: Vec<f64>,
}

fn recombine(trend: &[f64], seasonal: &[f64]) -> Vec<f64> {
    trend
        .iter()
        .zip(seasonal.iter().cycle())
        .map(|(t, s)| t * s)
        .collect()
}

fn build_result(seasonal: Vec<f64>, trend: Vec<f64>) -> ForecastResult {
    let forecasts = recombine(&trend, &seasonal);

    ForecastResult {
        seasonal_components: seasonal,
        trend_components: trend,
        forecasts,
    }
}

/// Decompose `series` and forecast `forecast_number` steps past its end.
///
/// The result covers `n + forecast_number` steps. Insufficient data fails
/// the whole call, so a returned result is always complete.
///
/// # Example
/// ```
/// use classical_forecast::models::time_series_forecast_multiplicative_model;
///
/// let y = [10.0, 12.0, 14.0, 16.0, 12.0, 14.0, 16.0, 18.0, 14.0, 16.0, 18.0, 20.0];
/// let result = time_series_forecast_multiplicative_model(&y, 4, 4).unwrap();
///
/// assert_eq!(result.seasonal_components.len(), 4);
/// assert_eq!(result.trend_components.len(), 16);
/// assert_eq!(result.forecasts.len(), 16);
/// ```
pub fn time_series_forecast_multiplicative_model(
    series: &[f64],
    seasons: usize,
    forecast_number: usize,
) -> Result<ForecastResult> {
    multiplicative_forecast_with(series, &DecompositionConfig::new(seasons), forecast_number)
}

/// [`time_series_forecast_multiplicative_model`] with an explicit configuration.
pub fn multiplicative_forecast_with(
    series: &[f64],
    config: &DecompositionConfig,
    forecast_number: usize,
) -> Result<ForecastResult> {
    let seasonal = seasonal_components_with(series, config)?;
    let number_of_outputs = series.len() + forecast_number;
    let trend = trend_components(series, &seasonal, config.seasons, number_of_outputs)?;

    debug!(
        observations = series.len(),
        seasons = config.seasons,
        number_of_outputs,
        "multiplicative forecast"
    );
    Ok(build_result(seasonal, trend))
}

/// Multiplicative decomposition model.
///
/// # Example
/// ```
/// use classical_forecast::core::TimeSeries;
/// use classical_forecast::models::{Forecaster, MultiplicativeDecomposition};
/// use chrono::{Duration, TimeZone, Utc};
///
/// let start = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
/// let values: Vec<f64> = (0..24)
///     .map(|i| (100.0 + 2.0 * i as f64) * [0.9, 1.1, 1.2, 0.8][i % 4])
///     .collect();
/// let ts = TimeSeries::regular(start, Duration::days(91), values).unwrap();
///
/// let mut model = MultiplicativeDecomposition::new(4);
/// model.fit(&ts).unwrap();
/// let forecast = model.predict(8).unwrap();
/// assert_eq!(forecast.horizon(), 8);
/// ```
#[derive(Debug, Clone)]
pub struct MultiplicativeDecomposition {
    config: DecompositionConfig,
    seasonal: Option<Vec<f64>>,
    trend: Option<LinearFit>,
    /// Training series, kept for in-sample scoring and forecast timestamps.
    history: Option<TimeSeries>,
    fitted: Option<Vec<f64>>,
    residuals: Option<Vec<f64>>,
    residual_std: Option<f64>,
}

/// Builder for MultiplicativeDecomposition.
#[derive(Debug, Clone, Default)]
pub struct MultiplicativeDecompositionBuilder {
    seasons: usize,
    normalize_seasonal: bool,
}

impl MultiplicativeDecompositionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the seasonal period.
    pub fn seasons(mut self, seasons: usize) -> Self {
        self.seasons = seasons;
        self
    }

    /// Rescale the seasonal index to average 1.
    pub fn normalize_seasonal(mut self, normalize: bool) -> Self {
        self.normalize_seasonal = normalize;
        self
    }

    pub fn build(self) -> Result<MultiplicativeDecomposition> {
        let config =
            DecompositionConfig::new(self.seasons).with_normalized_seasonal(self.normalize_seasonal);
        config.validate()?;
        Ok(MultiplicativeDecomposition::with_config(config))
    }
}

impl MultiplicativeDecomposition {
    /// Create a model with the given seasonal period and default settings.
    pub fn new(seasons: usize) -> Self {
        Self::with_config(DecompositionConfig::new(seasons))
    }

    /// Create a model from an explicit configuration.
    pub fn with_config(config: DecompositionConfig) -> Self {
        Self {
            config,
            seasonal: None,
            trend: None,
            history: None,
            fitted: None,
            residuals: None,
            residual_std: None,
        }
    }

    /// Create a builder for more complex configuration.
    pub fn builder() -> MultiplicativeDecompositionBuilder {
        MultiplicativeDecompositionBuilder::new()
    }

    pub fn config(&self) -> &DecompositionConfig {
        &self.config
    }

    /// Seasonal index of the fitted model.
    pub fn seasonal_indices(&self) -> Option<&[f64]> {
        self.seasonal.as_deref()
    }

    /// Trend line of the fitted model.
    pub fn trend_fit(&self) -> Option<LinearFit> {
        self.trend
    }

    /// Full decomposition over the observed range plus `horizon` steps.
    pub fn decomposition(&self, horizon: usize) -> Result<ForecastResult> {
        let (seasonal, fit, n) = self.fitted_state()?;
        Ok(build_result(seasonal.to_vec(), project_trend(&fit, n + horizon)))
    }

    /// In-sample MAPE of the fitted values against the training data.
    pub fn mape(&self) -> Result<f64> {
        let history = self.history.as_ref().ok_or(ForecastError::FitRequired)?;
        let fitted = self.fitted.as_deref().ok_or(ForecastError::FitRequired)?;
        mean_absolute_percent_error(history.values(), fitted)
    }

    fn fitted_state(&self) -> Result<(&[f64], LinearFit, usize)> {
        match (&self.seasonal, self.trend, &self.history) {
            (Some(seasonal), Some(fit), Some(history)) => {
                Ok((seasonal.as_slice(), fit, history.len()))
            }
            _ => Err(ForecastError::FitRequired),
        }
    }
}

impl Forecaster for MultiplicativeDecomposition {
    fn fit(&mut self, series: &TimeSeries) -> Result<()> {
        if series.is_empty() {
            return Err(ForecastError::EmptyData);
        }
        if !series.is_regular() {
            return Err(ForecastError::TimestampError(
                "classical decomposition requires equally spaced observations".to_string(),
            ));
        }

        let values = series.values();
        let n = values.len();
        let seasons = self.config.seasons;

        let seasonal = seasonal_components_with(values, &self.config)?;
        let fit = fit_trend(values, &seasonal, seasons)?;

        let fitted: Vec<f64> = (0..n)
            .map(|i| fit.predict((i + 1) as f64) * seasonal[i % seasons])
            .collect();
        let residuals: Vec<f64> = values
            .iter()
            .zip(fitted.iter())
            .map(|(y, f)| y - f)
            .collect();
        let mean_square = residuals.iter().map(|r| r * r).sum::<f64>() / n as f64;

        debug!(
            observations = n,
            seasons,
            slope = fit.slope,
            intercept = fit.intercept,
            residual_std = mean_square.sqrt(),
            "multiplicative decomposition fitted"
        );

        self.seasonal = Some(seasonal);
        self.trend = Some(fit);
        self.history = Some(series.clone());
        self.fitted = Some(fitted);
        self.residuals = Some(residuals);
        self.residual_std = Some(mean_square.sqrt());

        Ok(())
    }

    fn predict(&self, horizon: usize) -> Result<Forecast> {
        let (seasonal, fit, n) = self.fitted_state()?;
        let seasons = seasonal.len();

        let values = (n + 1..=n + horizon)
            .map(|t| fit.predict(t as f64) * seasonal[(t - 1) % seasons])
            .collect();

        let history = self.history.as_ref().ok_or(ForecastError::FitRequired)?;
        Forecast::from_values(values).with_timestamps(history.future_timestamps(horizon)?)
    }

    fn predict_with_intervals(&self, horizon: usize, level: f64) -> Result<Forecast> {
        if !(level > 0.0 && level < 1.0) {
            return Err(ForecastError::InvalidParameter(format!(
                "interval level must be in (0, 1), got {}",
                level
            )));
        }

        let forecast = self.predict(horizon)?;
        let (seasonal, _, n) = self.fitted_state()?;
        let sigma = self.residual_std.ok_or(ForecastError::FitRequired)?;
        let z = quantile_normal((1.0 + level) / 2.0);

        let (lower, upper): (Vec<f64>, Vec<f64>) = forecast
            .values()
            .iter()
            .enumerate()
            .map(|(h, &point)| {
                let width = z * sigma * seasonal[(n + h) % seasonal.len()].abs();
                (point - width, point + width)
            })
            .unzip();

        forecast.with_intervals(lower, upper)
    }

    fn fitted_values(&self) -> Option<&[f64]> {
        self.fitted.as_deref()
    }

    fn residuals(&self) -> Option<&[f64]> {
        self.residuals.as_deref()
    }

    fn name(&self) -> &str {
        "MultiplicativeDecomposition"
    }
}
