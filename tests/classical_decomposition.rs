//! End-to-end scenarios through the public API.

use approx::assert_relative_eq;
use chrono::{Duration, TimeZone, Utc};
use classical_forecast::prelude::*;
use classical_forecast::models::multiplicative_forecast_with;

const QUARTERLY: [f64; 12] = [
    10.0, 12.0, 14.0, 16.0, 12.0, 14.0, 16.0, 18.0, 14.0, 16.0, 18.0, 20.0,
];

/// Monthly sales with yearly seasonality and an upward trend.
fn monthly_sales(years: usize) -> Vec<f64> {
    let pattern = [
        0.82, 0.85, 0.95, 1.0, 1.05, 1.1, 1.15, 1.12, 1.02, 0.98, 0.94, 1.02,
    ];
    (0..years * 12)
        .map(|i| (200.0 + 1.5 * (i + 1) as f64) * pattern[i % 12])
        .collect()
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn linear_regression_on_exact_line() {
    let x = [1.0, 2.0, 3.0, 4.0];
    let y: Vec<f64> = x.iter().map(|v| 3.0 * v + 2.0).collect();

    let fit = simple_linear_regression(&x, &y).unwrap();

    assert_relative_eq!(fit.slope, 3.0, epsilon = 1e-10);
    assert_relative_eq!(fit.intercept, 2.0, epsilon = 1e-10);
}

#[test]
fn quarterly_scenario() {
    init_tracing();

    let result = time_series_forecast_multiplicative_model(&QUARTERLY, 4, 4).unwrap();

    assert_eq!(result.seasonal_components.len(), 4);
    assert_eq!(result.trend_components.len(), 16);
    assert_eq!(result.forecasts.len(), 16);

    let mape = mean_absolute_percent_error(&QUARTERLY, &result.forecasts).unwrap();
    assert!(mape > 0.0 && mape < 5.0);
}

#[test]
fn pipeline_stages_are_consistent() {
    let ma = moving_average(&QUARTERLY, 4).unwrap();
    let cma = centered_moving_average(&QUARTERLY, 4).unwrap();
    let seasonal = seasonal_components(&QUARTERLY, 4).unwrap();
    let trend = trend_components(&QUARTERLY, &seasonal, 4, 16).unwrap();
    let result = time_series_forecast_multiplicative_model(&QUARTERLY, 4, 4).unwrap();

    assert_eq!(ma.len(), 9);
    assert_eq!(cma.len(), 8);
    assert_eq!(result.seasonal_components, seasonal);
    assert_eq!(result.trend_components, trend);
}

#[test]
fn monthly_forecast_follows_trend_and_season() {
    let sales = monthly_sales(4);
    let result = time_series_forecast_multiplicative_model(&sales, 12, 12).unwrap();

    // July peaks, January troughs, in the forecast year as in the history.
    let next_year = &result.forecasts[48..60];
    let peak = next_year
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.total_cmp(b.1))
        .map(|(i, _)| i);
    let trough = next_year
        .iter()
        .enumerate()
        .min_by(|a, b| a.1.total_cmp(b.1))
        .map(|(i, _)| i);
    assert_eq!(peak, Some(6));
    assert_eq!(trough, Some(0));

    // Year over year growth.
    assert!(result.forecasts[54] > sales[42]);
}

#[test]
fn insufficient_history_is_reported() {
    let sales = monthly_sales(1);
    let result = time_series_forecast_multiplicative_model(&sales, 12, 6);

    assert_eq!(
        result,
        Err(ForecastError::InsufficientData { needed: 12, got: 0 })
    );
}

#[test]
fn normalized_variant_keeps_forecast_shape() {
    let sales = monthly_sales(4);
    let config = DecompositionConfig::new(12).with_normalized_seasonal(true);

    let normalized = multiplicative_forecast_with(&sales, &config, 12).unwrap();
    let raw = time_series_forecast_multiplicative_model(&sales, 12, 12).unwrap();

    let mean = normalized.seasonal_components.iter().sum::<f64>() / 12.0;
    assert_relative_eq!(mean, 1.0, epsilon = 1e-12);
    for (a, b) in normalized.forecasts.iter().zip(raw.forecasts.iter()) {
        assert_relative_eq!(a, b, max_relative = 1e-9);
    }
}

#[test]
fn model_forecast_on_timestamped_series() {
    init_tracing();

    let start = Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap();
    let sales = monthly_sales(3);
    let ts = TimeSeries::regular(start, Duration::days(30), sales.clone()).unwrap();

    let mut model = MultiplicativeDecomposition::new(12);
    model.fit(&ts).unwrap();

    let forecast = model.predict_with_intervals(12, 0.9).unwrap();
    let reference = time_series_forecast_multiplicative_model(&sales, 12, 12).unwrap();

    assert_eq!(forecast.horizon(), 12);
    assert_eq!(forecast.values(), &reference.forecasts[36..]);
    assert!(forecast.has_intervals());
    assert_eq!(
        forecast.timestamps().unwrap()[0],
        start + Duration::days(30 * 36)
    );
    assert!(model.mape().unwrap() < 3.0);
}

#[test]
fn mape_edge_cases() {
    assert_eq!(mean_absolute_percent_error(&QUARTERLY, &QUARTERLY), Ok(0.0));
    assert_eq!(
        mean_absolute_percent_error(&[5.0, 0.0], &[5.0, 1.0]),
        Err(ForecastError::UndefinedRatio { index: 1 })
    );
    assert!(matches!(
        mean_absolute_percent_error(&QUARTERLY, &QUARTERLY[..4]),
        Err(ForecastError::DimensionMismatch { .. })
    ));
}
