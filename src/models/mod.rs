//! Forecasting models.

mod traits;

pub mod multiplicative;

pub use multiplicative::{
    multiplicative_forecast_with, time_series_forecast_multiplicative_model, ForecastResult,
    MultiplicativeDecomposition, MultiplicativeDecompositionBuilder,
};
pub use traits::{BoxedForecaster, Forecaster};
