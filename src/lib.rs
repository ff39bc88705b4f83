//! # classical-forecast
//!
//! Classical multiplicative time series decomposition and forecasting.
//!
//! A series is split into a per-phase seasonal index and a linear trend:
//! moving average → centered moving average → seasonal index →
//! deseasonalized trend fit → forecast recombination. Accuracy is scored with
//! the Mean Absolute Percent Error.
//!
//! ```
//! use classical_forecast::prelude::*;
//!
//! let y = [10.0, 12.0, 14.0, 16.0, 12.0, 14.0, 16.0, 18.0, 14.0, 16.0, 18.0, 20.0];
//! let result = time_series_forecast_multiplicative_model(&y, 4, 4).unwrap();
//! let mape = mean_absolute_percent_error(&y, &result.forecasts).unwrap();
//! assert!(mape < 5.0);
//! ```

#![allow(clippy::needless_range_loop)]

pub mod core;
pub mod error;
pub mod models;
pub mod seasonality;
pub mod transform;
pub mod utils;

pub use error::{ForecastError, Result};

pub mod prelude {
    pub use crate::core::{Forecast, TimeSeries};
    pub use crate::error::{ForecastError, Result};
    pub use crate::models::{
        time_series_forecast_multiplicative_model, ForecastResult, Forecaster,
        MultiplicativeDecomposition,
    };
    pub use crate::seasonality::{seasonal_components, trend_components, DecompositionConfig};
    pub use crate::transform::{centered_moving_average, moving_average};
    pub use crate::utils::{mean_absolute_percent_error, simple_linear_regression, LinearFit};
}
