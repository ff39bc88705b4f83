//! Seasonal decomposition.
//!
//! Classical multiplicative decomposition of a series into a per-phase
//! seasonal index and a linear trend.

mod classical;

pub use classical::{
    deseasonalize, fit_trend, project_trend, seasonal_components, seasonal_components_with,
    trend_components, DecompositionConfig,
};
