//! Utility functions for decomposition and evaluation.

pub mod metrics;
pub mod regression;
pub mod stats;

pub use metrics::mean_absolute_percent_error;
pub use regression::{simple_linear_regression, LinearFit};
pub use stats::{mean, quantile_normal};
