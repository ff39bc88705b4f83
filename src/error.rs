//! Error types for the classical-forecast library.

use thiserror::Error;

/// Result type alias for decomposition and forecast operations.
pub type Result<T> = std::result::Result<T, ForecastError>;

/// Errors that can occur during decomposition and forecasting.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    /// Input data is empty.
    #[error("empty input data")]
    EmptyData,

    /// Insufficient data points for the operation.
    #[error("insufficient data: need at least {needed}, got {got}")]
    InsufficientData { needed: usize, got: usize },

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Two paired inputs have different lengths.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// A ratio against an actual value of zero is undefined.
    #[error("undefined ratio: actual value at index {index} is zero")]
    UndefinedRatio { index: usize },

    /// Regression produced a non-finite slope or intercept.
    #[error("linear fit is not finite (degenerate or non-finite input)")]
    NonFiniteFit,

    /// Timestamp-related error.
    #[error("timestamp error: {0}")]
    TimestampError(String),

    /// Model has not been fitted yet.
    #[error("model must be fitted before prediction")]
    FitRequired,
}
