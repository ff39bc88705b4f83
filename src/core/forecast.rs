//! Forecast result structure for holding predictions.

use crate::error::{ForecastError, Result};
use chrono::{DateTime, Utc};

/// Point forecasts with optional prediction intervals and timestamps.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Forecast {
    point: Vec<f64>,
    lower: Option<Vec<f64>>,
    upper: Option<Vec<f64>>,
    timestamps: Option<Vec<DateTime<Utc>>>,
}

impl Forecast {
    /// Create an empty forecast.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a forecast from point predictions.
    pub fn from_values(values: Vec<f64>) -> Self {
        Self {
            point: values,
            ..Self::default()
        }
    }

    /// Attach prediction intervals, checking they match the horizon.
    pub fn with_intervals(mut self, lower: Vec<f64>, upper: Vec<f64>) -> Result<Self> {
        for bound in [&lower, &upper] {
            if bound.len() != self.point.len() {
                return Err(ForecastError::DimensionMismatch {
                    expected: self.point.len(),
                    got: bound.len(),
                });
            }
        }
        self.lower = Some(lower);
        self.upper = Some(upper);
        Ok(self)
    }

    /// Attach one timestamp per forecast step.
    pub fn with_timestamps(mut self, timestamps: Vec<DateTime<Utc>>) -> Result<Self> {
        if timestamps.len() != self.point.len() {
            return Err(ForecastError::DimensionMismatch {
                expected: self.point.len(),
                got: timestamps.len(),
            });
        }
        self.timestamps = Some(timestamps);
        Ok(self)
    }

    /// Number of forecast steps.
    pub fn horizon(&self) -> usize {
        self.point.len()
    }

    pub fn is_empty(&self) -> bool {
        self.point.is_empty()
    }

    /// Point predictions.
    pub fn values(&self) -> &[f64] {
        &self.point
    }

    pub fn lower(&self) -> Option<&[f64]> {
        self.lower.as_deref()
    }

    pub fn upper(&self) -> Option<&[f64]> {
        self.upper.as_deref()
    }

    pub fn timestamps(&self) -> Option<&[DateTime<Utc>]> {
        self.timestamps.as_deref()
    }

    pub fn has_intervals(&self) -> bool {
        self.lower.is_some() && self.upper.is_some()
    }
}
