//! TimeSeries data structure for representing equally spaced observations.

use crate::error::{ForecastError, Result};
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;

/// A univariate time series with timestamps and values.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries {
    timestamps: Vec<DateTime<Utc>>,
    values: Vec<f64>,
}

impl TimeSeries {
    /// Create a series from paired timestamps and values.
    ///
    /// Timestamps must be strictly increasing and match the values in length.
    pub fn univariate(timestamps: Vec<DateTime<Utc>>, values: Vec<f64>) -> Result<Self> {
        if timestamps.len() != values.len() {
            return Err(ForecastError::DimensionMismatch {
                expected: timestamps.len(),
                got: values.len(),
            });
        }
        if timestamps.windows(2).any(|w| w[1] <= w[0]) {
            return Err(ForecastError::TimestampError(
                "timestamps must be strictly increasing".to_string(),
            ));
        }

        Ok(Self { timestamps, values })
    }

    /// Create a regular series starting at `start`, one observation every `step`.
    pub fn regular(start: DateTime<Utc>, step: Duration, values: Vec<f64>) -> Result<Self> {
        if step <= Duration::zero() {
            return Err(ForecastError::TimestampError(
                "step must be positive".to_string(),
            ));
        }
        let timestamps = (0..values.len())
            .map(|i| step_after(start, step, i))
            .collect::<Result<Vec<_>>>()?;
        Self::univariate(timestamps, values)
    }

    /// Get the number of observations.
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    /// Check if the series is empty.
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    pub fn timestamps(&self) -> &[DateTime<Utc>] {
        &self.timestamps
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// True when every gap between consecutive timestamps is the same.
    pub fn is_regular(&self) -> bool {
        let mut gaps = self.timestamps.windows(2).map(|w| w[1] - w[0]);
        match gaps.next() {
            Some(first) => gaps.all(|gap| gap == first),
            None => true,
        }
    }

    /// Infer the sampling interval as the modal gap between timestamps.
    ///
    /// `tolerance` is the minimum share of gaps that must equal the mode.
    pub fn infer_frequency(&self, tolerance: f64) -> Result<Duration> {
        if self.len() < 2 {
            return Err(ForecastError::InsufficientData {
                needed: 2,
                got: self.len(),
            });
        }

        let mut counts: HashMap<Duration, usize> = HashMap::new();
        for w in self.timestamps.windows(2) {
            *counts.entry(w[1] - w[0]).or_insert(0) += 1;
        }

        let (modal_gap, modal_count) = counts
            .iter()
            .max_by_key(|(&gap, &count)| (count, std::cmp::Reverse(gap)))
            .map(|(&gap, &count)| (gap, count))
            .ok_or_else(|| ForecastError::TimestampError("no spacing data".to_string()))?;

        let modal_ratio = modal_count as f64 / (self.len() - 1) as f64;
        if modal_ratio < tolerance {
            return Err(ForecastError::TimestampError(
                "no unique modal spacing found".to_string(),
            ));
        }

        Ok(modal_gap)
    }

    /// Timestamps of the `horizon` steps following the last observation.
    pub fn future_timestamps(&self, horizon: usize) -> Result<Vec<DateTime<Utc>>> {
        if !self.is_regular() {
            return Err(ForecastError::TimestampError(
                "series is not equally spaced".to_string(),
            ));
        }
        let step = self.infer_frequency(1.0)?;
        let last = self.timestamps[self.len() - 1];

        (1..=horizon).map(|h| step_after(last, step, h)).collect()
    }
}

/// `origin + step · k`, failing instead of wrapping when out of range.
fn step_after(origin: DateTime<Utc>, step: Duration, k: usize) -> Result<DateTime<Utc>> {
    i32::try_from(k)
        .ok()
        .and_then(|k| step.checked_mul(k))
        .and_then(|offset| origin.checked_add_signed(offset))
        .ok_or_else(|| {
            ForecastError::InvalidParameter(format!(
                "step {} is outside the representable timestamp range",
                k
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn univariate_validates_lengths() {
        let result = TimeSeries::univariate(vec![start()], vec![1.0, 2.0]);
        assert_eq!(
            result,
            Err(ForecastError::DimensionMismatch {
                expected: 1,
                got: 2
            })
        );
    }

    #[test]
    fn univariate_requires_increasing_timestamps() {
        let t = start();
        let result = TimeSeries::univariate(vec![t, t], vec![1.0, 2.0]);
        assert!(matches!(result, Err(ForecastError::TimestampError(_))));
    }

    #[test]
    fn regular_series() {
        let ts = TimeSeries::regular(start(), Duration::days(1), vec![1.0, 2.0, 3.0]).unwrap();

        assert_eq!(ts.len(), 3);
        assert!(ts.is_regular());
        assert_eq!(ts.infer_frequency(1.0).unwrap(), Duration::days(1));
        assert_eq!(ts.timestamps()[2], start() + Duration::days(2));
        assert_eq!(ts.values(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn regular_rejects_non_positive_step() {
        assert!(TimeSeries::regular(start(), Duration::zero(), vec![1.0]).is_err());
    }

    #[test]
    fn irregular_series_is_detected() {
        let t = start();
        let ts = TimeSeries::univariate(
            vec![t, t + Duration::hours(1), t + Duration::hours(3)],
            vec![1.0, 2.0, 3.0],
        )
        .unwrap();

        assert!(!ts.is_regular());
        assert!(ts.infer_frequency(0.9).is_err());
        assert!(ts.future_timestamps(2).is_err());
    }

    #[test]
    fn future_timestamps_continue_spacing() {
        let ts = TimeSeries::regular(start(), Duration::hours(6), vec![1.0; 4]).unwrap();
        let future = ts.future_timestamps(2).unwrap();

        assert_eq!(
            future,
            vec![start() + Duration::hours(24), start() + Duration::hours(30)]
        );
    }

    #[test]
    fn sub_second_spacing_is_kept() {
        let ts =
            TimeSeries::regular(start(), Duration::milliseconds(500), vec![1.0; 16]).unwrap();

        assert_eq!(ts.infer_frequency(1.0).unwrap(), Duration::milliseconds(500));
        let future = ts.future_timestamps(2).unwrap();
        assert_eq!(future[0], start() + Duration::milliseconds(8_000));
        assert_eq!(future[1], start() + Duration::milliseconds(8_500));
    }

    #[test]
    fn fractional_second_spacing_is_kept() {
        let ts =
            TimeSeries::regular(start(), Duration::milliseconds(1_500), vec![1.0; 3]).unwrap();
        assert_eq!(ts.infer_frequency(1.0).unwrap(), Duration::milliseconds(1_500));
    }

    #[test]
    fn future_timestamps_out_of_range_are_rejected() {
        // One step of roughly 100,000 years: the second future step passes chrono's maximum year.
        let ts = TimeSeries::regular(start(), Duration::days(36_500_000), vec![1.0, 2.0]).unwrap();

        assert!(matches!(
            ts.future_timestamps(2),
            Err(ForecastError::InvalidParameter(_))
        ));
    }

    #[test]
    fn step_count_beyond_i32_is_rejected() {
        let result = step_after(start(), Duration::nanoseconds(1), usize::MAX);
        assert!(matches!(result, Err(ForecastError::InvalidParameter(_))));
    }

    #[test]
    fn infer_frequency_needs_two_points() {
        let ts = TimeSeries::univariate(vec![start()], vec![1.0]).unwrap();
        assert_eq!(
            ts.infer_frequency(1.0),
            Err(ForecastError::InsufficientData { needed: 2, got: 1 })
        );
    }
}
