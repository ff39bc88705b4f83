//! Moving averages over a fixed seasonal window.
//!
//! Both functions return only the complete windows: there is no padding with
//! `NaN` at the edges, so the output is shorter than the input.

use crate::error::{ForecastError, Result};

fn check_window(series: &[f64], window: usize) -> Result<()> {
    if window == 0 {
        return Err(ForecastError::InvalidParameter(
            "seasons must be at least 1".to_string(),
        ));
    }
    if series.is_empty() {
        return Err(ForecastError::EmptyData);
    }
    if series.len() < window {
        return Err(ForecastError::InsufficientData {
            needed: window,
            got: series.len(),
        });
    }
    Ok(())
}

/// Trailing simple moving average MA(p).
///
/// Element `k` is the mean of `series[k..k + window]`, so `n` inputs give
/// `n - window + 1` outputs. A single running sum is maintained, making this
/// O(n) regardless of the window size.
///
/// # Example
/// ```
/// use classical_forecast::transform::moving_average;
///
/// let ma = moving_average(&[1.0, 2.0, 3.0, 4.0, 5.0], 2).unwrap();
/// assert_eq!(ma, vec![1.5, 2.5, 3.5, 4.5]);
/// ```
pub fn moving_average(series: &[f64], window: usize) -> Result<Vec<f64>> {
    check_window(series, window)?;

    let p = window as f64;
    let mut result = Vec::with_capacity(series.len() - window + 1);
    let mut sum: f64 = series[..window].iter().sum();
    result.push(sum / p);

    for (incoming, outgoing) in series[window..].iter().zip(series.iter()) {
        sum += incoming - outgoing;
        result.push(sum / p);
    }

    Ok(result)
}

/// Centered moving average CMA(p).
///
/// For an odd window the trailing average is already centered on the middle
/// observation and is returned as is (`n - window + 1` values). For an even
/// window, adjacent pairs of the trailing average are averaged so each value
/// lines up with an observation (`n - window` values, possibly none).
///
/// # Example
/// ```
/// use classical_forecast::transform::centered_moving_average;
///
/// let cma = centered_moving_average(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 4).unwrap();
/// assert_eq!(cma, vec![3.0, 4.0]);
/// ```
pub fn centered_moving_average(series: &[f64], window: usize) -> Result<Vec<f64>> {
    let ma = moving_average(series, window)?;

    if window % 2 == 1 {
        return Ok(ma);
    }

    Ok(ma.windows(2).map(|w| (w[0] + w[1]) / 2.0).collect())
}
