//! Data transformations for time series.
//!
//! # Example
//!
//! ```
//! use classical_forecast::transform::{centered_moving_average, moving_average};
//!
//! let series = vec![1.0, 2.0, 3.0, 4.0, 5.0];
//!
//! let ma = moving_average(&series, 2).unwrap();
//! let cma = centered_moving_average(&series, 2).unwrap();
//! assert_eq!(ma.len(), 4);
//! assert_eq!(cma.len(), 3);
//! ```

pub mod window;

pub use window::{centered_moving_average, moving_average};
