//! Descriptive statistics for a single numeric column
//!
//! [`summarize`] derives a [`SummaryStatistics`] record (center, spread,
//! shape and quartiles) and [`classify`] partitions a column with Tukey's
//! 1.5 × IQR fence.
//!
//! Conventions, which matter because naive formulas give different numbers:
//!
//! - variance and standard deviation use the sample (n − 1) denominator;
//! - skewness is the adjusted Fisher–Pearson coefficient G1;
//! - quartiles interpolate linearly between order statistics
//!   ([`LinearInterpolation`]);
//! - ties for the mode resolve to the smallest value
//!   ([`SummaryStatistics::primary_mode`]).
//!
//! # Example
//!
//! ```rust
//! use lifestyle_describe::{classify, summarize};
//!
//! let data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
//! let stats = summarize(&data).unwrap();
//! assert_eq!(stats.mean, 5.5);
//! assert_eq!(stats.q1, 3.25);
//!
//! let report = classify(&data, stats.q1, stats.q3);
//! assert_eq!(report.count(), 0);
//! ```

pub mod central;
pub mod fence;
pub mod moments;
pub mod quartiles;
mod summary;

pub use fence::{classify, OutlierReport, TukeyFence, TUKEY_MULTIPLIER};
pub use quartiles::Quartiles;
pub use summary::{summarize, summarize_with, SummaryStatistics};

pub use lifestyle_core::{Error, Result};
pub use lifestyle_quantile::{LinearInterpolation, QuantileEstimator};
