//! Quantile estimation over sorted samples
//!
//! The analysis needs exactly one convention: linear interpolation between
//! order statistics (Hyndman & Fan definition 7), which is what most
//! statistical libraries use by default. It is exposed through the
//! [`QuantileEstimator`] trait so the describe crate can be handed any
//! estimator.
//!
//! # Example
//!
//! ```rust
//! use lifestyle_quantile::{LinearInterpolation, QuantileEstimator};
//!
//! let mut data = vec![10.0, 1.0, 4.0, 7.0, 2.0, 9.0, 3.0, 6.0, 5.0, 8.0];
//! let q = LinearInterpolation.quantiles(&mut data, &[0.25, 0.5, 0.75]).unwrap();
//! assert_eq!(q, vec![3.25, 5.5, 7.75]);
//! ```

mod linear;
mod traits;

pub use linear::LinearInterpolation;
pub use traits::QuantileEstimator;

pub use lifestyle_core::{Error, Result};
