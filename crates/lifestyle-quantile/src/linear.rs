//! Linear interpolation between order statistics

use crate::traits::{check_arguments, QuantileEstimator};
use lifestyle_core::Result;

/// Hyndman & Fan definition 7 quantile estimator
///
/// For a sorted sample `x[0..n]` and probability `p`, let `h = (n - 1) * p`.
/// The estimate is `x[⌊h⌋] + (h - ⌊h⌋) * (x[⌊h⌋ + 1] - x[⌊h⌋])`, so `p = 0`
/// and `p = 1` return the minimum and maximum exactly and every estimate lies
/// between two adjacent order statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinearInterpolation;

impl QuantileEstimator for LinearInterpolation {
    fn name(&self) -> &str {
        "linear"
    }

    fn quantile_sorted(&self, sorted_data: &[f64], p: f64) -> Result<f64> {
        check_arguments(sorted_data, p)?;

        let n = sorted_data.len();
        let h = (n - 1) as f64 * p;
        let lo = h.floor() as usize;
        if lo + 1 >= n {
            return Ok(sorted_data[n - 1]);
        }

        let frac = h - lo as f64;
        let lower = sorted_data[lo];
        let upper = sorted_data[lo + 1];
        Ok(lower + frac * (upper - lower))
    }
}
