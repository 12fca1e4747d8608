//! Core trait for quantile estimation

use lifestyle_core::{Error, Result};

/// Main trait for quantile estimation
pub trait QuantileEstimator {
    /// Short name of the estimation method
    fn name(&self) -> &str;

    /// Estimate a single quantile from pre-sorted data
    ///
    /// # Arguments
    /// * `sorted_data` - The data sample, already sorted ascending
    /// * `p` - The probability (0.0 to 1.0)
    fn quantile_sorted(&self, sorted_data: &[f64], p: f64) -> Result<f64>;

    /// Estimate a single quantile
    ///
    /// # Warning
    /// This method will sort the data in place! If you need to preserve the original
    /// order, use `quantile_sorted()` with pre-sorted data or make a copy first.
    fn quantile(&self, data: &mut [f64], p: f64) -> Result<f64> {
        data.sort_by(|a, b| a.total_cmp(b));
        self.quantile_sorted(data, p)
    }

    /// Estimate multiple quantiles from pre-sorted data
    fn quantiles_sorted(&self, sorted_data: &[f64], ps: &[f64]) -> Result<Vec<f64>> {
        ps.iter()
            .map(|&p| self.quantile_sorted(sorted_data, p))
            .collect()
    }

    /// Estimate multiple quantiles
    ///
    /// # Warning
    /// Sorts the data in place, like `quantile()`.
    fn quantiles(&self, data: &mut [f64], ps: &[f64]) -> Result<Vec<f64>> {
        data.sort_by(|a, b| a.total_cmp(b));
        self.quantiles_sorted(data, ps)
    }
}

/// Validate a probability and a non-empty sample
pub(crate) fn check_arguments(sorted_data: &[f64], p: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&p) {
        return Err(Error::invalid_quantile(p));
    }
    if sorted_data.is_empty() {
        return Err(Error::empty_input());
    }
    Ok(())
}
