//! Per-column summary statistics

use crate::central::{median_sorted, modes};
use crate::moments::{adjusted_skewness, sample_variance};
use crate::quartiles::Quartiles;
use lifestyle_core::{utils, Result};
use lifestyle_quantile::{LinearInterpolation, QuantileEstimator};
use tracing::debug;

/// Descriptive statistics of one numeric column
///
/// Derived once from the column and never updated. Values are kept at full
/// precision; rounding is a presentation concern.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryStatistics {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    /// Every most-frequent value, ascending
    pub modes: Vec<f64>,
    /// Sample variance (n − 1 denominator)
    pub variance: f64,
    pub std_dev: f64,
    /// Adjusted Fisher–Pearson skewness
    pub skewness: f64,
    pub min: f64,
    pub max: f64,
    pub range: f64,
    pub q1: f64,
    pub q3: f64,
    pub iqr: f64,
}

impl SummaryStatistics {
    /// The single mode used wherever one representative is needed
    ///
    /// Ties resolve to the smallest of the equally frequent values, so the
    /// report and the chart marker always agree.
    pub fn primary_mode(&self) -> f64 {
        self.modes.first().copied().unwrap_or(self.median)
    }
}

/// Summarize a column using linearly interpolated quartiles
pub fn summarize(values: &[f64]) -> Result<SummaryStatistics> {
    summarize_with(values, &LinearInterpolation)
}

/// Summarize a column with a caller-chosen quantile estimator for Q1/Q3
pub fn summarize_with<Q: QuantileEstimator>(
    values: &[f64],
    estimator: &Q,
) -> Result<SummaryStatistics> {
    utils::check_finite(values)?;

    let sorted = utils::sorted(values);
    let quartiles = Quartiles::from_sorted(&sorted, estimator)?;
    let variance = sample_variance(&sorted)?;
    let min = sorted[0];
    let max = sorted[sorted.len() - 1];

    let stats = SummaryStatistics {
        count: values.len(),
        mean: utils::mean(&sorted),
        median: median_sorted(&sorted),
        modes: modes(&sorted),
        variance,
        std_dev: variance.sqrt(),
        skewness: adjusted_skewness(&sorted)?,
        min,
        max,
        range: max - min,
        q1: quartiles.q1,
        q3: quartiles.q3,
        iqr: quartiles.iqr(),
    };

    debug!(
        estimator = estimator.name(),
        count = stats.count,
        mean = stats.mean,
        median = stats.median,
        iqr = stats.iqr,
        "summarized column"
    );

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use crate::fence::{classify, TukeyFence};
    use lifestyle_core::Error;

    #[test]
    fn test_one_to_ten() {
        let data: Vec<f64> = (1..=10).map(f64::from).collect();
        let s = summarize(&data).unwrap();
        assert_eq!(s.count, 10);
        assert_relative_eq!(s.mean, 5.5);
        assert_relative_eq!(s.median, 5.5);
        assert_eq!(s.min, 1.0);
        assert_eq!(s.max, 10.0);
        assert_eq!(s.range, 9.0);
        assert_relative_eq!(s.q1, 3.25);
        assert_relative_eq!(s.q3, 7.75);
        assert_relative_eq!(s.iqr, 4.5);
        assert_relative_eq!(s.variance, 9.166666666666666, epsilon = 1e-12);
        assert_relative_eq!(s.skewness, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_constant_column() {
        let s = summarize(&[0.1; 7]).unwrap();
        assert_relative_eq!(s.mean, 0.1);
        assert_eq!(s.median, 0.1);
        assert_eq!(s.modes, vec![0.1]);
        assert_eq!(s.primary_mode(), 0.1);
        assert_eq!(s.variance, 0.0);
        assert_eq!(s.std_dev, 0.0);
        assert_eq!(s.skewness, 0.0);
        assert_eq!(s.iqr, 0.0);
        assert_eq!((s.q1, s.q3), (0.1, 0.1));
        let report = classify(&[0.1; 7], s.q1, s.q3);
        assert_eq!(report.fence, TukeyFence { lower: 0.1, upper: 0.1 });
        assert_eq!(report.count(), 0);
    }

    #[test]
    fn test_primary_mode_is_smallest_tie() {
        let s = summarize(&[60.0, 30.0, 60.0, 30.0, 45.0]).unwrap();
        assert_eq!(s.modes, vec![30.0, 60.0]);
        assert_eq!(s.primary_mode(), 30.0);
    }

    #[test]
    fn test_order_does_not_matter() {
        let a = summarize(&[3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0]).unwrap();
        let b = summarize(&[9.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0, 1.0]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_column() {
        assert!(matches!(summarize(&[]), Err(Error::EmptyColumn { column: None })));
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(matches!(summarize(&[1.0, f64::NAN]), Err(Error::InvalidInput(_))));
    }
}
