//! Tukey-fence outlier classification
//!
//! Values strictly outside `[Q1 − 1.5·IQR, Q3 + 1.5·IQR]` are outliers. This
//! is the box-plot rule: see <https://en.wikipedia.org/wiki/Box_plot>.

use tracing::debug;

/// Fence multiplier applied to the IQR
pub const TUKEY_MULTIPLIER: f64 = 1.5;

/// Lower and upper outlier boundaries
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TukeyFence {
    pub lower: f64,
    pub upper: f64,
}

impl TukeyFence {
    /// Build the fence from the first and third quartiles
    pub fn from_quartiles(q1: f64, q3: f64) -> Self {
        let iqr = q3 - q1;
        Self {
            lower: q1 - TUKEY_MULTIPLIER * iqr,
            upper: q3 + TUKEY_MULTIPLIER * iqr,
        }
    }

    /// True if `value` lies inside the fence, boundaries included
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }
}

/// Result of partitioning a column with a [`TukeyFence`]
#[derive(Debug, Clone, PartialEq)]
pub struct OutlierReport {
    pub fence: TukeyFence,
    /// Outlying values in their original column order
    pub outliers: Vec<f64>,
    /// Smallest value inside the fence (box-plot whisker end)
    pub whisker_low: f64,
    /// Largest value inside the fence (box-plot whisker end)
    pub whisker_high: f64,
}

impl OutlierReport {
    /// Number of outliers
    pub fn count(&self) -> usize {
        self.outliers.len()
    }

    /// Outliers above the upper fence, in column order
    pub fn above_upper(&self) -> impl Iterator<Item = f64> + '_ {
        let upper = self.fence.upper;
        self.outliers.iter().copied().filter(move |&v| v > upper)
    }

    /// Outliers below the lower fence, in column order
    pub fn below_lower(&self) -> impl Iterator<Item = f64> + '_ {
        let lower = self.fence.lower;
        self.outliers.iter().copied().filter(move |&v| v < lower)
    }
}

/// Partition `values` with the 1.5 × IQR fence built from `q1` and `q3`
///
/// The filter is stable: outliers keep the relative order they have in
/// `values`. If no value falls inside the fence the whiskers collapse onto
/// the quartiles.
pub fn classify(values: &[f64], q1: f64, q3: f64) -> OutlierReport {
    let fence = TukeyFence::from_quartiles(q1, q3);

    let mut outliers = Vec::new();
    let mut whisker_low = f64::INFINITY;
    let mut whisker_high = f64::NEG_INFINITY;
    for &v in values {
        if fence.contains(v) {
            whisker_low = whisker_low.min(v);
            whisker_high = whisker_high.max(v);
        } else {
            outliers.push(v);
        }
    }

    if whisker_low > whisker_high {
        whisker_low = q1;
        whisker_high = q3;
    }

    debug!(
        lower = fence.lower,
        upper = fence.upper,
        outliers = outliers.len(),
        "classified column"
    );

    OutlierReport {
        fence,
        outliers,
        whisker_low,
        whisker_high,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fence_bounds() {
        let fence = TukeyFence::from_quartiles(68.0, 72.0);
        assert_eq!(fence.lower, 62.0);
        assert_eq!(fence.upper, 78.0);
        assert!(fence.contains(78.0));
        assert!(!fence.contains(78.5));
    }

    #[test]
    fn test_outliers_keep_source_order() {
        let values = vec![70.0, 85.0, 69.0, 40.0, 71.0, 80.0];
        let report = classify(&values, 68.0, 72.0);
        assert_eq!(report.outliers, vec![85.0, 40.0, 80.0]);
        assert_eq!(report.count(), 3);
        assert_eq!(report.above_upper().collect::<Vec<_>>(), vec![85.0, 80.0]);
        assert_eq!(report.below_lower().collect::<Vec<_>>(), vec![40.0]);
        assert_eq!(report.whisker_low, 69.0);
        assert_eq!(report.whisker_high, 71.0);
    }

    #[test]
    fn test_collapsed_fence() {
        // IQR = 0: anything different from the single point is an outlier
        let values = vec![5.0, 5.0, 5.0, 5.0, 6.0];
        let report = classify(&values, 5.0, 5.0);
        assert_eq!(report.fence, TukeyFence { lower: 5.0, upper: 5.0 });
        assert_eq!(report.outliers, vec![6.0]);
        assert_eq!((report.whisker_low, report.whisker_high), (5.0, 5.0));
    }

    #[test]
    fn test_no_inliers_falls_back_to_quartiles() {
        let report = classify(&[1.0, 9.0], 4.0, 4.0);
        assert_eq!(report.count(), 2);
        assert_eq!((report.whisker_low, report.whisker_high), (4.0, 4.0));
    }
}
