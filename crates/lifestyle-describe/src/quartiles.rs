//! First quartile, median, third quartile

use crate::central::median_sorted;
use lifestyle_core::{Error, Result};
use lifestyle_quantile::QuantileEstimator;

/// The three quartiles of a column
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quartiles {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
}

impl Quartiles {
    /// Compute quartiles of pre-sorted data
    ///
    /// Q1 and Q3 come from `estimator` at p = 0.25 and p = 0.75; the median is
    /// the middle order statistic (or the mean of the middle two).
    pub fn from_sorted<Q: QuantileEstimator>(sorted: &[f64], estimator: &Q) -> Result<Self> {
        if sorted.is_empty() {
            return Err(Error::empty_input());
        }
        let q = estimator.quantiles_sorted(sorted, &[0.25, 0.75])?;
        Ok(Self {
            q1: q[0],
            median: median_sorted(sorted),
            q3: q[1],
        })
    }

    /// Interquartile range, Q3 − Q1
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use lifestyle_quantile::LinearInterpolation;

    #[test]
    fn test_quartiles_basic() {
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
        let q = Quartiles::from_sorted(&data, &LinearInterpolation).unwrap();
        assert_relative_eq!(q.q1, 3.0);
        assert_relative_eq!(q.median, 5.0);
        assert_relative_eq!(q.q3, 7.0);
        assert_relative_eq!(q.iqr(), 4.0);
    }

    #[test]
    fn test_quartiles_constant() {
        let q = Quartiles::from_sorted(&[3.0; 4], &LinearInterpolation).unwrap();
        assert_eq!((q.q1, q.median, q.q3), (3.0, 3.0, 3.0));
        assert_eq!(q.iqr(), 0.0);
    }

    #[test]
    fn test_quartiles_empty() {
        assert!(Quartiles::from_sorted(&[], &LinearInterpolation).is_err());
    }
}
