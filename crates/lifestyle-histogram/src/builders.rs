//! Histogram building strategies

use crate::traits::HistogramBuilder;
use crate::types::{Histogram, HistogramBin};
use lifestyle_core::{utils, Result};

/// Fixed-width histogram builder
///
/// Splits `[min, max]` into `num_bins` equal-width bins. Every bin is
/// half-open except the last, which also takes values equal to `max`. A
/// sample with a single distinct value `v` is binned over `[v − 0.5, v + 0.5]`
/// so the bars keep a visible width.
#[derive(Debug, Clone, Copy)]
pub struct FixedWidthBuilder {
    num_bins: usize,
}

impl FixedWidthBuilder {
    pub fn new(num_bins: usize) -> Self {
        Self {
            num_bins: num_bins.max(1),
        }
    }
}

impl HistogramBuilder for FixedWidthBuilder {
    fn build(&self, sample: &[f64]) -> Result<Histogram> {
        if sample.is_empty() {
            return Ok(Histogram::new(vec![]));
        }
        utils::check_finite(sample)?;

        let (mut min, mut max) = sample
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
                (lo.min(x), hi.max(x))
            });
        if min == max {
            min -= 0.5;
            max += 0.5;
        }

        let width = (max - min) / self.num_bins as f64;
        let mut bins: Vec<HistogramBin> = (0..self.num_bins)
            .map(|i| {
                let left = min + i as f64 * width;
                let right = if i == self.num_bins - 1 {
                    max // Ensure last bin includes max
                } else {
                    min + (i + 1) as f64 * width
                };
                HistogramBin::new(left, right, 0)
            })
            .collect();

        for &value in sample {
            let idx = ((value - min) / width).floor() as usize;
            let mut idx = idx.min(self.num_bins - 1);
            // Edges are recomputed per bin, so rounding may disagree with the index by one
            while idx > 0 && value < bins[idx].left {
                idx -= 1;
            }
            while idx < self.num_bins - 1 && value >= bins[idx].right {
                idx += 1;
            }
            bins[idx].count += 1;
        }

        Ok(Histogram::new(bins))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn counts(hist: &Histogram) -> Vec<usize> {
        hist.bins().iter().map(|bin| bin.count).collect()
    }

    #[test]
    fn test_fixed_width_counts() {
        let data: Vec<f64> = (1..=10).map(f64::from).collect();
        let hist = FixedWidthBuilder::new(3).build(&data).unwrap();
        assert_eq!(counts(&hist), vec![3, 3, 4]);
        assert_relative_eq!(hist.bins()[0].right, 4.0);
        assert_eq!(hist.bins()[2].right, 10.0);
        assert_eq!(hist.max_count(), 4);
    }

    #[test]
    fn test_fifteen_bins_sum_to_total() {
        let data: Vec<f64> = (0..374).map(|i| 65.0 + f64::from(i % 22)).collect();
        let hist = FixedWidthBuilder::new(15).build(&data).unwrap();
        assert_eq!(hist.bins().len(), 15);
        assert_eq!(counts(&hist).iter().sum::<usize>(), 374);
        assert_eq!(hist.span(), Some((65.0, 86.0)));
    }

    #[test]
    fn test_constant_sample() {
        let hist = FixedWidthBuilder::new(15).build(&[60.0; 5]).unwrap();
        assert_eq!(hist.span(), Some((59.5, 60.5)));
        assert_eq!(counts(&hist).iter().sum::<usize>(), 5);
    }

    #[test]
    fn test_empty_and_zero_bins() {
        let hist = FixedWidthBuilder::new(15).build(&[]).unwrap();
        assert!(hist.bins().is_empty());
        assert_eq!(hist.span(), None);

        let hist = FixedWidthBuilder::new(0).build(&[1.0, 2.0]).unwrap();
        assert_eq!(counts(&hist), vec![2]);
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(FixedWidthBuilder::new(15).build(&[1.0, f64::INFINITY]).is_err());
    }
}
