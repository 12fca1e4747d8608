//! Measures of central tendency

use ordered_float::OrderedFloat;
use std::collections::BTreeMap;

/// Median of pre-sorted data
///
/// The middle value, or the average of the two middle values when the count
/// is even. Returns NaN for empty input.
pub fn median_sorted(sorted: &[f64]) -> f64 {
    let n = sorted.len();
    if n == 0 {
        return f64::NAN;
    }
    let mid = n / 2;
    if n % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// All values sharing the highest frequency, in ascending order
///
/// Counting goes through a `BTreeMap` so the result never depends on hash
/// iteration order.
pub fn modes(sample: &[f64]) -> Vec<f64> {
    let mut counts: BTreeMap<OrderedFloat<f64>, usize> = BTreeMap::new();
    for &x in sample {
        *counts.entry(OrderedFloat(x)).or_insert(0) += 1;
    }

    let Some(&max_count) = counts.values().max() else {
        return Vec::new();
    };

    counts
        .into_iter()
        .filter(|&(_, count)| count == max_count)
        .map(|(value, _)| value.into_inner())
        .collect()
}
