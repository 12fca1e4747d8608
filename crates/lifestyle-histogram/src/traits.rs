//! Core trait for histogram building

use crate::types::Histogram;
use lifestyle_core::Result;

/// Trait for building histograms from sample data
pub trait HistogramBuilder {
    /// Build a histogram from the given sample
    fn build(&self, sample: &[f64]) -> Result<Histogram>;
}
