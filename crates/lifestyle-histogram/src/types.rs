//! Core types for histogram representation

/// A single bin in a histogram
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    /// Left edge of the bin (inclusive)
    pub left: f64,
    /// Right edge of the bin (exclusive, except for the last bin)
    pub right: f64,
    /// Number of values in this bin
    pub count: usize,
}

impl HistogramBin {
    pub fn new(left: f64, right: f64, count: usize) -> Self {
        Self { left, right, count }
    }
}

/// Contiguous bins covering a sample
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    bins: Vec<HistogramBin>,
}

impl Histogram {
    pub fn new(bins: Vec<HistogramBin>) -> Self {
        Self { bins }
    }

    pub fn bins(&self) -> &[HistogramBin] {
        &self.bins
    }

    /// Get the maximum count in any bin
    pub fn max_count(&self) -> usize {
        self.bins.iter().map(|bin| bin.count).max().unwrap_or(0)
    }

    /// Left edge of the first bin and right edge of the last
    pub fn span(&self) -> Option<(f64, f64)> {
        Some((self.bins.first()?.left, self.bins.last()?.right))
    }
}
