//! Histogram construction for chart panels
//!
//! # Example
//!
//! ```rust
//! use lifestyle_histogram::{FixedWidthBuilder, HistogramBuilder};
//!
//! let data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
//! let histogram = FixedWidthBuilder::new(5).build(&data).unwrap();
//!
//! assert_eq!(histogram.max_count(), 2);
//! assert_eq!(histogram.span(), Some((1.0, 10.0)));
//! for bin in histogram.bins() {
//!     println!("  [{:.1}, {:.1}): count={}", bin.left, bin.right, bin.count);
//! }
//! ```

mod builders;
mod traits;
mod types;

pub use builders::FixedWidthBuilder;
pub use traits::HistogramBuilder;
pub use types::{Histogram, HistogramBin};
