//! # lifestyle-stats
//!
//! Descriptive statistics for the sleep health and lifestyle dataset.
//!
//! The pipeline loads the CSV into a Polars table, summarizes physical
//! activity, daily steps and heart rate, flags heart-rate outliers with
//! Tukey's fence, prints a text report and saves a four-panel chart.
//!
//! ## Crates
//!
//! - [`lifestyle_core`]: shared error type and slice utilities
//! - [`lifestyle_quantile`]: quantile estimation (linear interpolation, type 7)
//! - [`lifestyle_describe`]: summary statistics and outlier classification
//! - [`lifestyle_histogram`]: fixed-width histograms
//! - [`lifestyle_polars`]: CSV loading and column profiling on DataFrames
//! - [`lifestyle_viz`]: chart rendering
//!
//! ## Example
//!
//! ```rust,no_run
//! use lifestyle_stats::{run, AnalysisConfig};
//!
//! let mut stdout = std::io::stdout();
//! run(&AnalysisConfig::default(), &mut stdout)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod config;
pub mod pipeline;
pub mod report;

pub use lifestyle_core;
pub use lifestyle_describe;
pub use lifestyle_histogram;
pub use lifestyle_polars;
pub use lifestyle_quantile;
pub use lifestyle_viz;

pub use config::{AnalysisConfig, DEFAULT_INPUT, DEFAULT_OUTPUT};
pub use pipeline::{analyze, run, Analysis};
pub use report::Report;
