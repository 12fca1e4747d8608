//! Table loading and column profiling on Polars DataFrames
//!
//! The loader reads a delimited file into a [`DataFrame`](polars::prelude::DataFrame),
//! inferring one dtype per column. The [`DescribeExt`] extension trait then
//! turns named numeric columns into [`ColumnProfile`]s: summary statistics
//! plus the Tukey-fence outlier partition.
//!
//! # Example
//!
//! ```rust,no_run
//! use lifestyle_polars::{load_table, AnalyzedColumn, DescribeExt};
//!
//! let df = load_table("sleep_health_and_lifestyle_dataset.csv")?;
//! df.require_columns(&AnalyzedColumn::names())?;
//! let heart_rate = df.profile(AnalyzedColumn::HeartRate.column_name())?;
//! println!("{} outliers", heart_rate.outliers.count());
//! # Ok::<(), lifestyle_polars::Error>(())
//! ```

mod config;
mod error;
mod loader;
mod profile;
mod traits;

pub use config::*;
pub use error::{Error, Result};
pub use loader::{load_table, read_table};
pub use profile::{ColumnProfile, TableOverview};
pub use traits::DescribeExt;
