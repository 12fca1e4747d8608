//! Core types shared by the lifestyle-stats crates
//!
//! Every stage of the analysis (loading, summarizing, rendering) reports
//! failures through the single [`Error`] enum defined here, so the binary can
//! print one message naming the stage and the offending path or column.

pub mod error;
pub mod utils;

pub use error::{Error, Result};
