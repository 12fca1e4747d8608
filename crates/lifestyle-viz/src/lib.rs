//! Chart rendering for the lifestyle analysis
//!
//! Draws the fixed 2×2 composite: heart-rate histogram, heart-rate box plot,
//! physical-activity histogram and daily-steps box plot. Every marker,
//! quartile and fence is taken from already computed statistics; nothing here
//! derives a statistic of its own.

mod chart;
mod panels;
pub mod style;

pub use chart::{render_analysis_chart, AnalysisChart, PanelData};
