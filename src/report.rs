//! Plain-text report of an [`Analysis`]
//!
//! All rounding happens here. Central values and spreads print with two
//! decimals and skewness with four. Values on the column's own scale (extremes,
//! quartiles, modes, fences) print without decimals when the column is
//! integer-typed and the value is whole.

use crate::pipeline::Analysis;
use lifestyle_polars::{AnalyzedColumn, ColumnProfile, VariableKind};
use std::fmt;

/// Width of the label column in per-variable sections
const LABEL_WIDTH: usize = 8;

/// Formats an [`Analysis`] for printing
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    analysis: &'a Analysis,
}

impl<'a> Report<'a> {
    pub fn new(analysis: &'a Analysis) -> Self {
        Self { analysis }
    }
}

fn fixed(value: f64, decimals: usize) -> String {
    // Avoid printing "-0.00"
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value:.decimals$}")
}

/// Format a value on the column's own scale
pub(crate) fn scaled(value: f64, integral: bool) -> String {
    if integral && value.fract() == 0.0 {
        fixed(value, 0)
    } else {
        fixed(value, 2)
    }
}

fn field(f: &mut fmt::Formatter<'_>, label: &str, value: impl fmt::Display) -> fmt::Result {
    writeln!(f, "  {label:<LABEL_WIDTH$} : {value}")
}

fn heading(f: &mut fmt::Formatter<'_>, column: AnalyzedColumn) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "=== {} ===", column.heading())
}

impl Report<'_> {
    fn write_overview(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let overview = &self.analysis.overview;
        writeln!(f, "Dataset shape: ({}, {})", overview.rows, overview.columns)?;

        writeln!(f)?;
        writeln!(f, "Column dtypes:")?;
        let width = overview
            .dtypes
            .iter()
            .map(|(name, _)| name.len())
            .max()
            .unwrap_or(0);
        for (name, dtype) in &overview.dtypes {
            writeln!(f, "  {name:<width$}  {dtype}")?;
        }

        writeln!(f)?;
        writeln!(f, "Variable types:")?;
        for kind in VariableKind::ALL {
            let columns = overview.columns_of(kind);
            let list = if columns.is_empty() {
                "-".to_string()
            } else {
                columns.join(", ")
            };
            writeln!(f, "  {:<10} : {list}", kind.label())?;
        }
        Ok(())
    }

    fn write_activity(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let profile = &self.analysis.activity;
        let s = &profile.summary;
        heading(f, AnalyzedColumn::PhysicalActivity)?;
        field(f, "Mean", fixed(s.mean, 2))?;
        field(f, "Median", fixed(s.median, 2))?;
        field(f, "Mode", modes(profile))?;
        field(f, "Skewness", fixed(s.skewness, 4))
    }

    fn write_steps(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let profile = &self.analysis.steps;
        let s = &profile.summary;
        let scale = |v| scaled(v, profile.integral);
        heading(f, AnalyzedColumn::DailySteps)?;
        field(f, "Mean", fixed(s.mean, 2))?;
        field(f, "Median", fixed(s.median, 2))?;
        field(f, "Std Dev", fixed(s.std_dev, 2))?;
        field(f, "Variance", fixed(s.variance, 2))?;
        field(f, "Minimum", scale(s.min))?;
        field(f, "Maximum", scale(s.max))?;
        field(f, "Range", scale(s.range))?;
        field(f, "Q1", scale(s.q1))?;
        field(f, "Q3", scale(s.q3))?;
        field(f, "IQR", scale(s.iqr))?;
        field(f, "Skewness", fixed(s.skewness, 4))
    }

    fn write_heart_rate(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let profile = &self.analysis.heart_rate;
        let s = &profile.summary;
        let scale = |v| scaled(v, profile.integral);
        heading(f, AnalyzedColumn::HeartRate)?;
        field(f, "Mean", fixed(s.mean, 2))?;
        field(f, "Median", fixed(s.median, 2))?;
        field(f, "Std Dev", fixed(s.std_dev, 2))?;
        field(f, "Min", format!("{},  Max: {}", scale(s.min), scale(s.max)))?;
        field(f, "IQR", scale(s.iqr))?;
        field(f, "Skewness", fixed(s.skewness, 4))?;
        writeln!(
            f,
            "  Outliers (> {} {}): {} values",
            scale(profile.outliers.fence.upper),
            AnalyzedColumn::HeartRate.unit(),
            profile.outliers.count()
        )
    }
}

fn modes(profile: &ColumnProfile) -> String {
    let list: Vec<String> = profile
        .summary
        .modes
        .iter()
        .map(|&m| scaled(m, profile.integral))
        .collect();
    format!("[{}]", list.join(", "))
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_overview(f)?;
        self.write_activity(f)?;
        self.write_steps(f)?;
        self.write_heart_rate(f)
    }
}
