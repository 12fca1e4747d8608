//! Load, profile, report and render

use crate::config::AnalysisConfig;
use crate::report::Report;
use anyhow::Context;
use lifestyle_polars::{load_table, AnalyzedColumn, ColumnProfile, DescribeExt, TableOverview};
use lifestyle_viz::{render_analysis_chart, AnalysisChart, PanelData};
use std::io::Write;
use std::path::Path;
use tracing::{debug, instrument};

/// Everything derived from one dataset, ready to print and plot
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub overview: TableOverview,
    pub activity: ColumnProfile,
    pub steps: ColumnProfile,
    pub heart_rate: ColumnProfile,
}

impl Analysis {
    pub fn profile(&self, column: AnalyzedColumn) -> &ColumnProfile {
        match column {
            AnalyzedColumn::PhysicalActivity => &self.activity,
            AnalyzedColumn::DailySteps => &self.steps,
            AnalyzedColumn::HeartRate => &self.heart_rate,
        }
    }

    /// Chart inputs borrowing the derived statistics
    pub fn chart(&self) -> AnalysisChart<'_> {
        AnalysisChart {
            heart_rate: self.panel(AnalyzedColumn::HeartRate),
            activity: self.panel(AnalyzedColumn::PhysicalActivity),
            steps: self.panel(AnalyzedColumn::DailySteps),
        }
    }

    fn panel(&self, column: AnalyzedColumn) -> PanelData<'_> {
        let profile = self.profile(column);
        PanelData {
            title: column.title(),
            axis_label: column.axis_label(),
            unit: column.unit(),
            values: &profile.values,
            integral: profile.integral,
            summary: &profile.summary,
            outliers: &profile.outliers,
        }
    }
}

/// Load the table at `path` and profile the three analyzed columns
///
/// Every analyzed column is checked for presence before any statistic is
/// computed.
#[instrument(skip_all, fields(input = %path.display()))]
pub fn analyze(path: &Path) -> lifestyle_polars::Result<Analysis> {
    let df = load_table(path)?;
    df.require_columns(&AnalyzedColumn::names())?;

    let activity = df.profile(AnalyzedColumn::PhysicalActivity.column_name())?;
    let steps = df.profile(AnalyzedColumn::DailySteps.column_name())?;
    let heart_rate = df.profile(AnalyzedColumn::HeartRate.column_name())?;
    let overview = df.overview();

    debug!(rows = overview.rows, columns = overview.columns, "analysis complete");

    Ok(Analysis {
        overview,
        activity,
        steps,
        heart_rate,
    })
}

/// Run the whole analysis, writing the report to `out` and the chart to
/// `config.output`
pub fn run<W: Write>(config: &AnalysisConfig, out: &mut W) -> anyhow::Result<()> {
    let analysis = analyze(config.input())
        .with_context(|| format!("analysis of {} failed", config.input().display()))?;

    write!(out, "{}", Report::new(&analysis)).context("failed to write report")?;
    out.flush().context("failed to write report")?;

    render_analysis_chart(config.output(), &analysis.chart())
        .with_context(|| format!("chart for {} failed", config.input().display()))?;

    writeln!(out, "\nPlot saved as {}", config.output().display())
        .context("failed to write report")?;
    Ok(())
}
