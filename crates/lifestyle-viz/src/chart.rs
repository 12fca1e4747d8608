//! Composite chart assembly and output

use crate::panels::{draw_box_panel, draw_histogram_panel, BoxColors, HistogramMarkers};
use crate::style::*;
use lifestyle_core::{Error, Result};
use lifestyle_describe::{OutlierReport, SummaryStatistics};
use lifestyle_histogram::{FixedWidthBuilder, Histogram, HistogramBuilder};
use plotters::prelude::*;
use std::path::Path;
use tracing::{debug, instrument};

/// Outcome of a drawing step on backend `DB`
pub(crate) type DrawResult<DB> =
    std::result::Result<(), DrawingAreaErrorKind<<DB as DrawingBackend>::ErrorType>>;

/// Precomputed data for one analyzed column
#[derive(Debug, Clone, Copy)]
pub struct PanelData<'a> {
    /// Short column title used in panel captions
    pub title: &'a str,
    pub axis_label: &'a str,
    /// Unit shown in annotations, e.g. "bpm"
    pub unit: &'a str,
    pub values: &'a [f64],
    /// Whole-number values print without decimals
    pub integral: bool,
    pub summary: &'a SummaryStatistics,
    pub outliers: &'a OutlierReport,
}

/// Inputs of the four-panel chart
#[derive(Debug, Clone, Copy)]
pub struct AnalysisChart<'a> {
    pub heart_rate: PanelData<'a>,
    pub activity: PanelData<'a>,
    pub steps: PanelData<'a>,
}

/// Render the 2×2 composite and write it as a PNG at `path`
///
/// The image is encoded only once every panel has been drawn, so a failure
/// leaves no file behind. Any drawing or I/O failure becomes
/// [`Error::Render`].
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn render_analysis_chart(path: impl AsRef<Path>, chart: &AnalysisChart<'_>) -> Result<()> {
    let path = path.as_ref();
    let builder = FixedWidthBuilder::new(HISTOGRAM_BINS);
    let heart_rate_hist = builder.build(chart.heart_rate.values)?;
    let activity_hist = builder.build(chart.activity.values)?;

    draw(path, chart, &heart_rate_hist, &activity_hist).map_err(|err| Error::Render {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;

    debug!(
        width = CHART_SIZE.0,
        height = CHART_SIZE.1,
        "chart written"
    );
    Ok(())
}

fn draw<'a>(
    path: &'a Path,
    chart: &AnalysisChart<'_>,
    heart_rate_hist: &Histogram,
    activity_hist: &Histogram,
) -> DrawResult<BitMapBackend<'a>> {
    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    let root = root.titled(
        CHART_TITLE,
        (FONT, TITLE_FONT_SIZE).into_font().style(FontStyle::Bold),
    )?;

    let panels = root.split_evenly((2, 2));

    draw_histogram_panel(
        &panels[0],
        &chart.heart_rate,
        heart_rate_hist,
        STEEL_BLUE,
        HistogramMarkers::MeanMedian,
    )?;
    draw_box_panel(
        &panels[1],
        &chart.heart_rate,
        BoxColors {
            fill: STEEL_BLUE,
            median: ORANGE,
        },
        true,
    )?;
    draw_histogram_panel(
        &panels[2],
        &chart.activity,
        activity_hist,
        MEDIUM_SEA_GREEN,
        HistogramMarkers::MeanMedianMode,
    )?;
    draw_box_panel(
        &panels[3],
        &chart.steps,
        BoxColors {
            fill: SALMON,
            median: DARK_RED,
        },
        false,
    )?;

    root.present()
}

/// Format a marker value on the column's own scale
pub(crate) fn format_value(value: f64, integral: bool, decimals: usize) -> String {
    if integral && value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.decimals$}")
    }
}
