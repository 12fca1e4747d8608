//! Histogram and box-plot panels

use crate::chart::{format_value, DrawResult, PanelData};
use crate::style::*;
use lifestyle_histogram::Histogram;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;

/// Vertical reference lines drawn over a histogram
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HistogramMarkers {
    MeanMedian,
    MeanMedianMode,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct BoxColors {
    pub fill: RGBColor,
    pub median: RGBColor,
}

fn caption_font() -> FontDesc<'static> {
    (FONT, CAPTION_FONT_SIZE).into_font().style(FontStyle::Bold)
}

pub(crate) fn draw_histogram_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    panel: &PanelData<'_>,
    histogram: &Histogram,
    fill: RGBColor,
    markers: HistogramMarkers,
) -> DrawResult<DB> {
    let summary = panel.summary;
    let (x_lo, x_hi) = histogram
        .span()
        .unwrap_or((summary.min - 0.5, summary.max + 0.5));
    let pad = (x_hi - x_lo) * 0.04;
    let y_top = histogram.max_count().max(1) as f64 * 1.12;

    let mut chart = ChartBuilder::on(area)
        .caption(format!("{} – Histogram", panel.title), caption_font())
        .margin(20)
        .x_label_area_size(55)
        .y_label_area_size(70)
        .build_cartesian_2d((x_lo - pad)..(x_hi + pad), 0f64..y_top)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc(panel.axis_label)
        .y_desc("Frequency")
        .label_style((FONT, LABEL_FONT_SIZE))
        .axis_desc_style((FONT, LABEL_FONT_SIZE))
        .draw()?;

    chart.draw_series(histogram.bins().iter().map(|bin| {
        Rectangle::new(
            [(bin.left, 0.0), (bin.right, bin.count as f64)],
            fill.mix(BAR_OPACITY).filled(),
        )
    }))?;
    chart.draw_series(histogram.bins().iter().map(|bin| {
        Rectangle::new(
            [(bin.left, 0.0), (bin.right, bin.count as f64)],
            WHITE.stroke_width(1),
        )
    }))?;

    let mean = summary.mean;
    chart
        .draw_series(DashedLineSeries::new(
            vec![(mean, 0.0), (mean, y_top)],
            14,
            8,
            RED.stroke_width(LINE_WIDTH),
        ))?
        .label(format!("Mean={mean:.1}"))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 24, y)], RED.stroke_width(LINE_WIDTH)));

    let median = summary.median;
    chart
        .draw_series(LineSeries::new(
            vec![(median, 0.0), (median, y_top)],
            ORANGE.stroke_width(LINE_WIDTH),
        ))?
        .label(format!("Median={median:.1}"))
        .legend(|(x, y)| {
            PathElement::new(vec![(x, y), (x + 24, y)], ORANGE.stroke_width(LINE_WIDTH))
        });

    if markers == HistogramMarkers::MeanMedianMode {
        let mode = summary.primary_mode();
        chart
            .draw_series(DashedLineSeries::new(
                vec![(mode, 0.0), (mode, y_top)],
                3,
                6,
                PURPLE.stroke_width(LINE_WIDTH),
            ))?
            .label(format!("Mode={}", format_value(mode, panel.integral, 1)))
            .legend(|(x, y)| {
                PathElement::new(vec![(x, y), (x + 24, y)], PURPLE.stroke_width(LINE_WIDTH))
            });
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .label_font((FONT, LABEL_FONT_SIZE))
        .draw()
}

pub(crate) fn draw_box_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    panel: &PanelData<'_>,
    colors: BoxColors,
    annotate: bool,
) -> DrawResult<DB> {
    let summary = panel.summary;
    let report = panel.outliers;

    let lo = summary.min.min(report.whisker_low);
    let hi = summary.max.max(report.whisker_high);
    let span = if hi > lo { hi - lo } else { 1.0 };
    let (y_lo, y_hi) = (lo - span * 0.08, hi + span * 0.08);

    let mut chart = ChartBuilder::on(area)
        .caption(format!("{} – Box Plot", panel.title), caption_font())
        .margin(20)
        .x_label_area_size(55)
        .y_label_area_size(80)
        .build_cartesian_2d(0.5f64..1.5f64, y_lo..y_hi)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_label_formatter(&|_| String::new())
        .x_desc(panel.title)
        .y_desc(panel.axis_label)
        .label_style((FONT, LABEL_FONT_SIZE))
        .axis_desc_style((FONT, LABEL_FONT_SIZE))
        .draw()?;

    let (left, right) = (0.75, 1.25);
    chart.draw_series(std::iter::once(Rectangle::new(
        [(left, summary.q1), (right, summary.q3)],
        colors.fill.mix(BOX_OPACITY).filled(),
    )))?;
    chart.draw_series(std::iter::once(Rectangle::new(
        [(left, summary.q1), (right, summary.q3)],
        BLACK.stroke_width(1),
    )))?;

    let (cap_left, cap_right) = (0.9, 1.1);
    let whiskers = [
        vec![(1.0, summary.q1), (1.0, report.whisker_low)],
        vec![(1.0, summary.q3), (1.0, report.whisker_high)],
        vec![(cap_left, report.whisker_low), (cap_right, report.whisker_low)],
        vec![(cap_left, report.whisker_high), (cap_right, report.whisker_high)],
    ];
    chart.draw_series(
        whiskers
            .into_iter()
            .map(|points| PathElement::new(points, BLACK.stroke_width(2))),
    )?;

    chart.draw_series(std::iter::once(PathElement::new(
        vec![(left, summary.median), (right, summary.median)],
        colors.median.stroke_width(LINE_WIDTH),
    )))?;

    chart.draw_series(
        report
            .outliers
            .iter()
            .map(|&v| Circle::new((1.0, v), 6, RED.stroke_width(2))),
    )?;

    if annotate {
        let style = (FONT, LABEL_FONT_SIZE).into_font().color(&RED);
        let lines = [
            format!("{} outliers", report.count()),
            format!(
                "above {} {}",
                format_value(report.fence.upper, panel.integral, 2),
                panel.unit
            ),
        ];
        let gap = (y_hi - y_lo) * 0.05;
        chart.draw_series(lines.into_iter().enumerate().map(|(i, line)| {
            Text::new(line, (1.05, summary.max - i as f64 * gap), style.clone())
        }))?;
    }

    Ok(())
}
