//! Fixed chart layout and colours

use plotters::style::RGBColor;

/// Output image size in pixels (14 × 10 inches at 150 dpi)
pub const CHART_SIZE: (u32, u32) = (2100, 1500);

pub const CHART_TITLE: &str = "Sleep Health & Lifestyle – Statistical Analysis";

/// Equal-width bins per histogram panel
pub const HISTOGRAM_BINS: usize = 15;

pub const FONT: &str = "sans-serif";
pub const TITLE_FONT_SIZE: u32 = 36;
pub const CAPTION_FONT_SIZE: u32 = 26;
pub const LABEL_FONT_SIZE: u32 = 18;
pub const LINE_WIDTH: u32 = 3;

pub const STEEL_BLUE: RGBColor = RGBColor(70, 130, 180);
pub const MEDIUM_SEA_GREEN: RGBColor = RGBColor(60, 179, 113);
pub const SALMON: RGBColor = RGBColor(250, 128, 114);
pub const DARK_RED: RGBColor = RGBColor(139, 0, 0);
pub const ORANGE: RGBColor = RGBColor(255, 165, 0);
pub const PURPLE: RGBColor = RGBColor(128, 0, 128);

pub const BAR_OPACITY: f64 = 0.85;
pub const BOX_OPACITY: f64 = 0.7;
