//! Shared numeric and style constants for the market chart.

use market::Segment;

// ── Chart geometry ──────────────────────────────────────────────

/// Width and height of the square chart viewBox.
pub const CHART_SIZE: f64 = 500.0;

/// Horizontal center shared by all circles and labels.
pub const CHART_CENTER_X: f64 = 250.0;

// ── Labels ──────────────────────────────────────────────────────

pub const LABEL_FONT_FAMILY: &str = "Arial";
pub const LABEL_COLOR: &str = "#FFFFFF";
/// Font size of the segment name ("TAM").
pub const NAME_FONT_PX: f64 = 20.0;
/// Font size of the formatted value ("$5.0M").
pub const VALUE_FONT_PX: f64 = 25.0;

// ── Export image ────────────────────────────────────────────────

/// Pixel density of the copied image.
pub const EXPORT_SCALE: f64 = 2.0;
pub const BACKGROUND: &str = "#FFFFFF";
pub const TEXT_COLOR: &str = "#111827";
pub const PADDING_PX: f64 = 16.0;
pub const TITLE_BAND_PX: f64 = 48.0;
pub const TITLE_FONT_PX: f64 = 20.0;
pub const LEGEND_ROW_PX: f64 = 28.0;
pub const LEGEND_FONT_PX: f64 = 16.0;
pub const LEGEND_DOT_RADIUS_PX: f64 = 8.0;

/// Circle fill for a segment.
#[must_use]
pub fn segment_fill(segment: Segment) -> &'static str {
    match segment {
        Segment::Tam => "#0088FE",
        Segment::Sam => "#00C49F",
        Segment::Som => "#FFBB28",
    }
}

/// Vertical center of a segment's circle.
#[must_use]
pub fn segment_center_y(segment: Segment) -> f64 {
    match segment {
        Segment::Tam => 250.0,
        Segment::Sam => 325.0,
        Segment::Som => 400.0,
    }
}

/// Baselines of the (name, value) label pair for a segment.
#[must_use]
pub fn segment_label_baselines(segment: Segment) -> (f64, f64) {
    match segment {
        Segment::Tam => (57.7226, 84.7226),
        Segment::Sam => (210.5, 237.5),
        Segment::Som => (392.5007, 419.5007),
    }
}
