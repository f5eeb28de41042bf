//! Renderer-independent description of the market chart.
//!
//! A [`Scene`] is rebuilt from scratch whenever the title or the result
//! changes. It holds already-formatted strings and final radii, so renderers
//! only place shapes and text.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use market::{MarketResult, Segment, format_currency, radii};

use crate::consts::{
    CHART_CENTER_X, CHART_SIZE, LEGEND_ROW_PX, NAME_FONT_PX, PADDING_PX, TITLE_BAND_PX, VALUE_FONT_PX, segment_center_y,
    segment_fill, segment_label_baselines,
};

/// One filled circle of the chart.
#[derive(Clone, Debug, PartialEq)]
pub struct Circle {
    pub segment: Segment,
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    pub fill: &'static str,
}

/// What a chart label shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelKind {
    /// Segment name, e.g. `TAM`.
    Name,
    /// Formatted value, e.g. `$5.0M`.
    Value,
}

/// Horizontally centered text drawn over the circles.
#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    pub segment: Segment,
    pub kind: LabelKind,
    pub x: f64,
    /// Alphabetic baseline.
    pub y: f64,
    pub text: String,
    pub font_px: f64,
}

/// One row of the legend under the chart.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendRow {
    pub segment: Segment,
    pub fill: &'static str,
    /// Row caption, e.g. `TAM:`.
    pub name: String,
    pub value: String,
}

/// Complete chart description.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    /// Title exactly as typed; `None` when empty.
    pub title: Option<String>,
    /// Outermost first, so painting in order nests them correctly.
    pub circles: Vec<Circle>,
    pub labels: Vec<Label>,
    pub legend: Vec<LegendRow>,
}

/// Geometry of the exported image, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub width: f64,
    pub height: f64,
    /// Baseline of the title text, when a title is present.
    pub title_baseline: Option<f64>,
    /// Vertical offset of the chart's 500×500 area.
    pub chart_top: f64,
    /// Top edge of the first legend row.
    pub legend_top: f64,
}

impl Layout {
    /// Vertical center of legend row `index`.
    #[must_use]
    pub fn legend_row_center(&self, index: usize) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let row = index as f64;
        self.legend_top + (row * LEGEND_ROW_PX) + (LEGEND_ROW_PX * 0.5)
    }
}

impl Scene {
    /// Build the scene for a title and a computed result.
    #[must_use]
    pub fn build(title: &str, result: &MarketResult) -> Self {
        let radii = radii(result);

        let circles = Segment::ALL
            .iter()
            .map(|&segment| Circle {
                segment,
                cx: CHART_CENTER_X,
                cy: segment_center_y(segment),
                r: segment.radius(&radii),
                fill: segment_fill(segment),
            })
            .collect();

        let mut labels = Vec::with_capacity(Segment::ALL.len() * 2);
        for segment in Segment::ALL {
            let (name_y, value_y) = segment_label_baselines(segment);
            labels.push(Label {
                segment,
                kind: LabelKind::Name,
                x: CHART_CENTER_X,
                y: name_y,
                text: segment.name().to_owned(),
                font_px: NAME_FONT_PX,
            });
            labels.push(Label {
                segment,
                kind: LabelKind::Value,
                x: CHART_CENTER_X,
                y: value_y,
                text: format_currency(result.value(segment)),
                font_px: VALUE_FONT_PX,
            });
        }

        let legend = Segment::ALL
            .iter()
            .map(|&segment| LegendRow {
                segment,
                fill: segment_fill(segment),
                name: format!("{}:", segment.name()),
                value: format_currency(result.value(segment)),
            })
            .collect();

        Self {
            title: (!title.is_empty()).then(|| title.to_owned()),
            circles,
            labels,
            legend,
        }
    }

    /// Export image layout: optional title band, chart, then legend.
    #[must_use]
    pub fn layout(&self) -> Layout {
        let title_band = if self.title.is_some() { TITLE_BAND_PX } else { 0.0 };
        let chart_top = title_band;
        let legend_top = chart_top + CHART_SIZE + PADDING_PX;
        #[allow(clippy::cast_precision_loss)]
        let legend_height = self.legend.len() as f64 * LEGEND_ROW_PX;
        Layout {
            width: CHART_SIZE,
            height: legend_top + legend_height + PADDING_PX,
            title_baseline: self.title.as_ref().map(|_| TITLE_BAND_PX * 0.5 + PADDING_PX * 0.5),
            chart_top,
            legend_top,
        }
    }
}
