//! Rendering: paints a [`Scene`] onto a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It reads a finished scene and produces pixels; it does not mutate any
//! application state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The caller (the client's clipboard exporter) turns them into user-facing
//! failures.

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::{
    BACKGROUND, LABEL_COLOR, LABEL_FONT_FAMILY, LEGEND_DOT_RADIUS_PX, LEGEND_FONT_PX, PADDING_PX, TEXT_COLOR,
    TITLE_FONT_PX,
};
use crate::scene::{Circle, Label, Layout, LegendRow, Scene};

/// Draw the full scene: background, title, circles, labels, legend.
///
/// `scale` is the device pixel ratio of the target canvas, which must already
/// be sized to `layout.width * scale` by `layout.height * scale`.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(ctx: &CanvasRenderingContext2d, scene: &Scene, scale: f64) -> Result<(), JsValue> {
    let layout = scene.layout();

    ctx.set_transform(scale, 0.0, 0.0, scale, 0.0, 0.0)?;
    ctx.set_fill_style_str(BACKGROUND);
    ctx.fill_rect(0.0, 0.0, layout.width, layout.height);

    if let (Some(title), Some(baseline)) = (scene.title.as_deref(), layout.title_baseline) {
        draw_title(ctx, title, baseline, &layout)?;
    }

    ctx.save();
    ctx.translate(0.0, layout.chart_top)?;
    for circle in &scene.circles {
        draw_circle(ctx, circle)?;
    }
    for label in &scene.labels {
        draw_label(ctx, label)?;
    }
    ctx.restore();

    for (index, row) in scene.legend.iter().enumerate() {
        draw_legend_row(ctx, row, layout.legend_row_center(index), &layout)?;
    }

    Ok(())
}

fn draw_title(ctx: &CanvasRenderingContext2d, title: &str, baseline: f64, layout: &Layout) -> Result<(), JsValue> {
    ctx.set_fill_style_str(TEXT_COLOR);
    ctx.set_text_align("left");
    ctx.set_text_baseline("middle");
    ctx.set_font(&format!("600 {TITLE_FONT_PX:.0}px {LABEL_FONT_FAMILY}"));
    ctx.fill_text_with_max_width(title, PADDING_PX, baseline, layout.width - (PADDING_PX * 2.0))
}

fn draw_circle(ctx: &CanvasRenderingContext2d, circle: &Circle) -> Result<(), JsValue> {
    if circle.r <= 0.0 {
        return Ok(());
    }
    ctx.begin_path();
    ctx.arc(circle.cx, circle.cy, circle.r, 0.0, TAU)?;
    ctx.set_fill_style_str(circle.fill);
    ctx.fill();
    Ok(())
}

fn draw_label(ctx: &CanvasRenderingContext2d, label: &Label) -> Result<(), JsValue> {
    ctx.set_fill_style_str(LABEL_COLOR);
    ctx.set_text_align("center");
    ctx.set_text_baseline("alphabetic");
    ctx.set_font(&format!("bold {:.0}px {LABEL_FONT_FAMILY}", label.font_px));
    ctx.fill_text(&label.text, label.x, label.y)
}

fn draw_legend_row(
    ctx: &CanvasRenderingContext2d,
    row: &LegendRow,
    center_y: f64,
    layout: &Layout,
) -> Result<(), JsValue> {
    let dot_x = PADDING_PX + LEGEND_DOT_RADIUS_PX;
    ctx.begin_path();
    ctx.arc(dot_x, center_y, LEGEND_DOT_RADIUS_PX, 0.0, TAU)?;
    ctx.set_fill_style_str(row.fill);
    ctx.fill();

    ctx.set_fill_style_str(TEXT_COLOR);
    ctx.set_text_baseline("middle");

    ctx.set_text_align("left");
    ctx.set_font(&format!("600 {LEGEND_FONT_PX:.0}px {LABEL_FONT_FAMILY}"));
    ctx.fill_text(&row.name, dot_x + LEGEND_DOT_RADIUS_PX + 8.0, center_y)?;

    ctx.set_text_align("right");
    ctx.set_font(&format!("{LEGEND_FONT_PX:.0}px {LABEL_FONT_FAMILY}"));
    ctx.fill_text(&row.value, layout.width - PADDING_PX, center_y)
}
