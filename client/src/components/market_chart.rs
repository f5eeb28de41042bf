//! Live visualization: title, nested-circle SVG chart, and legend.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders the same [`Scene`] the clipboard export paints, so the copied
//! image matches what is on screen. The title tracks the input as it is
//! typed; circles and values only move when Calculate runs.

#[cfg(test)]
#[path = "market_chart_test.rs"]
mod market_chart_test;

use canvas::consts::{CHART_SIZE, LABEL_COLOR, LABEL_FONT_FAMILY};
use canvas::scene::{Circle, Label, Scene};
use leptos::prelude::*;

use crate::components::market_legend::MarketLegend;
use crate::state::session::MarketState;

#[component]
pub fn MarketChart() -> impl IntoView {
    let market = expect_context::<RwSignal<MarketState>>();
    let scene = Memo::new(move |_| market.with(MarketState::scene));
    let view_box = format!("0 0 {size} {size}", size = svg_number(CHART_SIZE));

    view! {
        <div class="visualization">
            {move || {
                scene
                    .with(|s| s.title.clone())
                    .map(|title| view! { <h2 class="visualization__title">{title}</h2> })
            }}
            <svg class="visualization__chart" width="100%" height="100%" viewBox=view_box>
                {move || scene.with(|s| s.circles.iter().map(circle_view).collect_view())}
                {move || scene.with(|s| s.labels.iter().map(label_view).collect_view())}
            </svg>
            <MarketLegend scene=scene/>
        </div>
    }
}

fn circle_view(circle: &Circle) -> impl IntoView + use<> {
    view! {
        <circle
            class="visualization__circle"
            cx=svg_number(circle.cx)
            cy=svg_number(circle.cy)
            r=svg_number(circle.r)
            fill=circle.fill
        ></circle>
    }
}

fn label_view(label: &Label) -> impl IntoView + use<> {
    view! {
        <text
            x=svg_number(label.x)
            y=svg_number(label.y)
            text-anchor="middle"
            fill=LABEL_COLOR
            font-family=LABEL_FONT_FAMILY
            font-weight="bold"
            font-size=svg_number(label.font_px)
        >
            {label.text.clone()}
        </text>
    }
}

/// Format a coordinate for an SVG attribute: at most three decimals, no
/// trailing zeros, and `0` for anything non-finite.
fn svg_number(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_owned();
    }
    let text = format!("{value:.3}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" { "0".to_owned() } else { text.to_owned() }
}
