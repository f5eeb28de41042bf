//! Legend listing each tier's color and formatted value.

use canvas::scene::Scene;
use leptos::prelude::*;

#[component]
pub fn MarketLegend(scene: Memo<Scene>) -> impl IntoView {
    view! {
        <div class="legend">
            {move || {
                scene
                    .with(|s| {
                        s.legend
                            .iter()
                            .map(|row| {
                                view! {
                                    <div class="legend__row">
                                        <div class="legend__key">
                                            <span
                                                class="legend__dot"
                                                style=format!("background-color: {}", row.fill)
                                            ></span>
                                            <span class="legend__name">{row.name.clone()}</span>
                                        </div>
                                        <span class="legend__value">{row.value.clone()}</span>
                                    </div>
                                }
                            })
                            .collect_view()
                    })
            }}
        </div>
    }
}
