//! Input form: chart title, the four numeric fields, and the Calculate button.

use leptos::prelude::*;
use market::InputField;

use crate::state::session::MarketState;

/// Form panel. Edits update raw inputs only; Calculate derives the result.
#[component]
pub fn InputPanel() -> impl IntoView {
    let market = expect_context::<RwSignal<MarketState>>();
    let on_calculate = move |_| market.update(MarketState::calculate);

    view! {
        <section class="calculator__card">
            <h2 class="calculator__subheading">"Input Data"</h2>
            <div class="input-panel">
                {InputField::ALL.into_iter().map(|field| view! { <InputRow field=field/> }).collect_view()}
                <button class="btn btn--primary" on:click=on_calculate>
                    "Calculate"
                </button>
            </div>
        </section>
    }
}

/// One labelled input bound to a single [`InputField`].
#[component]
fn InputRow(field: InputField) -> impl IntoView {
    let market = expect_context::<RwSignal<MarketState>>();

    view! {
        <div class="input-row">
            <label class="input-row__label" for=field.name()>
                {field.label()}
            </label>
            <input
                id=field.name()
                class="input-row__input"
                type=field.input_type()
                name=field.name()
                placeholder=field.placeholder()
                max=field.max()
                prop:value=move || market.with(|s| s.inputs.get(field).to_owned())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    market.update(|s| s.set_field(field, value));
                }
            />
            {field.hint().map(|hint| view! { <p class="input-row__hint">{hint}</p> })}
        </div>
    }
}
