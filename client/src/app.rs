//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::{copy_button::CopyButton, input_panel::InputPanel, market_chart::MarketChart};
use crate::state::session::MarketState;

/// Root application component.
///
/// Provides the session's [`MarketState`] to every child component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let market = RwSignal::new(MarketState::default());
    provide_context(market);

    view! {
        <Title text="Market Size Calculator"/>

        <main class="calculator">
            <h1 class="calculator__heading">"Market Size Calculator"</h1>
            <div class="calculator__grid">
                <InputPanel/>
                <section class="calculator__card">
                    <MarketChart/>
                    <CopyButton/>
                </section>
            </div>
        </main>
    }
}
