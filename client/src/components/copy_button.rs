//! "Copy Visualization to Clipboard" button and its status line.

use leptos::prelude::*;

use crate::state::session::MarketState;
use crate::util::export::{ClipboardExporter, run_export};
use crate::util::notify::notify;

#[component]
pub fn CopyButton() -> impl IntoView {
    let market = expect_context::<RwSignal<MarketState>>();

    let on_copy = move |_| {
        let mut started = false;
        market.update(|s| started = s.begin_export());
        if !started {
            return;
        }
        let scene = market.with_untracked(MarketState::scene);

        let task = async move {
            let status = run_export(&ClipboardExporter, &scene).await;
            if let Some(message) = status.notice() {
                notify(message);
            }
            market.update(|s| s.finish_export(status));
        };

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(task);
        #[cfg(not(feature = "csr"))]
        futures::executor::block_on(task);
    };

    let busy = move || market.with(|s| s.export.is_busy());
    let status_text = move || market.with(|s| s.export.status_text());

    view! {
        <button class="btn btn--secondary copy-button" on:click=on_copy disabled=busy>
            "Copy Visualization to Clipboard"
        </button>
        <Show when=move || !status_text().is_empty()>
            <p class="copy-button__status">{status_text}</p>
        </Show>
    }
}
