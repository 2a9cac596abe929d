//! Full-viewport blocking overlay with a spinner.

use leptos::prelude::*;

use crate::config::LOADING_OVERLAY_ID;
use crate::state::loading::LoadingState;

const OVERLAY_STYLE: &str = "position: fixed; top: 0; left: 0; right: 0; bottom: 0; \
    background: rgba(0, 0, 0, 0.5); display: flex; align-items: center; \
    justify-content: center; z-index: 10000;";

#[component]
pub fn LoadingBackdrop() -> impl IntoView {
    let loading = expect_context::<RwSignal<LoadingState>>();

    view! {
        <Show when=move || loading.get().visible>
            <div id=LOADING_OVERLAY_ID style=OVERLAY_STYLE aria-busy="true">
                <div class="spinner"></div>
            </div>
        </Show>
    }
}
