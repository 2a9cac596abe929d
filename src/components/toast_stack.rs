//! Toast notifications pinned to the top-right corner.
//!
//! Every toast shares the same anchor, so simultaneous toasts overlap.

#[cfg(test)]
#[path = "toast_stack_test.rs"]
mod toast_stack_test;

use leptos::prelude::*;

use crate::state::toasts::{ToastPhase, ToastState};

const TOAST_BASE_STYLE: &str = "position: fixed; top: 20px; right: 20px; \
    background: var(--card-bg); border: 1px solid var(--border); \
    padding: 15px 20px; border-radius: 8px; box-shadow: 0 4px 12px var(--shadow); \
    z-index: 10000;";

/// Inline style for a toast in `phase`.
pub fn toast_style(phase: ToastPhase) -> String {
    let animation = match phase {
        ToastPhase::Visible => "slideIn",
        ToastPhase::Leaving => "slideOut",
    };
    format!("{TOAST_BASE_STYLE} animation: {animation} 0.3s ease;")
}

#[component]
pub fn ToastStack() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        {move || {
            toasts
                .get()
                .toasts
                .into_iter()
                .map(|toast| {
                    let class = toast.class_name();
                    let style = toast_style(toast.phase);
                    view! {
                        <div class=class style=style role="status">
                            {toast.message}
                        </div>
                    }
                })
                .collect_view()
        }}
    }
}
