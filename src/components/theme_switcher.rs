//! Mode selector buttons.
//!
//! Renders the same `.theme-btn[data-theme]` markup the server templates use,
//! so `sync_controls` and these buttons agree on which one is active.

#[cfg(test)]
#[path = "theme_switcher_test.rs"]
mod theme_switcher_test;

use leptos::prelude::*;

use crate::state::theme::ThemeState;
use crate::util::storage::{BrowserStorage, PreferenceStore};
use crate::util::theme::ThemeController;

/// `(mode, label)` pairs shown when no modes are passed in.
pub fn default_modes() -> Vec<(String, String)> {
    vec![("light".to_owned(), "☀".to_owned()), ("dark".to_owned(), "☾".to_owned())]
}

pub fn is_active(theme: &ThemeState, mode: &str) -> bool {
    theme.mode == mode
}

/// Persist and apply `mode`, then mirror it into the rendered state.
pub fn select_mode<P: PreferenceStore>(themes: &ThemeController<P>, theme: &mut ThemeState, mode: &str) {
    themes.set_theme(mode);
    theme.mode = mode.to_owned();
}

/// One button per `(mode, label)` pair.
#[component]
pub fn ThemeSwitcher(#[prop(default = default_modes())] modes: Vec<(String, String)>) -> impl IntoView {
    let theme = expect_context::<RwSignal<ThemeState>>();

    modes
        .into_iter()
        .map(|(mode, label)| {
            let active_mode = mode.clone();
            let click_mode = mode.clone();
            view! {
                <button
                    class="theme-btn"
                    class:active=move || theme.with(|t| is_active(t, &active_mode))
                    data-theme=mode
                    on:click=move |_| {
                        let themes = ThemeController::new(BrowserStorage);
                        theme.update(|t| select_mode(&themes, t, &click_mode));
                    }
                >
                    {label}
                </button>
            }
        })
        .collect_view()
}
