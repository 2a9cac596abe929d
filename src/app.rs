//! Page chrome root: shared UI state contexts plus the toast stack and the
//! loading overlay, mounted once at the end of `<body>`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Page templates are rendered by the backend; this crate only owns the
//! chrome. The JS bindings reach the mounted state through [`installed`].

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use std::cell::Cell;

use leptos::prelude::*;

use crate::components::loading_backdrop::LoadingBackdrop;
use crate::components::theme_switcher::select_mode;
use crate::components::toast_stack::ToastStack;
use crate::config::UiConfig;
use crate::net::api::{ApiClient, GlooTransport, SessionRedirect};
use crate::state::loading::LoadingState;
use crate::state::theme::ThemeState;
use crate::state::toasts::ToastState;
use crate::util::loading::LoadingOverlay;
use crate::util::navigate::BrowserNavigator;
use crate::util::notify::Notifier;
use crate::util::schedule::BrowserScheduler;
use crate::util::storage::BrowserStorage;
use crate::util::theme::ThemeController;

pub type BrowserNotifier = Notifier<RwSignal<ToastState>, BrowserScheduler>;
pub type BrowserSessionRedirect = SessionRedirect<RwSignal<ToastState>, BrowserScheduler, BrowserNavigator>;
pub type BrowserApiClient = ApiClient<GlooTransport, BrowserSessionRedirect>;

/// Handles to the mounted chrome state and the settings it runs with.
#[derive(Clone, Copy, Debug)]
pub struct UiRuntime {
    pub toasts: RwSignal<ToastState>,
    pub loading: RwSignal<LoadingState>,
    pub theme: RwSignal<ThemeState>,
    pub config: StoredValue<UiConfig>,
}

impl UiRuntime {
    /// Create chrome state, seeding the theme from storage.
    pub fn new(config: UiConfig) -> Self {
        let initial_theme = ThemeController::with_config(BrowserStorage, config.theme.clone()).theme();
        Self {
            toasts: RwSignal::new(ToastState::default()),
            loading: RwSignal::new(LoadingState::default()),
            theme: RwSignal::new(ThemeState { mode: initial_theme }),
            config: StoredValue::new(config),
        }
    }

    /// Expose each piece of state as its own context.
    pub fn provide(self) {
        provide_context(self.toasts);
        provide_context(self.loading);
        provide_context(self.theme);
    }

    pub fn themes(&self) -> ThemeController<BrowserStorage> {
        ThemeController::with_config(BrowserStorage, self.config.with_value(|c| c.theme.clone()))
    }

    pub fn notifier(&self) -> BrowserNotifier {
        Notifier::with_timing(self.toasts, BrowserScheduler, self.config.with_value(|c| c.toasts))
    }

    pub fn overlay(&self) -> LoadingOverlay<RwSignal<LoadingState>> {
        LoadingOverlay::new(self.loading)
    }

    pub fn api(&self) -> BrowserApiClient {
        let session = self.config.with_value(|c| c.session.clone());
        ApiClient::new(
            GlooTransport,
            SessionRedirect::with_config(self.toasts, BrowserScheduler, BrowserNavigator, session),
        )
    }

    /// Persist and apply `mode`, keeping rendered controls in step.
    pub fn set_theme(&self, mode: &str) {
        let themes = self.themes();
        self.theme.update(|t| select_mode(&themes, t, mode));
    }
}

thread_local! {
    static RUNTIME: Cell<Option<UiRuntime>> = const { Cell::new(None) };
}

/// Register the mounted chrome for the JS bindings.
pub fn install(runtime: UiRuntime) {
    RUNTIME.with(|slot| slot.set(Some(runtime)));
}

/// The mounted chrome, if [`UiChrome`] has rendered.
pub fn installed() -> Option<UiRuntime> {
    RUNTIME.with(Cell::get)
}

/// Root chrome component.
#[component]
pub fn UiChrome() -> impl IntoView {
    let runtime = UiRuntime::new(UiConfig::default());
    runtime.provide();
    install(runtime);

    view! {
        <ToastStack/>
        <LoadingBackdrop/>
    }
}
