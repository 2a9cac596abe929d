//! JS-callable page API.
//!
//! Server-rendered templates call these by the names their inline scripts
//! already use (`apiCall`, `showNotification`, ...). Each export is a thin
//! adapter over the Rust components mounted by [`boot`].

use leptos::view;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::app::{self, UiChrome, UiRuntime};
use crate::components::theme_switcher::ThemeSwitcher;
use crate::net::api::{ApiError, ApiRequest};
use crate::state::toasts::Severity;
use crate::util::storage::BrowserStorage;
use crate::util::theme::ThemeController;

/// Run page-ready work now, or once the DOM has finished parsing.
pub fn boot() {
    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if doc.ready_state() == web_sys::DocumentReadyState::Loading {
        let on_ready = Closure::once_into_js(on_page_ready);
        if doc
            .add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
            .is_err()
        {
            log::warn!("could not listen for DOMContentLoaded");
        }
    } else {
        on_page_ready();
    }
}

fn on_page_ready() {
    let mode = ThemeController::new(BrowserStorage).init_on_page_ready();
    log::info!("theme applied: {mode}");
    leptos::mount::mount_to_body(UiChrome);
}

fn runtime() -> Option<UiRuntime> {
    let runtime = app::installed();
    if runtime.is_none() {
        log::warn!("page chrome not mounted yet");
    }
    runtime
}

#[wasm_bindgen(js_name = setTheme)]
pub fn set_theme(mode: &str) {
    match app::installed() {
        Some(runtime) => runtime.set_theme(mode),
        None => ThemeController::new(BrowserStorage).set_theme(mode),
    }
}

#[wasm_bindgen(js_name = getTheme)]
pub fn get_theme() -> String {
    match app::installed() {
        Some(runtime) => runtime.themes().theme(),
        None => ThemeController::new(BrowserStorage).theme(),
    }
}

/// Render the mode buttons into the element with id `container_id`.
#[wasm_bindgen(js_name = mountThemeSwitcher)]
pub fn mount_theme_switcher(container_id: &str) -> bool {
    let Some(runtime) = runtime() else {
        return false;
    };
    let Some(container) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(container_id))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    else {
        log::warn!("theme switcher container not found: {container_id}");
        return false;
    };
    leptos::mount::mount_to(container, move || {
        runtime.provide();
        view! { <ThemeSwitcher/> }
    })
    .forget();
    true
}

#[wasm_bindgen(js_name = showNotification)]
pub fn show_notification(message: &str, kind: Option<String>) {
    let Some(runtime) = runtime() else {
        return;
    };
    let severity = kind.as_deref().map_or(Severity::Info, Severity::parse);
    runtime.notifier().notify(message, severity);
}

#[wasm_bindgen(js_name = showLoading)]
pub fn show_loading() {
    if let Some(runtime) = runtime() {
        runtime.overlay().show();
    }
}

#[wasm_bindgen(js_name = hideLoading)]
pub fn hide_loading() {
    if let Some(runtime) = runtime() {
        runtime.overlay().hide();
    }
}

#[wasm_bindgen(js_name = formatTokens)]
pub fn format_tokens(amount: f64) -> String {
    crate::util::format::format_tokens(amount)
}

/// `apiCall(url, method = "GET", data = null)`: resolves with the parsed
/// JSON body, rejects with an `Error` whose message follows the API policy.
#[wasm_bindgen(js_name = apiCall)]
pub fn api_call(url: String, method: Option<String>, data: JsValue) -> js_sys::Promise {
    wasm_bindgen_futures::future_to_promise(async move {
        let value = call_json(url, method.as_deref(), &data)
            .await
            .map_err(|e| JsValue::from(js_sys::Error::new(&e.to_string())))?;
        js_sys::JSON::parse(&value.to_string())
    })
}

async fn call_json(url: String, method: Option<&str>, data: &JsValue) -> Result<serde_json::Value, ApiError> {
    let Some(runtime) = runtime() else {
        return Err(ApiError::Transport("page chrome not mounted".to_owned()));
    };
    let data_json = if data.is_undefined() || data.is_null() {
        None
    } else {
        js_sys::JSON::stringify(data).ok().and_then(|raw| raw.as_string())
    };
    let request = ApiRequest::from_script(url, method, data_json.as_deref())?;
    runtime.api().call(request).await
}
