//! Theme selection and persistence.
//!
//! Reads the stored mode name, applies it as a `data-theme` attribute on the
//! `<html>` element, and marks the matching `.theme-btn` control active.
//! Mode names are an open set: anything the stylesheet knows about works,
//! anything else is stored and applied verbatim with no visual effect.
//!
//! TRADE-OFFS
//! ==========
//! DOM writes are best-effort browser-only behavior; native builds no-op so
//! the persistence rules stay testable.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::config::ThemeConfig;
#[cfg(feature = "hydrate")]
use crate::config::{ACTIVE_CLASS, THEME_ATTRIBUTE, THEME_CONTROL_SELECTOR};
use crate::util::storage::PreferenceStore;

/// Theme state backed by a [`PreferenceStore`].
#[derive(Debug, Clone)]
pub struct ThemeController<P> {
    store: P,
    config: ThemeConfig,
}

impl<P: PreferenceStore> ThemeController<P> {
    pub fn new(store: P) -> Self {
        Self::with_config(store, ThemeConfig::default())
    }

    pub fn with_config(store: P, config: ThemeConfig) -> Self {
        Self { store, config }
    }

    /// Apply `mode` to the document and persist it. No validation.
    pub fn set_theme(&self, mode: &str) {
        apply(mode);
        self.store.set(&self.config.storage_key, mode);
    }

    /// Stored mode, or the default when nothing (or an empty string) is stored.
    pub fn theme(&self) -> String {
        self.store
            .get(&self.config.storage_key)
            .filter(|mode| !mode.is_empty())
            .unwrap_or_else(|| self.config.default_theme.clone())
    }

    /// Page-ready hook: re-apply the stored mode and sync the mode controls.
    pub fn init_on_page_ready(&self) -> String {
        let mode = self.theme();
        self.set_theme(&mode);
        sync_controls(&mode);
        mode
    }
}

/// Which controls should carry the active class for `theme`.
///
/// `control_modes` holds each control's mode identifier in document order;
/// controls without one never match.
pub fn active_flags(control_modes: &[Option<String>], theme: &str) -> Vec<bool> {
    control_modes.iter().map(|mode| mode.as_deref() == Some(theme)).collect()
}

/// Set the theme attribute on the `<html>` element.
pub fn apply(mode: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            let _ = el.set_attribute(THEME_ATTRIBUTE, mode);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = mode;
    }
}

/// Toggle the active class across every mode control in the document.
pub fn sync_controls(mode: &str) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Ok(nodes) = doc.query_selector_all(THEME_CONTROL_SELECTOR) else {
            return;
        };
        let controls: Vec<web_sys::Element> = (0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
            .collect();
        let modes: Vec<Option<String>> = controls.iter().map(|el| el.get_attribute(THEME_ATTRIBUTE)).collect();
        for (el, active) in controls.iter().zip(active_flags(&modes, mode)) {
            let classes = el.class_list();
            let _ = classes.remove_1(ACTIVE_CLASS);
            if active {
                let _ = classes.add_1(ACTIVE_CLASS);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = mode;
    }
}
