use std::time::Duration;

use super::*;
use crate::config::{SessionConfig, ThemeConfig, ToastTiming};

fn custom_config() -> UiConfig {
    UiConfig {
        theme: ThemeConfig { storage_key: "ui.mode".to_owned(), default_theme: "dark".to_owned() },
        session: SessionConfig {
            login_path: "/auth".to_owned(),
            redirect_delay: Duration::from_millis(500),
            expired_message: "expired".to_owned(),
        },
        toasts: ToastTiming { visible: Duration::from_millis(100), exit: Duration::from_millis(10) },
    }
}

#[test]
fn runtime_seeds_theme_from_configured_default() {
    let owner = Owner::new();
    owner.with(|| {
        let runtime = UiRuntime::new(custom_config());
        assert_eq!(runtime.theme.get_untracked().mode, "dark");
        assert_eq!(runtime.themes().theme(), "dark");
    });
}

#[test]
fn runtime_keeps_configuration() {
    let owner = Owner::new();
    owner.with(|| {
        let runtime = UiRuntime::new(custom_config());
        assert_eq!(runtime.config.with_value(|c| c.session.login_path.clone()), "/auth");
        assert_eq!(runtime.config.with_value(|c| c.toasts.removal_at()), Duration::from_millis(110));
    });
}

#[test]
fn set_theme_updates_rendered_state() {
    let owner = Owner::new();
    owner.with(|| {
        let runtime = UiRuntime::new(UiConfig::default());
        runtime.set_theme("dark");
        assert_eq!(runtime.theme.get_untracked().mode, "dark");
    });
}

#[test]
fn loading_overlay_toggles_shared_state() {
    let owner = Owner::new();
    owner.with(|| {
        let runtime = UiRuntime::new(UiConfig::default());
        assert!(runtime.overlay().show());
        assert!(runtime.loading.get_untracked().visible);
        assert!(runtime.overlay().hide());
    });
}
