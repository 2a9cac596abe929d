//! Fixed page-glue settings.
//!
//! Browser code has no process environment, so configuration is a typed
//! struct whose `Default` carries the values the server templates expect.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const THEME_STORAGE_KEY: &str = "theme";
pub const DEFAULT_THEME: &str = "light";
pub const THEME_ATTRIBUTE: &str = "data-theme";
pub const THEME_CONTROL_SELECTOR: &str = ".theme-btn";
pub const ACTIVE_CLASS: &str = "active";

pub const LOGIN_PATH: &str = "/login";
pub const SESSION_REDIRECT_DELAY_MS: u64 = 2000;
pub const SESSION_EXPIRED_MESSAGE: &str = "Сессия истекла. Пожалуйста, войдите снова.";
pub const SERVER_ERROR_MESSAGE: &str = "Ошибка сервера";

pub const TOAST_VISIBLE_MS: u64 = 3000;
pub const TOAST_EXIT_MS: u64 = 300;

pub const LOADING_OVERLAY_ID: &str = "loading-overlay";

/// How long a toast stays up and how long its exit animation runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastTiming {
    pub visible: Duration,
    pub exit: Duration,
}

impl ToastTiming {
    /// Offset from creation at which the toast leaves the document.
    pub fn removal_at(&self) -> Duration {
        self.visible + self.exit
    }
}

impl Default for ToastTiming {
    fn default() -> Self {
        Self { visible: Duration::from_millis(TOAST_VISIBLE_MS), exit: Duration::from_millis(TOAST_EXIT_MS) }
    }
}

/// Where and when an expired session is sent to log in again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub login_path: String,
    pub redirect_delay: Duration,
    pub expired_message: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            login_path: LOGIN_PATH.to_owned(),
            redirect_delay: Duration::from_millis(SESSION_REDIRECT_DELAY_MS),
            expired_message: SESSION_EXPIRED_MESSAGE.to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeConfig {
    pub storage_key: String,
    pub default_theme: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self { storage_key: THEME_STORAGE_KEY.to_owned(), default_theme: DEFAULT_THEME.to_owned() }
    }
}

/// All page-glue settings in one place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiConfig {
    pub theme: ThemeConfig,
    pub session: SessionConfig,
    pub toasts: ToastTiming,
}
