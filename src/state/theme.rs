//! Currently applied display mode, mirrored for reactive rendering.

use crate::config::DEFAULT_THEME;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeState {
    pub mode: String,
}

impl Default for ThemeState {
    fn default() -> Self {
        Self { mode: DEFAULT_THEME.to_owned() }
    }
}
