//! Full-page loading overlay visibility.
//!
//! The overlay is a singleton. Showing it while it is already up changes
//! nothing, so at most one overlay exists in the document.

#[cfg(test)]
#[path = "loading_test.rs"]
mod loading_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadingState {
    pub visible: bool,
}

impl LoadingState {
    /// Returns `true` if the overlay was hidden before.
    pub fn show(&mut self) -> bool {
        !std::mem::replace(&mut self.visible, true)
    }

    /// Returns `true` if the overlay was visible before.
    pub fn hide(&mut self) -> bool {
        std::mem::replace(&mut self.visible, false)
    }
}
