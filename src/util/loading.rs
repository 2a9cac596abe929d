//! Loading overlay controller.
//!
//! Wraps [`LoadingState`] so callers can show/hide the overlay directly or
//! tie it to a scope with [`LoadingGuard`] / [`LoadingOverlay::with_loading`].
//! A guard hides the overlay on drop even if the wrapped work bails out early.

#[cfg(test)]
#[path = "loading_test.rs"]
mod loading_test;

use std::future::Future;

use crate::state::SharedState;
use crate::state::loading::LoadingState;

#[derive(Debug, Clone, Copy)]
pub struct LoadingOverlay<S> {
    state: S,
}

impl<S: SharedState<LoadingState> + Clone> LoadingOverlay<S> {
    pub fn new(state: S) -> Self {
        Self { state }
    }

    /// Show the overlay. Returns `true` if it was not already up.
    pub fn show(&self) -> bool {
        self.state.update_with(LoadingState::show).unwrap_or(false)
    }

    /// Hide the overlay. No-op if it is not up.
    pub fn hide(&self) -> bool {
        self.state.update_with(LoadingState::hide).unwrap_or(false)
    }

    pub fn is_visible(&self) -> bool {
        self.state.read_with(|s| s.visible).unwrap_or(false)
    }

    /// Show the overlay until the returned guard is dropped.
    pub fn guard(&self) -> LoadingGuard<S> {
        self.show();
        LoadingGuard { state: self.state.clone() }
    }

    /// Run `work` with the overlay up.
    pub async fn with_loading<F: Future>(&self, work: F) -> F::Output {
        let _guard = self.guard();
        work.await
    }
}

/// Hides the overlay when dropped.
#[must_use = "the overlay hides as soon as the guard is dropped"]
pub struct LoadingGuard<S: SharedState<LoadingState>> {
    state: S,
}

impl<S: SharedState<LoadingState>> Drop for LoadingGuard<S> {
    fn drop(&mut self) {
        self.state.update_with(LoadingState::hide);
    }
}
