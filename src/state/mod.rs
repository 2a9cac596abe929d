//! Client-side UI state for the page chrome.
//!
//! DESIGN
//! ======
//! State is plain data split by concern (`toasts`, `loading`, `theme`). Controllers
//! mutate it through [`SharedState`], which is a Leptos `RwSignal` in the
//! browser and an `Rc<RefCell<_>>` in tests.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::{RwSignal, Update, With};

pub mod loading;
pub mod theme;
pub mod toasts;

/// A handle to a piece of shared UI state.
pub trait SharedState<T> {
    /// Mutate the state, returning `None` if it has been disposed.
    fn update_with<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R>;

    /// Read the state, returning `None` if it has been disposed.
    fn read_with<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R>;
}

impl<T: Send + Sync + 'static> SharedState<T> for RwSignal<T> {
    fn update_with<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        self.try_update(f)
    }

    fn read_with<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        self.try_with(f)
    }
}

impl<T> SharedState<T> for Rc<RefCell<T>> {
    fn update_with<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }

    fn read_with<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        Some(f(&self.borrow()))
    }
}
