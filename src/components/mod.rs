//! Page chrome components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render toasts, the loading overlay and theme controls while
//! reading/writing shared state from Leptos context providers.

pub mod loading_backdrop;
pub mod theme_switcher;
pub mod toast_stack;
