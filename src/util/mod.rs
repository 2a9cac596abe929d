//! Browser-facing helpers shared by components and the JS bindings.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each module isolates one browser concern (storage, timers, navigation,
//! DOM attributes) behind a small seam so page logic stays testable natively.

pub mod format;
pub mod loading;
pub mod navigate;
pub mod notify;
pub mod schedule;
pub mod storage;
pub mod theme;
