//! Transient toast notifications.
//!
//! Toasts are unmanaged: any number may be visible at once, duplicates are
//! allowed, and all of them share one fixed screen anchor. Each one moves
//! from `Visible` to `Leaving` (exit animation) and is then removed.

#[cfg(test)]
#[path = "toasts_test.rs"]
mod toasts_test;

use std::fmt;

/// Identifier of a toast within one [`ToastState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(pub u64);

/// Styling tag for a toast.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Error,
    /// Any other tag; passed through to the CSS class untouched.
    Custom(String),
}

impl Severity {
    /// Parse a severity tag. Empty input falls back to `Info`.
    pub fn parse(tag: &str) -> Self {
        match tag {
            "" | "info" => Self::Info,
            "success" => Self::Success,
            "warning" => Self::Warning,
            "error" => Self::Error,
            other => Self::Custom(other.to_owned()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Custom(tag) => tag,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastPhase {
    #[default]
    Visible,
    Leaving,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub severity: Severity,
    pub phase: ToastPhase,
}

impl Toast {
    /// CSS classes: `notification notification-<severity>`, plus a leaving
    /// modifier during the exit animation.
    pub fn class_name(&self) -> String {
        let mut class = format!("notification notification-{}", self.severity);
        if self.phase == ToastPhase::Leaving {
            class.push_str(" notification--leaving");
        }
        class
    }
}

/// All toasts currently in the document, oldest first.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    pub next_id: u64,
}

impl ToastState {
    /// Append a new visible toast and return its id.
    pub fn push(&mut self, message: impl Into<String>, severity: Severity) -> ToastId {
        let id = ToastId(self.next_id);
        self.next_id += 1;
        self.toasts.push(Toast { id, message: message.into(), severity, phase: ToastPhase::Visible });
        id
    }

    /// Start the exit animation. Returns `false` if the toast is gone.
    pub fn begin_exit(&mut self, id: ToastId) -> bool {
        match self.toasts.iter_mut().find(|t| t.id == id) {
            Some(toast) => {
                toast.phase = ToastPhase::Leaving;
                true
            }
            None => false,
        }
    }

    /// Drop the toast from the document. Returns `false` if already gone.
    pub fn remove(&mut self, id: ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.toasts.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
