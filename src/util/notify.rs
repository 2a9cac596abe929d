//! Fire-and-forget toast notifications.
//!
//! `notify` appends a toast and schedules two tasks: the exit animation at
//! `visible`, removal at `visible + exit`. Both are scheduled up front so a
//! caller (or a test) can cancel them through the returned [`ToastHandle`].

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use crate::config::ToastTiming;
use crate::state::SharedState;
use crate::state::toasts::{Severity, ToastId, ToastState};
use crate::util::schedule::{Scheduler, TaskHandle};

/// Pending timers for one toast.
#[derive(Debug, Clone)]
pub struct ToastHandle {
    pub id: ToastId,
    exit: TaskHandle,
    removal: TaskHandle,
}

impl ToastHandle {
    /// Stop the auto-dismiss timers. The toast stays until removed.
    pub fn cancel(&self) {
        self.exit.cancel();
        self.removal.cancel();
    }
}

/// Presents toasts into a shared [`ToastState`].
#[derive(Clone)]
pub struct Notifier<S, C> {
    toasts: S,
    scheduler: C,
    timing: ToastTiming,
}

impl<S, C> Notifier<S, C>
where
    S: SharedState<ToastState> + Clone + 'static,
    C: Scheduler,
{
    pub fn new(toasts: S, scheduler: C) -> Self {
        Self::with_timing(toasts, scheduler, ToastTiming::default())
    }

    pub fn with_timing(toasts: S, scheduler: C, timing: ToastTiming) -> Self {
        Self { toasts, scheduler, timing }
    }

    /// Show `message` and schedule its dismissal.
    ///
    /// Returns `None` only when the toast state no longer exists (the chrome
    /// was unmounted).
    pub fn notify(&self, message: impl Into<String>, severity: Severity) -> Option<ToastHandle> {
        let message = message.into();
        let id = self.toasts.update_with(|s| s.push(message, severity))?;

        let toasts = self.toasts.clone();
        let exit = self.scheduler.schedule(
            self.timing.visible,
            Box::new(move || {
                toasts.update_with(|s| s.begin_exit(id));
            }),
        );
        let toasts = self.toasts.clone();
        let removal = self.scheduler.schedule(
            self.timing.removal_at(),
            Box::new(move || {
                toasts.update_with(|s| s.remove(id));
            }),
        );
        Some(ToastHandle { id, exit, removal })
    }

    /// Remove the toast now and cancel its timers.
    pub fn dismiss(&self, handle: &ToastHandle) {
        handle.cancel();
        self.toasts.update_with(|s| s.remove(handle.id));
    }
}
