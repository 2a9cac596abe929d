//! Delayed tasks with cancellation handles.
//!
//! Toast dismissal and the session-expiry redirect are both "run this later"
//! side effects. Routing them through [`Scheduler`] makes each one an explicit
//! task that can be cancelled, and lets tests drive time with
//! [`ManualScheduler`] instead of waiting on real timers.
//!
//! TRADE-OFFS
//! ==========
//! Cancellation is a shared flag checked when the timer fires. The browser
//! timer itself stays registered, which costs one no-op callback per
//! cancelled task.

#[cfg(test)]
#[path = "schedule_test.rs"]
mod schedule_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

/// Handle to a scheduled task. Dropping it does not cancel the task.
#[derive(Debug, Clone, Default)]
pub struct TaskHandle {
    cancelled: Rc<Cell<bool>>,
}

impl TaskHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prevent the task from running if it has not run yet.
    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }

    /// Wrap `task` so it only runs while this handle is not cancelled.
    fn guard(&self, task: Box<dyn FnOnce()>) -> impl FnOnce() + 'static {
        let cancelled = Rc::clone(&self.cancelled);
        move || {
            if !cancelled.get() {
                task();
            }
        }
    }
}

/// Runs tasks after a delay on the current thread.
pub trait Scheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TaskHandle;
}

/// Browser timers via `gloo-timers`. Outside the browser tasks never run.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TaskHandle {
        let handle = TaskHandle::new();
        #[cfg(feature = "hydrate")]
        {
            let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
            gloo_timers::callback::Timeout::new(millis, handle.guard(task)).forget();
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (delay, task);
        }
        handle
    }
}

struct PendingTask {
    due_ms: u64,
    seq: u64,
    run: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct ManualClock {
    now_ms: u64,
    next_seq: u64,
    pending: Vec<PendingTask>,
}

/// Virtual-clock scheduler: tasks run only when [`ManualScheduler::advance`]
/// moves time past their due point. Clones share the same clock.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<ManualClock>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time since creation.
    pub fn now(&self) -> Duration {
        Duration::from_millis(self.clock.borrow().now_ms)
    }

    /// Number of tasks still waiting, cancelled ones included.
    pub fn pending(&self) -> usize {
        self.clock.borrow().pending.len()
    }

    /// Move the clock forward by `by`, running due tasks in deadline order.
    ///
    /// Tasks scheduled while advancing run in the same call if they fall due
    /// before the new time.
    pub fn advance(&self, by: Duration) {
        let target = self.clock.borrow().now_ms + duration_ms(by);
        while let Some(task) = self.pop_due(target) {
            (task.run)();
        }
        self.clock.borrow_mut().now_ms = target;
    }

    fn pop_due(&self, target: u64) -> Option<PendingTask> {
        let mut clock = self.clock.borrow_mut();
        let index = clock
            .pending
            .iter()
            .enumerate()
            .filter(|(_, task)| task.due_ms <= target)
            .min_by_key(|(_, task)| (task.due_ms, task.seq))
            .map(|(index, _)| index)?;
        let task = clock.pending.swap_remove(index);
        clock.now_ms = task.due_ms;
        Some(task)
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TaskHandle {
        let handle = TaskHandle::new();
        let mut clock = self.clock.borrow_mut();
        let due_ms = clock.now_ms + duration_ms(delay);
        let seq = clock.next_seq;
        clock.next_seq += 1;
        clock.pending.push(PendingTask { due_ms, seq, run: Box::new(handle.guard(task)) });
        handle
    }
}

fn duration_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
