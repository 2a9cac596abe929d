use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use super::*;
use crate::state::toasts::ToastPhase;
use crate::util::schedule::ManualScheduler;

fn notifier() -> (Notifier<Rc<RefCell<ToastState>>, ManualScheduler>, Rc<RefCell<ToastState>>, ManualScheduler) {
    let toasts = Rc::new(RefCell::new(ToastState::default()));
    let scheduler = ManualScheduler::new();
    (Notifier::new(Rc::clone(&toasts), scheduler.clone()), toasts, scheduler)
}

fn phase(toasts: &Rc<RefCell<ToastState>>, id: ToastId) -> Option<ToastPhase> {
    toasts.borrow().get(id).map(|t| t.phase)
}

#[test]
fn toast_leaves_at_3000ms_and_is_removed_at_3300ms() {
    let (notifier, toasts, scheduler) = notifier();
    let handle = notifier.notify("Урок создан", Severity::Success).unwrap();
    assert_eq!(phase(&toasts, handle.id), Some(ToastPhase::Visible));

    scheduler.advance(Duration::from_millis(2999));
    assert_eq!(phase(&toasts, handle.id), Some(ToastPhase::Visible));

    scheduler.advance(Duration::from_millis(1));
    assert_eq!(phase(&toasts, handle.id), Some(ToastPhase::Leaving));

    scheduler.advance(Duration::from_millis(299));
    assert_eq!(phase(&toasts, handle.id), Some(ToastPhase::Leaving));

    scheduler.advance(Duration::from_millis(1));
    assert_eq!(phase(&toasts, handle.id), None);
}

#[test]
fn concurrent_toasts_are_not_deduplicated() {
    let (notifier, toasts, _scheduler) = notifier();
    notifier.notify("same", Severity::Info);
    notifier.notify("same", Severity::Info);
    assert_eq!(toasts.borrow().len(), 2);
}

#[test]
fn cancelled_toast_stays_visible() {
    let (notifier, toasts, scheduler) = notifier();
    let handle = notifier.notify("pinned", Severity::Warning).unwrap();
    handle.cancel();

    scheduler.advance(Duration::from_secs(10));
    assert_eq!(phase(&toasts, handle.id), Some(ToastPhase::Visible));
}

#[test]
fn dismiss_removes_immediately() {
    let (notifier, toasts, scheduler) = notifier();
    let keep = notifier.notify("keep", Severity::Info).unwrap();
    let gone = notifier.notify("gone", Severity::Error).unwrap();

    notifier.dismiss(&gone);
    assert_eq!(phase(&toasts, gone.id), None);
    assert_eq!(phase(&toasts, keep.id), Some(ToastPhase::Visible));

    scheduler.advance(Duration::from_secs(4));
    assert!(toasts.borrow().is_empty());
}

#[test]
fn custom_timing_is_respected() {
    let toasts = Rc::new(RefCell::new(ToastState::default()));
    let scheduler = ManualScheduler::new();
    let timing = ToastTiming { visible: Duration::from_millis(10), exit: Duration::from_millis(5) };
    let notifier = Notifier::with_timing(Rc::clone(&toasts), scheduler.clone(), timing);
    notifier.notify("quick", Severity::Info);

    scheduler.advance(Duration::from_millis(15));
    assert!(toasts.borrow().is_empty());
}
