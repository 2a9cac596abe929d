use super::*;

fn recorder() -> (Rc<RefCell<Vec<&'static str>>>, impl Fn(&'static str) -> Box<dyn FnOnce()>) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    let make = move |label: &'static str| -> Box<dyn FnOnce()> {
        let sink = Rc::clone(&sink);
        Box::new(move || sink.borrow_mut().push(label))
    };
    (log, make)
}

#[test]
fn task_does_not_run_before_deadline() {
    let scheduler = ManualScheduler::new();
    let (log, task) = recorder();
    scheduler.schedule(Duration::from_millis(100), task("a"));

    scheduler.advance(Duration::from_millis(99));
    assert!(log.borrow().is_empty());

    scheduler.advance(Duration::from_millis(1));
    assert_eq!(*log.borrow(), vec!["a"]);
    assert_eq!(scheduler.pending(), 0);
}

#[test]
fn tasks_run_in_deadline_then_schedule_order() {
    let scheduler = ManualScheduler::new();
    let (log, task) = recorder();
    scheduler.schedule(Duration::from_millis(300), task("late"));
    scheduler.schedule(Duration::from_millis(100), task("first"));
    scheduler.schedule(Duration::from_millis(100), task("second"));

    scheduler.advance(Duration::from_secs(1));
    assert_eq!(*log.borrow(), vec!["first", "second", "late"]);
    assert_eq!(scheduler.now(), Duration::from_secs(1));
}

#[test]
fn cancelled_task_never_runs() {
    let scheduler = ManualScheduler::new();
    let (log, task) = recorder();
    let handle = scheduler.schedule(Duration::from_millis(10), task("a"));
    handle.cancel();

    scheduler.advance(Duration::from_millis(50));
    assert!(log.borrow().is_empty());
    assert!(handle.is_cancelled());
}

#[test]
fn dropping_handle_keeps_task_alive() {
    let scheduler = ManualScheduler::new();
    let (log, task) = recorder();
    drop(scheduler.schedule(Duration::from_millis(10), task("a")));

    scheduler.advance(Duration::from_millis(10));
    assert_eq!(*log.borrow(), vec!["a"]);
}

#[test]
fn nested_task_scheduled_during_advance_runs_when_due() {
    let scheduler = ManualScheduler::new();
    let log = Rc::new(RefCell::new(Vec::new()));
    let inner_scheduler = scheduler.clone();
    let inner_log = Rc::clone(&log);
    scheduler.schedule(
        Duration::from_millis(3000),
        Box::new(move || {
            inner_log.borrow_mut().push(3000);
            let nested_log = Rc::clone(&inner_log);
            inner_scheduler.schedule(Duration::from_millis(300), Box::new(move || nested_log.borrow_mut().push(3300)));
        }),
    );

    scheduler.advance(Duration::from_millis(3299));
    assert_eq!(*log.borrow(), vec![3000]);
    scheduler.advance(Duration::from_millis(1));
    assert_eq!(*log.borrow(), vec![3000, 3300]);
}
