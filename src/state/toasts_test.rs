use super::*;

// =============================================================
// Severity
// =============================================================

#[test]
fn severity_defaults_to_info() {
    assert_eq!(Severity::default(), Severity::Info);
    assert_eq!(Severity::parse(""), Severity::Info);
}

#[test]
fn severity_parses_known_tags() {
    assert_eq!(Severity::parse("success"), Severity::Success);
    assert_eq!(Severity::parse("warning"), Severity::Warning);
    assert_eq!(Severity::parse("error"), Severity::Error);
}

#[test]
fn severity_keeps_unknown_tags_verbatim() {
    let severity = Severity::parse("reward");
    assert_eq!(severity, Severity::Custom("reward".to_owned()));
    assert_eq!(severity.to_string(), "reward");
}

// =============================================================
// ToastState
// =============================================================

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let a = state.push("one", Severity::Info);
    let b = state.push("one", Severity::Info);
    assert!(b > a);
    assert_eq!(state.len(), 2);
}

#[test]
fn begin_exit_marks_leaving_class() {
    let mut state = ToastState::default();
    let id = state.push("saved", Severity::Success);
    assert_eq!(state.get(id).map(Toast::class_name).as_deref(), Some("notification notification-success"));

    assert!(state.begin_exit(id));
    assert_eq!(
        state.get(id).map(Toast::class_name).as_deref(),
        Some("notification notification-success notification--leaving")
    );
}

#[test]
fn remove_is_false_for_missing_toast() {
    let mut state = ToastState::default();
    let id = state.push("bye", Severity::Error);
    assert!(state.remove(id));
    assert!(!state.remove(id));
    assert!(!state.begin_exit(id));
    assert!(state.is_empty());
}
