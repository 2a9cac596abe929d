use super::*;

#[test]
fn loading_state_default_hidden() {
    assert!(!LoadingState::default().visible);
}

#[test]
fn show_twice_keeps_single_overlay() {
    let mut state = LoadingState::default();
    assert!(state.show());
    assert!(!state.show());
    assert!(state.visible);
}

#[test]
fn hide_without_overlay_is_noop() {
    let mut state = LoadingState::default();
    assert!(!state.hide());
    state.show();
    assert!(state.hide());
    assert!(!state.visible);
}
