use super::*;

#[test]
fn visible_toast_slides_in() {
    let style = toast_style(ToastPhase::Visible);
    assert!(style.contains("animation: slideIn 0.3s ease"));
    assert!(style.contains("position: fixed; top: 20px; right: 20px"));
}

#[test]
fn leaving_toast_slides_out() {
    assert!(toast_style(ToastPhase::Leaving).contains("animation: slideOut 0.3s ease"));
}
