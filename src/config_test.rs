use super::*;

#[test]
fn defaults_match_page_templates() {
    let cfg = UiConfig::default();
    assert_eq!(cfg.theme.storage_key, "theme");
    assert_eq!(cfg.theme.default_theme, "light");
    assert_eq!(cfg.session.login_path, "/login");
    assert_eq!(cfg.session.redirect_delay, Duration::from_secs(2));
}

#[test]
fn toast_removal_follows_exit_animation() {
    let timing = ToastTiming::default();
    assert_eq!(timing.visible, Duration::from_millis(3000));
    assert_eq!(timing.removal_at(), Duration::from_millis(3300));
}
