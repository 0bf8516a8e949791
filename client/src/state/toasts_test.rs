use super::*;
use leads::{NoticeLevel, NoticeOptions};

fn notice(message: &str) -> Notice {
    Notice::new(NoticeLevel::Info, message, NoticeOptions::default())
}

// =============================================================
// ToastState
// =============================================================

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let a = state.push(notice("a"));
    let b = state.push(notice("b"));
    assert!(b > a);
    assert_eq!(state.len(), 2);
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut state = ToastState::default();
    let a = state.push(notice("a"));
    let b = state.push(notice("b"));
    assert!(state.dismiss(a));
    assert!(!state.dismiss(a));
    assert_eq!(state.visible().iter().map(|t| t.id).collect::<Vec<_>>(), vec![b]);
}

#[test]
fn visible_keeps_newest_in_order() {
    let mut state = ToastState::default();
    for message in ["1", "2", "3", "4", "5"] {
        state.push(notice(message));
    }
    let shown: Vec<String> = state.visible().into_iter().map(|t| t.notice.message).collect();
    assert_eq!(shown, ["3", "4", "5"]);
    assert_eq!(state.len(), 5);
}

#[test]
fn ids_are_not_reused_after_dismiss() {
    let mut state = ToastState::default();
    let a = state.push(notice("a"));
    state.dismiss(a);
    assert_ne!(state.push(notice("b")), a);
}

// =============================================================
// Durations and notifier
// =============================================================

#[test]
fn display_duration_defaults_when_notice_has_none() {
    assert_eq!(display_duration(&notice("x")), DEFAULT_DURATION);
    let long = Notice::new(NoticeLevel::Success, "ok", NoticeOptions::default().lasting(Duration::from_secs(5)));
    assert_eq!(display_duration(&long), Duration::from_secs(5));
}

#[test]
fn toast_notifier_pushes_into_signal() {
    let toasts = RwSignal::new(ToastState::default());
    let notifier = ToastNotifier::new(toasts);
    notifier.error("Ошибка", NoticeOptions::described("Bad phone"));
    let state = toasts.get_untracked();
    assert_eq!(state.len(), 1);
    assert_eq!(state.visible()[0].notice.level, NoticeLevel::Error);
    assert_eq!(state.visible()[0].notice.options.description.as_deref(), Some("Bad phone"));
}
