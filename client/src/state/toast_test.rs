use super::*;

#[test]
fn show_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let a = state.show("Saved", Severity::Success);
    let b = state.show("Failed", Severity::Error);
    assert!(b > a);
    assert_eq!(state.toasts.len(), 2);
    assert_eq!(state.toasts[1].severity, Severity::Error);
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut state = ToastState::default();
    let a = state.show("one", Severity::Success);
    let b = state.show("two", Severity::Success);
    state.dismiss(a);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].id, b);
    state.dismiss(a);
    assert_eq!(state.toasts.len(), 1);
}

#[test]
fn ids_are_not_reused_after_dismiss() {
    let mut state = ToastState::default();
    let a = state.show("one", Severity::Success);
    state.dismiss(a);
    assert!(state.show("two", Severity::Success) > a);
}

#[test]
fn modal_closes_before_toast_hides() {
    assert!(MODAL_CLOSE_DELAY_MS < TOAST_AUTO_HIDE_MS);
}
