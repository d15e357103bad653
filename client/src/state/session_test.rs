use super::*;

fn user() -> SessionUser {
    SessionUser {
        id: Some(1),
        email: "ops@example.com".to_owned(),
        first_name: "Dana".to_owned(),
        last_name: "Reyes".to_owned(),
    }
}

#[test]
fn restoring_state_is_loading_and_anonymous() {
    let state = SessionState::restoring();
    assert!(state.loading);
    assert!(!state.is_authenticated());
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn restored_without_token_redirects() {
    let state = SessionState::restored(Some(user()), None);
    assert!(!state.is_authenticated());
    assert!(should_redirect_unauth(&state));
}

#[test]
fn empty_token_counts_as_missing() {
    let state = SessionState::restored(None, Some(String::new()));
    assert_eq!(state.token, None);
}

#[test]
fn login_response_authenticates() {
    let state = SessionState::from_login(LoginResponse {
        access_token: Some("abc".to_owned()),
        user: Some(user()),
    });
    assert!(state.is_authenticated());
    assert!(!should_redirect_unauth(&state));
    assert_eq!(state.bearer().as_deref(), Some("Bearer abc"));
    assert_eq!(state.display_name(), "Dana Reyes");
}

#[test]
fn display_name_falls_back_to_email() {
    let state = SessionState::restored(
        Some(SessionUser { email: "ops@example.com".to_owned(), ..SessionUser::default() }),
        Some("t".to_owned()),
    );
    assert_eq!(state.display_name(), "ops@example.com");
}

#[test]
fn sign_out_clears_credentials() {
    let mut state = SessionState::restored(Some(user()), Some("t".to_owned()));
    state.sign_out();
    assert!(state.user.is_none());
    assert!(state.bearer().is_none());
    assert!(should_redirect_unauth(&state));
}
