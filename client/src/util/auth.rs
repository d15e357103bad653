//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical unauthenticated redirect behavior.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::{SessionState, should_redirect_unauth};

pub const LOGIN_PATH: &str = "/auth/login";
pub const SIGNUP_PATH: &str = "/auth/signup";
pub const HOME_PATH: &str = "/dashboard/alerts";

/// Redirect to [`LOGIN_PATH`] whenever the session has loaded without credentials.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&session.get()) {
            navigate(LOGIN_PATH, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}

/// Where the auth pages should send an already signed-in visitor.
#[must_use]
pub fn signed_in_destination(state: &SessionState) -> Option<&'static str> {
    (!state.loading && state.is_authenticated()).then_some(HOME_PATH)
}

/// Clear the session; the persistence effect wipes browser storage.
pub fn sign_out(session: RwSignal<SessionState>) {
    session.update(SessionState::sign_out);
}
