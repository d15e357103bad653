//! Persistence of the session signal to browser storage.
//!
//! Only this module touches the `auth` and `user` keys. The app installs one
//! effect that calls [`persist`] whenever the session signal changes.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use contracts::SessionUser;

use super::storage;
use crate::state::session::SessionState;

pub const TOKEN_KEY: &str = "auth";
pub const USER_KEY: &str = "user";

/// Rebuild the session from browser storage.
pub fn restore() -> SessionState {
    SessionState::restored(storage::load_json::<SessionUser>(USER_KEY), storage::load_raw(TOKEN_KEY))
}

/// What `persist` should do for `state`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreAction {
    /// Still restoring; leave storage alone.
    Skip,
    Write { token: String, user: Option<SessionUser> },
    Clear,
}

#[must_use]
pub fn store_action(state: &SessionState) -> StoreAction {
    if state.loading {
        return StoreAction::Skip;
    }
    match &state.token {
        Some(token) => StoreAction::Write { token: token.clone(), user: state.user.clone() },
        None => StoreAction::Clear,
    }
}

/// Mirror `state` into browser storage.
pub fn persist(state: &SessionState) {
    match store_action(state) {
        StoreAction::Skip => {}
        StoreAction::Write { token, user } => {
            storage::save_raw(TOKEN_KEY, &token);
            match user {
                Some(user) => storage::save_json(USER_KEY, &user),
                None => storage::remove(USER_KEY),
            }
        }
        StoreAction::Clear => {
            storage::remove(TOKEN_KEY);
            storage::remove(USER_KEY);
        }
    }
}
