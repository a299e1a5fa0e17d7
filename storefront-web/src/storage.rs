//! Session persistence in browser local storage.

use gloo_storage::{LocalStorage, Storage};
use shared::Session;
use shared::models::User;

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

/// Read the persisted session. A blob missing either half, or one that no
/// longer parses, loads as anonymous.
pub fn load() -> Session {
    let user = LocalStorage::get::<User>(USER_KEY).ok();
    let token = LocalStorage::get::<String>(TOKEN_KEY).ok();
    Session::restore(user, token)
}

/// Persist both halves of the session, or clear storage for an anonymous one.
pub fn save(session: &Session) {
    let (Some(user), Some(token)) = (session.user(), session.token()) else {
        clear();
        return;
    };
    if let Err(err) = LocalStorage::set(TOKEN_KEY, token) {
        log::error!("failed to persist token: {err}");
    }
    if let Err(err) = LocalStorage::set(USER_KEY, user) {
        log::error!("failed to persist user: {err}");
    }
}

pub fn clear() {
    LocalStorage::delete(TOKEN_KEY);
    LocalStorage::delete(USER_KEY);
}
