use shared::Session;
use yewdux::{Context, Store};

use crate::{api::StorefrontClient, storage};

/// Global UI state. The session is read from local storage once, when the
/// store is first touched, and written only by login, register and logout.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct AppState {
    pub session: Session,
}

impl Store for AppState {
    fn new(_cx: &Context) -> Self {
        let session = storage::load();
        StorefrontClient::shared().set_token(session.token().map(str::to_string));
        if let Some(user) = session.user() {
            log::debug!("restored session for {}", user.email);
        }
        Self { session }
    }

    fn should_notify(&self, old: &Self) -> bool {
        self != old
    }
}

impl AppState {
    /// Store a fresh session everywhere it lives.
    pub fn signed_in(session: Session) -> Self {
        storage::save(&session);
        StorefrontClient::shared().set_token(session.token().map(str::to_string));
        Self { session }
    }

    /// Drop the session everywhere it lives.
    pub fn signed_out() -> Self {
        storage::clear();
        StorefrontClient::shared().logout();
        Self::default()
    }
}
