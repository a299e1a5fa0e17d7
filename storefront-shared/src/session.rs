//! Client-side session state.
//!
//! A session is the `(user, token)` pair handed out by the auth endpoints.
//! Both halves are present or both are absent; every constructor and mutator
//! here keeps it that way.

use crate::models::{AuthResponse, User};

/// Where a freshly signed-in user lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginDestination {
    /// `/admin`
    Admin,
    /// `/`
    Home,
}

impl LoginDestination {
    /// Path of the destination page.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Admin => "/admin",
            Self::Home => "/",
        }
    }
}

/// What a page requires of the visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Anyone may view it.
    Public,
    /// Any signed-in user.
    Authenticated,
    /// Signed-in users with the admin role.
    Admin,
}

/// Result of checking a session against an [`Access`] requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Render the page.
    Allow,
    /// Send the visitor to `/login`.
    RedirectLogin,
    /// Send the visitor to `/`.
    RedirectHome,
}

/// The signed-in user and their bearer token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    user: Option<User>,
    token: Option<String>,
}

impl Session {
    /// An anonymous session.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Rebuild a session from persisted halves. A blob with only one half is
    /// discarded.
    #[must_use]
    pub fn restore(user: Option<User>, token: Option<String>) -> Self {
        match (user, token) {
            (Some(user), Some(token)) if !token.is_empty() => Self {
                user: Some(user),
                token: Some(token),
            },
            _ => Self::anonymous(),
        }
    }

    /// Start a session for `user`. An empty token leaves the session
    /// anonymous, the same as [`Session::restore`] would.
    pub fn login(&mut self, user: User, token: impl Into<String>) {
        *self = Self::restore(Some(user), Some(token.into()));
    }

    /// Drop both halves of the session.
    pub fn logout(&mut self) {
        self.user = None;
        self.token = None;
    }

    /// The signed-in user, if any.
    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// The bearer token, if any.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// True iff a user and a non-empty token are present.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.token.as_deref().is_some_and(|token| !token.is_empty())
    }

    /// True for an authenticated admin.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.is_authenticated() && self.user.as_ref().is_some_and(User::is_admin)
    }

    /// Landing page after sign-in.
    #[must_use]
    pub fn landing(&self) -> LoginDestination {
        if self.is_admin() {
            LoginDestination::Admin
        } else {
            LoginDestination::Home
        }
    }

    /// Decide whether a page with the given requirement may render.
    #[must_use]
    pub fn guard(&self, required: Access) -> GuardOutcome {
        match required {
            Access::Public => GuardOutcome::Allow,
            Access::Authenticated if self.is_authenticated() => GuardOutcome::Allow,
            Access::Authenticated => GuardOutcome::RedirectLogin,
            Access::Admin if !self.is_authenticated() => GuardOutcome::RedirectLogin,
            Access::Admin if self.is_admin() => GuardOutcome::Allow,
            Access::Admin => GuardOutcome::RedirectHome,
        }
    }
}

impl From<AuthResponse> for Session {
    fn from(auth: AuthResponse) -> Self {
        let mut session = Self::anonymous();
        session.login(auth.user, auth.token);
        session
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserRole;

    fn user(role: UserRole) -> User {
        User {
            id: 1,
            email: "someone@marketplace.com".to_string(),
            role,
            created_at: None,
        }
    }

    #[test]
    fn anonymous_by_default() {
        let session = Session::default();
        assert!(!session.is_authenticated());
        assert!(!session.is_admin());
        assert_eq!(session.user(), None);
        assert_eq!(session.token(), None);
    }

    #[test]
    fn restore_requires_both_halves() {
        assert!(Session::restore(Some(user(UserRole::Customer)), Some("t".into())).is_authenticated());
        assert_eq!(Session::restore(Some(user(UserRole::Admin)), None), Session::anonymous());
        assert_eq!(Session::restore(None, Some("t".into())), Session::anonymous());
        assert_eq!(
            Session::restore(Some(user(UserRole::Admin)), Some(String::new())),
            Session::anonymous()
        );
    }

    #[test]
    fn login_then_logout() {
        let mut session = Session::anonymous();
        session.login(user(UserRole::Admin), "token-1");
        assert!(session.is_authenticated());
        assert!(session.is_admin());
        assert_eq!(session.token(), Some("token-1"));

        session.logout();
        assert_eq!(session, Session::anonymous());
    }

    #[test]
    fn landing_depends_on_role() {
        let admin = Session::restore(Some(user(UserRole::Admin)), Some("a".into()));
        let customer = Session::restore(Some(user(UserRole::Customer)), Some("c".into()));

        assert_eq!(admin.landing(), LoginDestination::Admin);
        assert_eq!(admin.landing().path(), "/admin");
        assert_eq!(customer.landing(), LoginDestination::Home);
        assert_eq!(customer.landing().path(), "/");
        assert_eq!(Session::anonymous().landing(), LoginDestination::Home);
    }

    #[test]
    fn guard_outcomes() {
        let anonymous = Session::anonymous();
        let customer = Session::restore(Some(user(UserRole::Customer)), Some("c".into()));
        let admin = Session::restore(Some(user(UserRole::Admin)), Some("a".into()));

        for session in [&anonymous, &customer, &admin] {
            assert_eq!(session.guard(Access::Public), GuardOutcome::Allow);
        }

        assert_eq!(anonymous.guard(Access::Authenticated), GuardOutcome::RedirectLogin);
        assert_eq!(customer.guard(Access::Authenticated), GuardOutcome::Allow);

        assert_eq!(anonymous.guard(Access::Admin), GuardOutcome::RedirectLogin);
        assert_eq!(customer.guard(Access::Admin), GuardOutcome::RedirectHome);
        assert_eq!(admin.guard(Access::Admin), GuardOutcome::Allow);
    }

    #[test]
    fn empty_token_login_stays_anonymous() {
        let mut session = Session::anonymous();
        session.login(user(UserRole::Admin), "");
        assert!(!session.is_authenticated());
        assert!(!session.is_admin());
        assert_eq!(session, Session::restore(Some(user(UserRole::Admin)), Some(String::new())));

        let mut signed_in = Session::restore(Some(user(UserRole::Customer)), Some("t".into()));
        signed_in.login(user(UserRole::Customer), "");
        assert_eq!(signed_in, Session::anonymous());
    }

    #[test]
    fn empty_token_auth_response_is_anonymous() {
        let session = Session::from(AuthResponse {
            user: user(UserRole::Customer),
            token: String::new(),
        });
        assert_eq!(session, Session::anonymous());
        assert_eq!(session.landing(), LoginDestination::Home);
    }

    #[test]
    fn from_auth_response() {
        let session = Session::from(AuthResponse {
            user: user(UserRole::Customer),
            token: "jwt".to_string(),
        });
        assert!(session.is_authenticated());
        assert!(!session.is_admin());
    }
}
