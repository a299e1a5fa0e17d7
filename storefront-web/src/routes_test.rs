//! Tests for the routing system
//!
//! Validates route paths, parameter parsing and the access rules each route
//! applies to the current session.

#[cfg(test)]
mod tests {
    use crate::routes::MainRoute;
    use shared::models::{User, UserRole};
    use shared::{Access, GuardOutcome, LoginDestination, Session};
    use yew_router::Routable;

    fn session(role: UserRole) -> Session {
        Session::restore(
            Some(User {
                id: 1,
                email: "someone@marketplace.com".to_string(),
                role,
                created_at: None,
            }),
            Some("token".to_string()),
        )
    }

    /// Tests route paths
    #[test]
    fn test_route_paths() {
        assert_eq!(MainRoute::Home.to_path(), "/");
        assert_eq!(MainRoute::Login.to_path(), "/login");
        assert_eq!(MainRoute::Register.to_path(), "/register");
        assert_eq!(MainRoute::Admin.to_path(), "/admin");
        assert_eq!(MainRoute::ProductDetail { id: 42 }.to_path(), "/products/42");
    }

    /// Tests product id parameter parsing
    #[test]
    fn test_product_route_recognized() {
        assert_eq!(
            MainRoute::recognize("/products/17"),
            Some(MainRoute::ProductDetail { id: 17 })
        );
        assert_eq!(MainRoute::recognize("/admin"), Some(MainRoute::Admin));
    }

    /// Tests unknown paths fall back to the not-found route
    #[test]
    fn test_unknown_path_is_not_found() {
        assert_eq!(MainRoute::recognize("/nope/nope"), Some(MainRoute::NotFound));
    }

    /// Tests that only the admin route is gated
    #[test]
    fn test_route_access() {
        assert_eq!(MainRoute::Admin.access(), Access::Admin);
        for route in [
            MainRoute::Home,
            MainRoute::ProductDetail { id: 1 },
            MainRoute::Login,
            MainRoute::Register,
            MainRoute::NotFound,
        ] {
            assert_eq!(route.access(), Access::Public, "{route:?}");
        }
    }

    /// Tests admin gating per role
    #[test]
    fn test_admin_route_guard() {
        let access = MainRoute::Admin.access();
        assert_eq!(Session::anonymous().guard(access), GuardOutcome::RedirectLogin);
        assert_eq!(session(UserRole::Customer).guard(access), GuardOutcome::RedirectHome);
        assert_eq!(session(UserRole::Admin).guard(access), GuardOutcome::Allow);
    }

    /// Tests post-login redirect targets
    #[test]
    fn test_login_destination_routes() {
        assert_eq!(MainRoute::from(LoginDestination::Admin), MainRoute::Admin);
        assert_eq!(MainRoute::from(LoginDestination::Home), MainRoute::Home);
        assert_eq!(
            MainRoute::from(session(UserRole::Admin).landing()).to_path(),
            "/admin"
        );
        assert_eq!(
            MainRoute::from(session(UserRole::Customer).landing()).to_path(),
            "/"
        );
    }
}
