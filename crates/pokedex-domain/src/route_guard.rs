//! Route Guard
//!
//! Which views are reachable for a given session flag.

pub const LOGIN_PATH: &str = "/login";
pub const CATALOGUE_PATH: &str = "/";

/// Access rule attached to a route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    /// Only reachable while logged in
    RequiresSession,
    /// Only reachable while logged out (the login page)
    RequiresNoSession,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(&'static str),
}

impl RouteAccess {
    pub fn decide(self, logged_in: bool) -> GuardDecision {
        match (self, logged_in) {
            (RouteAccess::RequiresSession, true) | (RouteAccess::RequiresNoSession, false) => {
                GuardDecision::Allow
            }
            (RouteAccess::RequiresSession, false) => GuardDecision::Redirect(LOGIN_PATH),
            (RouteAccess::RequiresNoSession, true) => GuardDecision::Redirect(CATALOGUE_PATH),
        }
    }
}

/// Top-level views of the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppRoute {
    Login,
    Catalogue,
    Detail,
}

impl AppRoute {
    pub fn access(self) -> RouteAccess {
        match self {
            AppRoute::Login => RouteAccess::RequiresNoSession,
            AppRoute::Catalogue | AppRoute::Detail => RouteAccess::RequiresSession,
        }
    }

    pub fn detail_path(id: u32) -> String {
        format!("/pokemon/{}", id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_required() {
        assert_eq!(RouteAccess::RequiresSession.decide(true), GuardDecision::Allow);
        assert_eq!(
            RouteAccess::RequiresSession.decide(false),
            GuardDecision::Redirect("/login")
        );
    }

    #[test]
    fn test_session_forbidden() {
        assert_eq!(RouteAccess::RequiresNoSession.decide(false), GuardDecision::Allow);
        assert_eq!(
            RouteAccess::RequiresNoSession.decide(true),
            GuardDecision::Redirect("/")
        );
    }

    #[test]
    fn test_route_table() {
        assert_eq!(AppRoute::Login.access(), RouteAccess::RequiresNoSession);
        assert_eq!(AppRoute::Catalogue.access(), RouteAccess::RequiresSession);
        assert_eq!(AppRoute::Detail.access(), RouteAccess::RequiresSession);
        assert_eq!(AppRoute::detail_path(25), "/pokemon/25");
    }
}
