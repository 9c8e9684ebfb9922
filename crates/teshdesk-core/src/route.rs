//! Routes and the session guard
//!
//! The guard is a pure function of the session state and the requested route,
//! so it can decide before any protected view mounts or fetches.

use std::fmt;

/// Every page the console can show.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    ForgetPassword,
    MessageSent,
    ResetPassword,
    /// `/`, which forwards to the dashboard.
    Home,
    Dashboard,
    Users,
    AddUser,
    EditUser(String),
    NotFound,
}

impl Route {
    /// Match a URL path. Trailing slashes are ignored.
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Self::Home,
            ["login"] => Self::Login,
            ["forget-password"] => Self::ForgetPassword,
            ["message-sent"] => Self::MessageSent,
            ["reset-password"] => Self::ResetPassword,
            ["dashboard"] => Self::Dashboard,
            ["users"] => Self::Users,
            ["users", "add"] => Self::AddUser,
            ["users", "edit", id] => Self::EditUser((*id).to_string()),
            _ => Self::NotFound,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Self::Login => "/login".to_string(),
            Self::ForgetPassword => "/forget-password".to_string(),
            Self::MessageSent => "/message-sent".to_string(),
            Self::ResetPassword => "/reset-password".to_string(),
            Self::Home => "/".to_string(),
            Self::Dashboard => "/dashboard".to_string(),
            Self::Users => "/users".to_string(),
            Self::AddUser => "/users/add".to_string(),
            Self::EditUser(id) => format!("/users/edit/{id}"),
            Self::NotFound => "/404".to_string(),
        }
    }

    /// Whether the route needs an authenticated session.
    pub fn is_protected(&self) -> bool {
        matches!(
            self,
            Self::Home | Self::Dashboard | Self::Users | Self::AddUser | Self::EditUser(_)
        )
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Outcome of the route guard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    Redirect(Route),
}

/// Decide whether `route` renders for the given session state.
pub fn guard(authenticated: bool, route: &Route) -> GuardDecision {
    match route {
        Route::NotFound if !authenticated => GuardDecision::Redirect(Route::Login),
        r if r.is_protected() && !authenticated => GuardDecision::Redirect(Route::Login),
        Route::Home => GuardDecision::Redirect(Route::Dashboard),
        _ => GuardDecision::Render,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_paths() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse("/users/"), Route::Users);
        assert_eq!(Route::parse("/users/add"), Route::AddUser);
        assert_eq!(Route::parse("/users/edit/abc?x=1"), Route::EditUser("abc".into()));
        assert_eq!(Route::parse("/users/edit"), Route::NotFound);
        assert_eq!(Route::parse("/nope"), Route::NotFound);
    }

    #[test]
    fn test_path_round_trip() {
        for route in [
            Route::Login,
            Route::ForgetPassword,
            Route::MessageSent,
            Route::ResetPassword,
            Route::Dashboard,
            Route::Users,
            Route::AddUser,
            Route::EditUser("42".into()),
        ] {
            assert_eq!(Route::parse(&route.path()), route);
        }
    }

    #[test]
    fn test_protected_routes_redirect_when_signed_out() {
        for path in ["/", "/dashboard", "/users", "/users/add", "/users/edit/1"] {
            assert_eq!(
                guard(false, &Route::parse(path)),
                GuardDecision::Redirect(Route::Login),
                "{path}"
            );
        }
    }

    #[test]
    fn test_public_routes_always_render() {
        for path in ["/login", "/forget-password", "/message-sent", "/reset-password"] {
            assert_eq!(guard(false, &Route::parse(path)), GuardDecision::Render);
            assert_eq!(guard(true, &Route::parse(path)), GuardDecision::Render);
        }
    }

    #[test]
    fn test_home_and_unknown() {
        assert_eq!(
            guard(true, &Route::Home),
            GuardDecision::Redirect(Route::Dashboard)
        );
        assert_eq!(guard(true, &Route::NotFound), GuardDecision::Render);
        assert_eq!(
            guard(false, &Route::NotFound),
            GuardDecision::Redirect(Route::Login)
        );
    }
}
