//! Route guard
//!
//! Once the session store has been restored, every decision here is a pure
//! function of the current session.

use std::sync::Arc;

use tracing::debug;

use super::route::{Access, Route};
use crate::session::{Session, SessionStore};

/// Result of asking to open a route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// Mount the page
    Render(Route),
    /// Do not mount; go here instead
    Redirect(Route),
}

impl Navigation {
    /// The page that ends up on screen
    pub const fn destination(self) -> Route {
        match self {
            Self::Render(route) | Self::Redirect(route) => route,
        }
    }

    pub const fn is_redirect(self) -> bool {
        matches!(self, Self::Redirect(_))
    }
}

/// Decide whether `route` may render for `session`
///
/// Both denied cases (anonymous on a gated route, non-admin on an admin
/// route) send the user to the landing page.
pub fn guard(route: Route, session: &Session) -> Navigation {
    let allowed = match route.access() {
        Access::Public => true,
        Access::Authenticated => session.is_authenticated(),
        Access::Admin => session.is_admin(),
    };

    if allowed {
        Navigation::Render(route)
    } else {
        debug!(route = %route, "navigation denied by route guard");
        Navigation::Redirect(Route::Home)
    }
}

/// Path-level navigation over a shared session store
#[derive(Clone)]
pub struct Router {
    session: Arc<SessionStore>,
}

impl Router {
    pub fn new(session: Arc<SessionStore>) -> Self {
        Self { session }
    }

    /// Resolve `path` and apply the guard; unknown paths go home
    pub fn navigate(&self, path: &str) -> Navigation {
        match Route::from_path(path) {
            Some(route) => self.open(route),
            None => {
                debug!(path, "unmatched path");
                Navigation::Redirect(Route::Home)
            }
        }
    }

    /// Apply the guard to a known route
    pub fn open(&self, route: Route) -> Navigation {
        guard(route, &self.session.snapshot())
    }
}

#[cfg(test)]
mod tests {
    use euindico_domain::SessionUser;

    use super::*;

    fn signed_in(is_admin: bool) -> Session {
        let user = SessionUser { username: "a@b.com".into(), name: "A".into(), is_admin };
        Session::authenticated(user, "t1")
    }

    #[test]
    fn public_routes_always_render() {
        for route in [Route::Home, Route::Login, Route::Register] {
            assert_eq!(guard(route, &Session::anonymous()), Navigation::Render(route));
        }
    }

    #[test]
    fn anonymous_user_is_sent_home_from_search() {
        assert_eq!(guard(Route::Search, &Session::anonymous()), Navigation::Redirect(Route::Home));
    }

    #[test]
    fn professions_denied_to_non_admins() {
        let home = Navigation::Redirect(Route::Home);
        assert_eq!(guard(Route::Professions, &Session::anonymous()), home);
        assert_eq!(guard(Route::Professions, &signed_in(false)), home);
        assert_eq!(
            guard(Route::Professions, &signed_in(true)),
            Navigation::Render(Route::Professions)
        );
    }

    #[test]
    fn authenticated_user_reaches_gated_pages() {
        let session = signed_in(false);
        for route in [Route::Profile, Route::Search, Route::MyProfessions] {
            assert_eq!(guard(route, &session), Navigation::Render(route));
        }
    }
}
