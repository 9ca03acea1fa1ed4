//! Route table

use std::fmt;

/// Who may open a route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Access {
    Public,
    Authenticated,
    Admin,
}

/// Every page of the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Login,
    Register,
    Profile,
    Search,
    Professions,
    MyProfessions,
}

impl Route {
    pub const ALL: [Self; 7] = [
        Self::Home,
        Self::Login,
        Self::Register,
        Self::Profile,
        Self::Search,
        Self::Professions,
        Self::MyProfessions,
    ];

    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::Register => "/cadastro",
            Self::Profile => "/perfil",
            Self::Search => "/buscar",
            Self::Professions => "/profissoes",
            Self::MyProfessions => "/minhas-profissoes",
        }
    }

    /// Resolve a path; a trailing slash is tolerated, query strings are not
    /// part of the route
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Self::ALL.into_iter().find(|route| route.path() == normalized)
    }

    pub const fn access(self) -> Access {
        match self {
            Self::Home | Self::Login | Self::Register => Access::Public,
            Self::Profile | Self::Search | Self::MyProfessions => Access::Authenticated,
            Self::Professions => Access::Admin,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_round_trip() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
    }

    #[test]
    fn from_path_normalizes() {
        assert_eq!(Route::from_path("/buscar/"), Some(Route::Search));
        assert_eq!(Route::from_path("/perfil?tab=1"), Some(Route::Profile));
        assert_eq!(Route::from_path(""), Some(Route::Home));
        assert_eq!(Route::from_path("/nao-existe"), None);
    }

    #[test]
    fn professions_is_admin_only() {
        assert_eq!(Route::Professions.access(), Access::Admin);
        assert_eq!(Route::MyProfessions.access(), Access::Authenticated);
        assert_eq!(Route::Register.access(), Access::Public);
    }
}
