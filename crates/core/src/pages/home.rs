//! Landing page

use std::sync::Arc;

use crate::routing::{greeting, guard, Navigation, Route};
use crate::session::{Session, SessionStore};

/// A feature highlighted on the landing page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureCard {
    pub title: &'static str,
    pub description: &'static str,
    pub route: Route,
}

const FEATURES: [FeatureCard; 3] = [
    FeatureCard {
        title: "Buscar Profissionais",
        description: "Encontre profissionais qualificados na sua região",
        route: Route::Search,
    },
    FeatureCard {
        title: "Cadastrar Profissões",
        description: "Informe as profissões que você oferece",
        route: Route::MyProfessions,
    },
    FeatureCard {
        title: "Criar Conta",
        description: "Cadastre-se para indicar e ser indicado",
        route: Route::Register,
    },
];

/// What the landing page shows for one session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeView {
    pub greeting: Option<String>,
    pub features: Vec<FeatureCard>,
    /// Login / register calls to action
    pub show_auth_actions: bool,
}

impl HomeView {
    pub fn for_session(session: &Session) -> Self {
        let authenticated = session.is_authenticated();
        let features = FEATURES
            .iter()
            .filter(|card| match card.route {
                Route::Register => !authenticated,
                route => matches!(guard(route, session), Navigation::Render(_)),
            })
            .cloned()
            .collect();

        Self { greeting: greeting(session), features, show_auth_actions: !authenticated }
    }
}

/// Landing page controller; it makes no backend calls
#[derive(Clone)]
pub struct HomePage {
    session: Arc<SessionStore>,
}

impl HomePage {
    pub fn new(session: Arc<SessionStore>) -> Self {
        Self { session }
    }

    pub fn view(&self) -> HomeView {
        HomeView::for_session(&self.session.snapshot())
    }

    /// Follow a feature card through the guard
    pub fn open(&self, card: &FeatureCard) -> Navigation {
        guard(card.route, &self.session.snapshot())
    }
}
