//! Navigation menu entries visible for a session

use super::route::Route;
use crate::session::Session;

/// One entry of the top navigation bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub label: &'static str,
    pub route: Route,
}

impl MenuItem {
    const fn new(label: &'static str, route: Route) -> Self {
        Self { label, route }
    }
}

/// Entries in display order
pub fn menu(session: &Session) -> Vec<MenuItem> {
    let mut items = vec![MenuItem::new("Início", Route::Home)];

    if session.is_authenticated() {
        items.push(MenuItem::new("Meu Perfil", Route::Profile));
        items.push(MenuItem::new("Buscar Profissional", Route::Search));
        items.push(MenuItem::new("Minhas Profissões", Route::MyProfessions));
        if session.is_admin() {
            items.push(MenuItem::new("Profissões", Route::Professions));
        }
    } else {
        items.push(MenuItem::new("Entrar", Route::Login));
        items.push(MenuItem::new("Cadastrar", Route::Register));
    }

    items
}

/// `"Olá, {name}"`, with an admin marker; `None` when anonymous
pub fn greeting(session: &Session) -> Option<String> {
    let user = session.user()?;
    let suffix = if user.is_admin { " (ADMIN)" } else { "" };
    Some(format!("Olá, {}{suffix}", user.name))
}
