//! Route-guarded page commands

use std::time::Instant;

use euindico_core::pages::SearchState;
use euindico_core::{ActionOutcome, Navigation, Route};
use euindico_domain::Profession;

use crate::context::AppContext;
use crate::utils::logging::log_command_execution;

/// Why a page command did not produce data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageRefusal {
    /// The guard sent the user elsewhere
    Redirected(Route),
    /// The page ran and shows this message
    Message(String),
}

impl std::fmt::Display for PageRefusal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Redirected(route) => write!(f, "redirected to {route}"),
            Self::Message(message) => f.write_str(message),
        }
    }
}

/// Resolve a path through the route guard
pub fn open(ctx: &AppContext, path: &str) -> Navigation {
    let start = Instant::now();
    let navigation = ctx.router().navigate(path);
    let label = if navigation.is_redirect() { "redirect" } else { "render" };
    log_command_execution("navigation::open", start.elapsed(), true, label);
    navigation
}

fn enter(ctx: &AppContext, route: Route) -> Result<(), PageRefusal> {
    match ctx.router().open(route) {
        Navigation::Render(_) => Ok(()),
        Navigation::Redirect(to) => Err(PageRefusal::Redirected(to)),
    }
}

fn refusal(outcome: ActionOutcome, message: Option<String>) -> PageRefusal {
    match outcome.redirect() {
        Some(route) => PageRefusal::Redirected(route),
        None => PageRefusal::Message(message.unwrap_or_else(|| format!("{outcome:?}"))),
    }
}

/// The profession catalogue as offered by the search filter
pub async fn professions(ctx: &AppContext) -> Result<Vec<Profession>, PageRefusal> {
    let command_name = "navigation::professions";
    let start = Instant::now();

    if let Err(refused) = enter(ctx, Route::Search) {
        log_command_execution(command_name, start.elapsed(), false, "guarded");
        return Err(refused);
    }

    let page = ctx.search_page();
    let outcome = page.mount().await;
    let state = page.snapshot();
    page.unmount();

    let result = if outcome.is_completed() {
        Ok(state.catalogue)
    } else {
        Err(refusal(outcome, state.message))
    };
    log_command_execution(command_name, start.elapsed(), result.is_ok(), label(&result));
    result
}

/// Search professionals; an empty result carries the page's notice
pub async fn search(
    ctx: &AppContext,
    profession_id: i64,
    city_id: Option<i64>,
) -> Result<SearchState, PageRefusal> {
    let command_name = "navigation::search";
    let start = Instant::now();

    if let Err(refused) = enter(ctx, Route::Search) {
        log_command_execution(command_name, start.elapsed(), false, "guarded");
        return Err(refused);
    }

    let page = ctx.search_page();
    let outcome = page.search(profession_id, city_id).await;
    let state = page.snapshot();
    page.unmount();

    let result =
        if outcome.is_completed() { Ok(state) } else { Err(refusal(outcome, state.message)) };
    log_command_execution(command_name, start.elapsed(), result.is_ok(), label(&result));
    result
}

fn label<T>(result: &Result<T, PageRefusal>) -> &'static str {
    match result {
        Ok(_) => "ok",
        Err(PageRefusal::Redirected(_)) => "redirected",
        Err(PageRefusal::Message(_)) => "rejected",
    }
}
