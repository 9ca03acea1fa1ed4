//! Session commands

use std::time::Instant;

use euindico_core::routing::{greeting, menu, MenuItem};
use euindico_core::ActionOutcome;
use euindico_domain::constants::messages;
use euindico_domain::SessionUser;
use tracing::info;

use crate::context::AppContext;
use crate::utils::logging::log_command_execution;

/// Sign in through the login page.
///
/// An already signed-in session is returned as is.
pub async fn login(ctx: &AppContext, username: &str, password: &str) -> Result<SessionUser, String> {
    let command_name = "auth::login";
    let start = Instant::now();

    let page = ctx.login_page();
    if page.mount().is_some() {
        page.unmount();
        log_command_execution(command_name, start.elapsed(), true, "already_signed_in");
        return ctx.session.user().ok_or_else(|| messages::LOGIN_FAILED.to_string());
    }

    page.edit(|form| {
        form.username = username.to_string();
        form.password = password.to_string();
    });
    let outcome = page.submit().await;
    let state = page.snapshot();
    page.unmount();

    let result = match outcome {
        ActionOutcome::Redirect(_) => {
            ctx.session.user().ok_or_else(|| messages::LOGIN_FAILED.to_string())
        }
        ActionOutcome::Invalid(errors) => Err(errors.to_string()),
        _ => Err(state.error.unwrap_or_else(|| messages::LOGIN_FAILED.to_string())),
    };

    let label = if result.is_ok() { "ok" } else { "rejected" };
    log_command_execution(command_name, start.elapsed(), result.is_ok(), label);
    result
}

/// Sign out; local state is gone before the backend is told
pub async fn logout(ctx: &AppContext) {
    let command_name = "auth::logout";
    let start = Instant::now();

    let was_signed_in = ctx.session.is_authenticated();
    ctx.session.logout().await;

    info!(was_signed_in, "signed out");
    log_command_execution(command_name, start.elapsed(), true, "ok");
}

/// Who the client is signed in as, and what the menu offers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Whoami {
    pub user: Option<SessionUser>,
    pub greeting: Option<String>,
    pub menu: Vec<MenuItem>,
}

pub fn whoami(ctx: &AppContext) -> Whoami {
    let session = ctx.session.snapshot();
    Whoami { user: session.user().cloned(), greeting: greeting(&session), menu: menu(&session) }
}
