//! Login page

use std::sync::Arc;

use euindico_common::{ActionKey, ValidationError};
use euindico_domain::constants::messages;
use parking_lot::Mutex;

use super::forms::{login_schema, LoginForm};
use super::view::{ActionOutcome, Phase};
use super::PageContext;
use crate::routing::Route;

const SUBMIT: ActionKey = ActionKey::new("login", "submit");

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginState {
    pub form: LoginForm,
    pub phase: Phase,
    pub error: Option<String>,
    pub field_errors: ValidationError,
}

#[derive(Clone)]
pub struct LoginPage {
    ctx: PageContext,
    state: Arc<Mutex<LoginState>>,
}

impl LoginPage {
    pub fn new(ctx: PageContext) -> Self {
        Self { ctx, state: Arc::default() }
    }

    /// Signed-in users have nothing to do here
    pub fn mount(&self) -> Option<Route> {
        self.ctx.session().is_authenticated().then_some(Route::Home)
    }

    pub fn unmount(&self) {
        self.ctx.unmount();
    }

    pub fn snapshot(&self) -> LoginState {
        self.state.lock().clone()
    }

    pub fn edit(&self, f: impl FnOnce(&mut LoginForm)) {
        f(&mut self.state.lock().form);
    }

    pub async fn submit(&self) -> ActionOutcome {
        let form = {
            let mut state = self.state.lock();
            if let Err(errors) = login_schema().validate(&state.form) {
                state.field_errors = errors.clone();
                return ActionOutcome::Invalid(errors);
            }
            state.field_errors = ValidationError::new();
            state.form.clone()
        };

        let Some(_ticket) = self.ctx.begin(SUBMIT) else {
            return ActionOutcome::Busy;
        };
        {
            let mut state = self.state.lock();
            state.phase = Phase::Loading;
            state.error = None;
        }

        let session = Arc::clone(self.ctx.session());
        let Some(logged_in) =
            self.ctx.scope().run(session.login(&form.username, &form.password)).await
        else {
            return ActionOutcome::Detached;
        };

        let mut state = self.state.lock();
        if logged_in {
            state.phase = Phase::Succeeded;
            ActionOutcome::Redirect(Route::Home)
        } else {
            state.phase = Phase::Failed;
            state.error = Some(messages::LOGIN_FAILED.to_string());
            ActionOutcome::Rejected
        }
    }
}
