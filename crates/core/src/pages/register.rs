//! Sign-up page

use std::sync::Arc;

use euindico_common::{ActionKey, ValidationError};
use euindico_domain::constants::messages;
use euindico_domain::{City, State};
use parking_lot::Mutex;
use tracing::warn;

use super::forms::{register_schema, RegisterForm};
use super::view::{ActionOutcome, Phase};
use super::{PageContext, Reply};
use crate::routing::Route;

const SUBMIT: ActionKey = ActionKey::new("register", "submit");

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterState {
    pub form: RegisterForm,
    pub states: Vec<State>,
    pub cities: Vec<City>,
    pub loading_cities: bool,
    pub phase: Phase,
    pub error: Option<String>,
    pub success: Option<String>,
    pub field_errors: ValidationError,
}

#[derive(Clone)]
pub struct RegisterPage {
    ctx: PageContext,
    state: Arc<Mutex<RegisterState>>,
}

impl RegisterPage {
    pub fn new(ctx: PageContext) -> Self {
        Self { ctx, state: Arc::default() }
    }

    /// Load the states and the cities of the form's initial state
    pub async fn mount(&self) -> ActionOutcome {
        match self.ctx.fetch(self.ctx.api().states()).await {
            Reply::Data(states) => self.state.lock().states = states,
            Reply::Detached => return ActionOutcome::Detached,
            Reply::Expired => return self.ctx.session_expired(),
            Reply::Refused(message) => warn!(message = ?message, "states refused"),
            Reply::Broken(err) => warn!(error = %err, "failed to load states"),
        }

        let uf = self.state.lock().form.state.clone();
        self.select_state(&uf).await
    }

    pub fn unmount(&self) {
        self.ctx.unmount();
    }

    pub fn snapshot(&self) -> RegisterState {
        self.state.lock().clone()
    }

    pub fn edit(&self, f: impl FnOnce(&mut RegisterForm)) {
        f(&mut self.state.lock().form);
    }

    /// Switch state; the city resets and the city list reloads
    pub async fn select_state(&self, uf: &str) -> ActionOutcome {
        {
            let mut state = self.state.lock();
            state.form.state = uf.to_string();
            state.form.city = 0;
            state.loading_cities = true;
        }

        let reply = self.ctx.fetch(self.ctx.api().cities(uf)).await;
        let mut state = self.state.lock();
        state.loading_cities = false;
        match reply {
            Reply::Data(cities) => {
                state.cities = cities;
                ActionOutcome::Completed
            }
            Reply::Detached => ActionOutcome::Detached,
            Reply::Expired => {
                drop(state);
                self.ctx.session_expired()
            }
            Reply::Refused(_) | Reply::Broken(_) => {
                warn!(uf, "failed to load cities");
                state.cities.clear();
                ActionOutcome::Rejected
            }
        }
    }

    /// Validate and send the registration
    ///
    /// On success the shell should show the message and move to the login
    /// page after the register redirect delay.
    pub async fn submit(&self) -> ActionOutcome {
        let registration = {
            let mut state = self.state.lock();
            if let Err(errors) = register_schema().validate(&state.form) {
                state.field_errors = errors.clone();
                return ActionOutcome::Invalid(errors);
            }
            state.field_errors = ValidationError::new();
            state.form.to_registration()
        };

        let Some(_ticket) = self.ctx.begin(SUBMIT) else {
            return ActionOutcome::Busy;
        };
        {
            let mut state = self.state.lock();
            state.phase = Phase::Loading;
            state.error = None;
            state.success = None;
        }

        let reply = self.ctx.fetch(self.ctx.api().register(&registration)).await;
        let mut state = self.state.lock();
        match reply {
            Reply::Data(_) => {
                state.phase = Phase::Succeeded;
                state.success = Some(messages::REGISTER_SUCCESS.to_string());
                ActionOutcome::Redirect(Route::Login)
            }
            Reply::Refused(message) => {
                state.phase = Phase::Failed;
                state.error = Some(message.unwrap_or_else(|| messages::REGISTER_FAILED.into()));
                ActionOutcome::Rejected
            }
            Reply::Broken(err) => {
                warn!(error = %err, "registration request failed");
                state.phase = Phase::Failed;
                state.error = Some(messages::REGISTER_TRANSPORT_FAILED.to_string());
                ActionOutcome::Rejected
            }
            Reply::Expired => {
                state.phase = Phase::Failed;
                drop(state);
                self.ctx.session_expired()
            }
            Reply::Detached => ActionOutcome::Detached,
        }
    }
}
