//! Profile page: an editable copy of the backend-owned profile

use std::sync::Arc;

use euindico_common::{ActionKey, ValidationError};
use euindico_domain::constants::messages;
use euindico_domain::{City, State};
use parking_lot::Mutex;
use tracing::warn;

use super::forms::{profile_schema, ProfileForm};
use super::view::{ActionOutcome, Phase};
use super::{PageContext, Reply};

const SUBMIT: ActionKey = ActionKey::new("profile", "submit");

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileState {
    pub form: ProfileForm,
    pub states: Vec<State>,
    pub cities: Vec<City>,
    pub loading_cities: bool,
    pub phase: Phase,
    /// A submission is outstanding
    pub saving: bool,
    pub error: Option<String>,
    pub success: Option<String>,
    pub field_errors: ValidationError,
}

#[derive(Clone)]
pub struct ProfilePage {
    ctx: PageContext,
    state: Arc<Mutex<ProfileState>>,
}

impl ProfilePage {
    pub fn new(ctx: PageContext) -> Self {
        Self { ctx, state: Arc::default() }
    }

    /// Load the states, the profile, and the cities of the profile's state
    pub async fn mount(&self) -> ActionOutcome {
        match self.ctx.fetch(self.ctx.api().states()).await {
            Reply::Data(states) => self.state.lock().states = states,
            Reply::Detached => return ActionOutcome::Detached,
            Reply::Expired => return self.ctx.session_expired(),
            Reply::Refused(message) => warn!(message = ?message, "states refused"),
            Reply::Broken(err) => warn!(error = %err, "failed to load states"),
        }

        self.state.lock().phase = Phase::Loading;
        let reply = self.ctx.fetch(self.ctx.api().profile()).await;
        let uf = {
            let mut state = self.state.lock();
            match reply {
                Reply::Data(profile) => {
                    state.phase = Phase::Succeeded;
                    state.form = ProfileForm { profile };
                    state.form.profile.state.clone()
                }
                Reply::Refused(message) => {
                    state.phase = Phase::Failed;
                    state.error =
                        Some(message.unwrap_or_else(|| messages::PROFILE_LOAD_FAILED.into()));
                    return ActionOutcome::Rejected;
                }
                Reply::Broken(err) => {
                    warn!(error = %err, "failed to load profile");
                    state.phase = Phase::Failed;
                    state.error = Some(messages::PROFILE_LOAD_FAILED.to_string());
                    return ActionOutcome::Rejected;
                }
                Reply::Expired => {
                    drop(state);
                    return self.ctx.session_expired();
                }
                Reply::Detached => return ActionOutcome::Detached,
            }
        };

        if uf.is_empty() {
            return ActionOutcome::Completed;
        }
        self.load_cities(&uf).await
    }

    pub fn unmount(&self) {
        self.ctx.unmount();
    }

    pub fn snapshot(&self) -> ProfileState {
        self.state.lock().clone()
    }

    /// Edit the profile copy; email and tax id are not sent on save
    pub fn edit(&self, f: impl FnOnce(&mut ProfileForm)) {
        f(&mut self.state.lock().form);
    }

    /// Switch state; the city resets and the city list reloads
    pub async fn select_state(&self, uf: &str) -> ActionOutcome {
        {
            let mut state = self.state.lock();
            state.form.profile.state = uf.to_string();
            state.form.profile.city = 0;
        }
        self.load_cities(uf).await
    }

    async fn load_cities(&self, uf: &str) -> ActionOutcome {
        self.state.lock().loading_cities = true;
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

    /// Validate and save the mutable profile fields
    pub async fn submit(&self) -> ActionOutcome {
        let update = {
            let mut state = self.state.lock();
            if let Err(errors) = profile_schema().validate(&state.form) {
                state.field_errors = errors.clone();
                return ActionOutcome::Invalid(errors);
            }
            state.field_errors = ValidationError::new();
            state.form.to_update()
        };

        let Some(_ticket) = self.ctx.begin(SUBMIT) else {
            return ActionOutcome::Busy;
        };
        {
            let mut state = self.state.lock();
            state.saving = true;
            state.error = None;
            state.success = None;
        }

        let reply = self.ctx.fetch(self.ctx.api().update_profile(&update)).await;
        let mut state = self.state.lock();
        state.saving = false;
        match reply {
            Reply::Data(_) => {
                state.success = Some(messages::PROFILE_UPDATED.to_string());
                ActionOutcome::Completed
            }
            Reply::Refused(message) => {
                state.error =
                    Some(message.unwrap_or_else(|| messages::PROFILE_UPDATE_FAILED.into()));
                ActionOutcome::Rejected
            }
            Reply::Broken(err) => {
                warn!(error = %err, "profile update failed");
                state.error = Some(messages::PROFILE_UPDATE_FAILED.to_string());
                ActionOutcome::Rejected
            }
            Reply::Expired => {
                drop(state);
                self.ctx.session_expired()
            }
            Reply::Detached => ActionOutcome::Detached,
        }
    }
}
