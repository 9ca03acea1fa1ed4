//! Profession catalogue (admin)

use std::sync::Arc;

use euindico_common::{ActionKey, ValidationError};
use euindico_domain::constants::messages;
use euindico_domain::Profession;
use parking_lot::Mutex;
use tracing::warn;

use super::forms::{profession_schema, ProfessionForm};
use super::view::{ActionOutcome, Phase};
use super::{PageContext, Reply};

const CREATE: ActionKey = ActionKey::new("professions", "create");

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfessionsState {
    pub professions: Vec<Profession>,
    pub form: ProfessionForm,
    pub phase: Phase,
    pub saving: bool,
    pub error: Option<String>,
    pub success: Option<String>,
    pub field_errors: ValidationError,
}

#[derive(Clone)]
pub struct ProfessionsPage {
    ctx: PageContext,
    state: Arc<Mutex<ProfessionsState>>,
}

impl ProfessionsPage {
    pub fn new(ctx: PageContext) -> Self {
        Self { ctx, state: Arc::default() }
    }

    pub async fn mount(&self) -> ActionOutcome {
        self.reload().await
    }

    pub fn unmount(&self) {
        self.ctx.unmount();
    }

    pub fn snapshot(&self) -> ProfessionsState {
        self.state.lock().clone()
    }

    pub fn edit(&self, f: impl FnOnce(&mut ProfessionForm)) {
        f(&mut self.state.lock().form);
    }

    /// Re-fetch the catalogue
    pub async fn reload(&self) -> ActionOutcome {
        self.state.lock().phase = Phase::Loading;
        let reply = self.ctx.fetch(self.ctx.api().professions()).await;

        let mut state = self.state.lock();
        match reply {
            Reply::Data(professions) => {
                state.professions = professions;
                state.phase = Phase::Succeeded;
                ActionOutcome::Completed
            }
            Reply::Refused(message) => {
                state.phase = Phase::Failed;
                state.error =
                    Some(message.unwrap_or_else(|| messages::PROFESSIONS_LOAD_FAILED.into()));
                ActionOutcome::Rejected
            }
            Reply::Broken(err) => {
                warn!(error = %err, "failed to load professions");
                state.phase = Phase::Failed;
                state.error = Some(messages::PROFESSIONS_LOAD_FAILED.to_string());
                ActionOutcome::Rejected
            }
            Reply::Expired => {
                drop(state);
                self.ctx.session_expired()
            }
            Reply::Detached => ActionOutcome::Detached,
        }
    }

    /// Add a catalogue entry; on success the form resets and the list reloads
    pub async fn submit(&self) -> ActionOutcome {
        let name = {
            let mut state = self.state.lock();
            if let Err(errors) = profession_schema().validate(&state.form) {
                state.field_errors = errors.clone();
                return ActionOutcome::Invalid(errors);
            }
            state.field_errors = ValidationError::new();
            state.form.name.trim().to_string()
        };

        let Some(_ticket) = self.ctx.begin(CREATE) else {
            return ActionOutcome::Busy;
        };
        {
            let mut state = self.state.lock();
            state.saving = true;
            state.error = None;
            state.success = None;
        }

        let reply = self.ctx.fetch(self.ctx.api().create_profession(&name)).await;
        {
            let mut state = self.state.lock();
            state.saving = false;
            match reply {
                Reply::Data(_) => {
                    state.success = Some(messages::PROFESSION_CREATED.to_string());
                    state.form = ProfessionForm::default();
                }
                Reply::Refused(message) => {
                    state.error =
                        Some(message.unwrap_or_else(|| messages::PROFESSION_CREATE_FAILED.into()));
                    return ActionOutcome::Rejected;
                }
                Reply::Broken(err) => {
                    warn!(error = %err, "failed to create profession");
                    state.error = Some(messages::PROFESSION_CREATE_FAILED.to_string());
                    return ActionOutcome::Rejected;
                }
                Reply::Expired => {
                    drop(state);
                    return self.ctx.session_expired();
                }
                Reply::Detached => return ActionOutcome::Detached,
            }
        }

        self.reload().await
    }
}
