//! The signed-in user's own professions

use std::sync::Arc;

use euindico_common::{ActionKey, ValidationError};
use euindico_domain::constants::messages;
use euindico_domain::{Profession, UserProfession};
use parking_lot::Mutex;
use tracing::warn;

use super::forms::{add_profession_schema, AddProfessionForm};
use super::view::{ActionOutcome, Phase};
use super::{PageContext, Reply};

const ADD: ActionKey = ActionKey::new("my_professions", "add");

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MyProfessionsState {
    pub mine: Vec<UserProfession>,
    pub catalogue: Vec<Profession>,
    pub form: AddProfessionForm,
    pub phase: Phase,
    pub saving: bool,
    pub error: Option<String>,
    pub success: Option<String>,
    pub field_errors: ValidationError,
}

impl MyProfessionsState {
    /// Catalogue entries the user has not linked yet
    pub fn available(&self) -> Vec<Profession> {
        self.catalogue
            .iter()
            .filter(|profession| self.mine.iter().all(|linked| linked.id != profession.id))
            .cloned()
            .collect()
    }
}

#[derive(Clone)]
pub struct MyProfessionsPage {
    ctx: PageContext,
    state: Arc<Mutex<MyProfessionsState>>,
}

impl MyProfessionsPage {
    pub fn new(ctx: PageContext) -> Self {
        Self { ctx, state: Arc::default() }
    }

    /// Load the user's list and the catalogue
    pub async fn mount(&self) -> ActionOutcome {
        let mine = self.reload_mine().await;
        if matches!(mine, ActionOutcome::Detached | ActionOutcome::Redirect(_)) {
            return mine;
        }

        match self.ctx.fetch(self.ctx.api().professions()).await {
            Reply::Data(catalogue) => {
                self.state.lock().catalogue = catalogue;
                mine
            }
            Reply::Detached => ActionOutcome::Detached,
            Reply::Expired => self.ctx.session_expired(),
            Reply::Refused(message) => {
                warn!(message = ?message, "catalogue refused");
                ActionOutcome::Rejected
            }
            Reply::Broken(err) => {
                warn!(error = %err, "failed to load catalogue");
                ActionOutcome::Rejected
            }
        }
    }

    pub fn unmount(&self) {
        self.ctx.unmount();
    }

    pub fn snapshot(&self) -> MyProfessionsState {
        self.state.lock().clone()
    }

    pub fn select(&self, profession_id: i64) {
        self.state.lock().form.profession_id = profession_id;
    }

    /// Re-fetch the user's professions
    pub async fn reload_mine(&self) -> ActionOutcome {
        self.state.lock().phase = Phase::Loading;
        let reply = self.ctx.fetch(self.ctx.api().user_professions()).await;

        let mut state = self.state.lock();
        match reply {
            Reply::Data(mine) => {
                state.mine = mine;
                state.phase = Phase::Succeeded;
                ActionOutcome::Completed
            }
            Reply::Refused(message) => {
                state.phase = Phase::Failed;
                state.error =
                    Some(message.unwrap_or_else(|| messages::MY_PROFESSIONS_LOAD_FAILED.into()));
                ActionOutcome::Rejected
            }
            Reply::Broken(err) => {
                warn!(error = %err, "failed to load user professions");
                state.phase = Phase::Failed;
                state.error = Some(messages::MY_PROFESSIONS_LOAD_FAILED.to_string());
                ActionOutcome::Rejected
            }
            Reply::Expired => {
                drop(state);
                self.ctx.session_expired()
            }
            Reply::Detached => ActionOutcome::Detached,
        }
    }

    /// Link the selected profession; only the user's list is re-fetched, and
    /// only on success
    pub async fn submit(&self) -> ActionOutcome {
        let form = {
            let mut state = self.state.lock();
            if let Err(errors) = add_profession_schema().validate(&state.form) {
                state.field_errors = errors.clone();
                return ActionOutcome::Invalid(errors);
            }
            state.field_errors = ValidationError::new();
            state.form
        };

        let Some(_ticket) = self.ctx.begin(ADD) else {
            return ActionOutcome::Busy;
        };
        {
            let mut state = self.state.lock();
            state.saving = true;
            state.error = None;
            state.success = None;
        }

        let reply = self.ctx.fetch(self.ctx.api().add_user_profession(form.profession_id)).await;
        {
            let mut state = self.state.lock();
            state.saving = false;
            match reply {
                Reply::Data(_) => {
                    state.success = Some(messages::PROFESSION_ADDED.to_string());
                    state.form = AddProfessionForm::default();
                }
                Reply::Refused(message) => {
                    state.error =
                        Some(message.unwrap_or_else(|| messages::PROFESSION_ADD_FAILED.into()));
                    return ActionOutcome::Rejected;
                }
                Reply::Broken(err) => {
                    warn!(error = %err, "failed to add profession");
                    state.error = Some(messages::PROFESSION_ADD_FAILED.to_string());
                    return ActionOutcome::Rejected;
                }
                Reply::Expired => {
                    drop(state);
                    return self.ctx.session_expired();
                }
                Reply::Detached => return ActionOutcome::Detached,
            }
        }

        self.reload_mine().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn available_excludes_linked_professions() {
        let state = MyProfessionsState {
            mine: vec![UserProfession {
                id: 2,
                name: "Eletricista".into(),
                raw_status: "A".into(),
                rating: "5".into(),
            }],
            catalogue: vec![
                Profession { id: 1, name: "Encanador".into() },
                Profession { id: 2, name: "Eletricista".into() },
            ],
            ..MyProfessionsState::default()
        };
        let ids: Vec<i64> = state.available().into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1]);
    }
}
