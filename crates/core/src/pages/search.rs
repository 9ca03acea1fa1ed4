//! Professional search and reviews

use std::sync::Arc;

use euindico_common::{ActionKey, ValidationError};
use euindico_domain::constants::messages;
use euindico_domain::{Profession, Professional, Review};
use parking_lot::Mutex;
use tracing::{debug, warn};

use super::forms::{review_schema, search_schema, ReviewForm, SearchForm};
use super::view::{ActionOutcome, Phase};
use super::{PageContext, Reply};

const SEARCH: ActionKey = ActionKey::new("search", "search");
const REVIEW: ActionKey = ActionKey::new("search", "review");

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    pub catalogue: Vec<Profession>,
    pub form: SearchForm,
    pub results: Vec<Professional>,
    pub phase: Phase,
    /// Prompt, empty-result notice, or failure shown above the results
    pub message: Option<String>,
    /// Filters of the last search that reached the backend
    pub last_query: Option<SearchForm>,
    /// Open review dialog
    pub review: Option<ReviewForm>,
    pub submitting_review: bool,
    pub review_error: Option<String>,
    pub review_success: Option<String>,
    pub review_errors: ValidationError,
}

#[derive(Clone)]
pub struct SearchPage {
    ctx: PageContext,
    state: Arc<Mutex<SearchState>>,
}

impl SearchPage {
    /// Opens with the prompt to pick a profession
    pub fn new(ctx: PageContext) -> Self {
        let state = SearchState {
            message: Some(messages::SELECT_PROFESSION.to_string()),
            ..SearchState::default()
        };
        Self { ctx, state: Arc::new(Mutex::new(state)) }
    }

    /// Load the profession catalogue for the filter
    pub async fn mount(&self) -> ActionOutcome {
        let reply = self.ctx.fetch(self.ctx.api().professions()).await;
        let mut state = self.state.lock();
        match reply {
            Reply::Data(catalogue) => {
                state.catalogue = catalogue;
                ActionOutcome::Completed
            }
            Reply::Refused(message) => {
                state.message =
                    Some(message.unwrap_or_else(|| messages::PROFESSIONS_LOAD_FAILED.into()));
                ActionOutcome::Rejected
            }
            Reply::Broken(err) => {
                warn!(error = %err, "failed to load catalogue");
                state.message = Some(messages::PROFESSIONS_LOAD_FAILED.to_string());
                ActionOutcome::Rejected
            }
            Reply::Expired => {
                drop(state);
                self.ctx.session_expired()
            }
            Reply::Detached => ActionOutcome::Detached,
        }
    }

    pub fn unmount(&self) {
        self.ctx.unmount();
    }

    pub fn snapshot(&self) -> SearchState {
        self.state.lock().clone()
    }

    /// Search by profession, optionally narrowed to a city
    ///
    /// Without a profession nothing is sent; the prompt is shown and the
    /// previous results are cleared.
    pub async fn search(&self, profession_id: i64, city_id: Option<i64>) -> ActionOutcome {
        let form = SearchForm { profession_id, city_id: city_id.unwrap_or_default() };
        {
            let mut state = self.state.lock();
            state.form = form;
            if let Err(errors) = search_schema().validate(&form) {
                state.message = errors.message_for("profession_id").map(str::to_string);
                state.results.clear();
                return ActionOutcome::Invalid(errors);
            }
        }

        let Some(_ticket) = self.ctx.begin(SEARCH) else {
            return ActionOutcome::Busy;
        };
        {
            let mut state = self.state.lock();
            state.phase = Phase::Loading;
            state.message = None;
        }

        let reply = self
            .ctx
            .fetch(self.ctx.api().search_professionals(form.profession_id, form.city()))
            .await;

        let mut state = self.state.lock();
        match reply {
            Reply::Data(results) => {
                debug!(count = results.len(), "search returned");
                state.phase = Phase::Succeeded;
                state.message = results
                    .is_empty()
                    .then(|| messages::NO_PROFESSIONALS_FOUND.to_string());
                state.results = results;
                state.last_query = Some(form);
                ActionOutcome::Completed
            }
            Reply::Refused(message) => {
                debug!(?message, "search refused");
                state.phase = Phase::Failed;
                state.results.clear();
                state.message = Some(messages::SEARCH_FAILED.to_string());
                ActionOutcome::Rejected
            }
            Reply::Broken(err) => {
                warn!(error = %err, "search failed");
                state.phase = Phase::Failed;
                state.results.clear();
                state.message = Some(messages::SEARCH_FAILED.to_string());
                ActionOutcome::Rejected
            }
            Reply::Expired => {
                drop(state);
                self.ctx.session_expired()
            }
            Reply::Detached => ActionOutcome::Detached,
        }
    }

    /// Open the review dialog for one result
    pub fn open_review(&self, professional: &Professional) {
        let mut state = self.state.lock();
        state.review = Some(ReviewForm { review: Review::draft_for(professional) });
        state.review_error = None;
        state.review_success = None;
        state.review_errors = ValidationError::new();
    }

    pub fn close_review(&self) {
        self.state.lock().review = None;
    }

    pub fn set_rating(&self, rating: u8) {
        if let Some(form) = self.state.lock().review.as_mut() {
            form.review.rating = rating;
        }
    }

    pub fn set_comment(&self, comment: impl Into<String>) {
        if let Some(form) = self.state.lock().review.as_mut() {
            form.review.comment = comment.into();
        }
    }

    /// Send the open review; on success the dialog closes and the last search
    /// runs again so ratings refresh
    pub async fn submit_review(&self) -> ActionOutcome {
        let review = {
            let mut state = self.state.lock();
            let Some(form) = state.review.clone() else {
                return ActionOutcome::Rejected;
            };
            if let Err(errors) = review_schema().validate(&form) {
                state.review_errors = errors.clone();
                return ActionOutcome::Invalid(errors);
            }
            state.review_errors = ValidationError::new();
            form.review
        };

        let Some(ticket) = self.ctx.begin(REVIEW) else {
            return ActionOutcome::Busy;
        };
        {
            let mut state = self.state.lock();
            state.submitting_review = true;
            state.review_error = None;
            state.review_success = None;
        }

        let reply = self.ctx.fetch(self.ctx.api().create_review(&review)).await;
        drop(ticket);

        let last_query = {
            let mut state = self.state.lock();
            state.submitting_review = false;
            match reply {
                Reply::Data(_) => {
                    state.review_success = Some(messages::REVIEW_SENT.to_string());
                    state.review = None;
                    state.last_query
                }
                Reply::Refused(message) => {
                    state.review_error =
                        Some(message.unwrap_or_else(|| messages::REVIEW_FAILED.into()));
                    return ActionOutcome::Rejected;
                }
                Reply::Broken(err) => {
                    warn!(error = %err, "review submission failed");
                    state.review_error = Some(messages::REVIEW_FAILED.to_string());
                    return ActionOutcome::Rejected;
                }
                Reply::Expired => {
                    drop(state);
                    return self.ctx.session_expired();
                }
                Reply::Detached => return ActionOutcome::Detached,
            }
        };

        let Some(query) = last_query else {
            return ActionOutcome::Completed;
        };
        match self.search(query.profession_id, query.city()).await {
            outcome @ (ActionOutcome::Detached | ActionOutcome::Redirect(_)) => outcome,
            _ => ActionOutcome::Completed,
        }
    }
}
