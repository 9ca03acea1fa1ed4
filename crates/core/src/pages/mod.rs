//! Page controllers
//!
//! Each page owns its view state behind a shared lock and talks to the
//! backend through a [`PageContext`]. Results are applied only while the
//! page's scope is still mounted, and submissions are keyed per page and
//! action so a second click while one is in flight is turned away.

pub mod forms;
pub mod home;
pub mod login;
pub mod my_professions;
pub mod professions;
pub mod profile;
pub mod register;
pub mod search;
pub mod view;

use std::future::Future;
use std::sync::Arc;

use euindico_common::{ActionKey, PageScope, SubmissionRegistry, SubmissionTicket};
use euindico_domain::{Envelope, EuIndicoError, Result};
use tracing::{debug, warn};

pub use home::{FeatureCard, HomePage, HomeView};
pub use login::{LoginPage, LoginState};
pub use my_professions::{MyProfessionsPage, MyProfessionsState};
pub use professions::{ProfessionsPage, ProfessionsState};
pub use profile::{ProfilePage, ProfileState};
pub use register::{RegisterPage, RegisterState};
pub use search::{SearchPage, SearchState};
pub use view::{ActionOutcome, Phase};

use crate::directory::DirectoryApi;
use crate::routing::Route;
use crate::session::SessionStore;

/// How one backend call ended, from a page's point of view
#[derive(Debug)]
pub(crate) enum Reply<T> {
    /// `success: true` with its payload
    Data(T),
    /// `success: false`, with the backend's message if it sent one
    Refused(Option<String>),
    /// Transport failure
    Broken(EuIndicoError),
    /// The stored session was rejected
    Expired,
    /// The page unmounted before the call resolved
    Detached,
}

/// Dependencies and liveness of one mounted page
///
/// Build a fresh context per mount: cloning shares the scope, so unmounting
/// any clone tears the page down.
#[derive(Clone)]
pub struct PageContext {
    api: Arc<dyn DirectoryApi>,
    session: Arc<SessionStore>,
    submissions: SubmissionRegistry,
    scope: PageScope,
}

impl PageContext {
    pub fn new(
        api: Arc<dyn DirectoryApi>,
        session: Arc<SessionStore>,
        submissions: SubmissionRegistry,
    ) -> Self {
        Self { api, session, submissions, scope: PageScope::new() }
    }

    pub fn api(&self) -> &Arc<dyn DirectoryApi> {
        &self.api
    }

    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    pub fn scope(&self) -> &PageScope {
        &self.scope
    }

    pub fn is_mounted(&self) -> bool {
        self.scope.is_active()
    }

    /// Tear the page down; pending calls are dropped and never applied
    pub fn unmount(&self) {
        self.scope.unmount();
    }

    pub(crate) fn begin(&self, key: ActionKey) -> Option<SubmissionTicket> {
        let ticket = self.submissions.try_begin(key);
        if ticket.is_none() {
            debug!(action = %key, "submission already in flight");
        }
        ticket
    }

    /// Run a backend call inside the page scope and classify the result
    pub(crate) async fn fetch<T, F>(&self, call: F) -> Reply<T>
    where
        F: Future<Output = Result<Envelope<T>>>,
    {
        match self.scope.run(call).await {
            None => Reply::Detached,
            Some(Ok(Envelope::Success(data))) => Reply::Data(data),
            Some(Ok(Envelope::Failure { message })) => Reply::Refused(message),
            Some(Err(EuIndicoError::SessionExpired)) => Reply::Expired,
            Some(Err(err)) => Reply::Broken(err),
        }
    }

    /// Clear the rejected session and send the user to sign in again
    pub(crate) fn session_expired(&self) -> ActionOutcome {
        warn!("backend rejected the stored session");
        self.session.expire();
        ActionOutcome::Redirect(Route::Login)
    }
}
