//! View-state vocabulary shared by the pages

use euindico_common::ValidationError;

use crate::routing::Route;

/// Where a page's last operation stands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

/// What a page operation asks of the shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Done; page state has been updated
    Completed,
    /// The backend refused or the call failed; the message is in page state
    Rejected,
    /// Blocked before any network call
    Invalid(ValidationError),
    /// The same action is already running
    Busy,
    /// The page unmounted before the result arrived; nothing was applied
    Detached,
    /// Navigate away
    Redirect(Route),
}

impl ActionOutcome {
    pub const fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }

    pub const fn redirect(&self) -> Option<Route> {
        match self {
            Self::Redirect(route) => Some(*route),
            _ => None,
        }
    }
}
