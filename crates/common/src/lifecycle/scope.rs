// Page scope - cancellation-backed liveness token
use std::future::Future;

use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Liveness of a mounted page
///
/// Cloning shares the same underlying token, so any clone can observe or
/// trigger teardown.
#[derive(Debug, Clone, Default)]
pub struct PageScope {
    token: CancellationToken,
}

impl PageScope {
    /// Create an active scope
    pub fn new() -> Self {
        Self { token: CancellationToken::new() }
    }

    /// Whether the page is still mounted
    pub fn is_active(&self) -> bool {
        !self.token.is_cancelled()
    }

    /// Tear the page down; results of calls still in flight are discarded
    pub fn unmount(&self) {
        if self.is_active() {
            debug!("page scope unmounted");
        }
        self.token.cancel();
    }

    /// Drive `fut` to completion and hand back its output only if the page
    /// is still mounted
    ///
    /// Nothing is started once the scope is gone. A call already under way
    /// is not aborted by unmounting, so a request that reached the backend
    /// still completes there; its result is returned as `None`.
    pub async fn run<F>(&self, fut: F) -> Option<F::Output>
    where
        F: Future,
    {
        if !self.is_active() {
            return None;
        }

        let output = fut.await;
        if self.is_active() {
            Some(output)
        } else {
            debug!("discarding result for unmounted page");
            None
        }
    }
}
