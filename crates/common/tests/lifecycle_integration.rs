//! Integration tests for page lifecycle primitives

use std::time::Duration;

use euindico_common::lifecycle::{ActionKey, PageScope, SubmissionRegistry};

const SEARCH: ActionKey = ActionKey::new("search", "submit");

/// A submission holding its ticket across an await blocks a double click
#[tokio::test]
async fn test_double_submit_is_rejected_while_in_flight() {
    let registry = SubmissionRegistry::new();
    let scope = PageScope::new();

    let first = registry.try_begin(SEARCH).expect("first submission should start");
    let pending = {
        let scope = scope.clone();
        tokio::spawn(async move {
            let _ticket = first;
            scope.run(tokio::time::sleep(Duration::from_millis(20))).await
        })
    };

    assert!(registry.try_begin(SEARCH).is_none());

    pending.await.expect("task should finish").expect("scope still active");
    assert!(registry.try_begin(SEARCH).is_some());
}

/// Unmounting releases the page without applying the late result
#[tokio::test]
async fn test_unmount_discards_late_result() {
    let scope = PageScope::new();
    let worker = {
        let scope = scope.clone();
        tokio::spawn(async move {
            scope
                .run(async {
                    tokio::time::sleep(Duration::from_millis(20)).await;
                    "late"
                })
                .await
        })
    };

    tokio::task::yield_now().await;
    scope.unmount();

    let outcome = worker.await.expect("task should finish");
    assert_eq!(outcome, None);
    assert_eq!(scope.run(async { "after" }).await, None);
}
