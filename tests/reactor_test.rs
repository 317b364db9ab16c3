use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use auth_cleanup::domain::ports::ProfileStore;
use auth_cleanup::utils::error::{CleanupError, Result};
use auth_cleanup::{DeletionReactor, UserDeletedEvent};

struct RecordingStore {
    deletes: Arc<Mutex<Vec<String>>>,
}

impl ProfileStore for RecordingStore {
    async fn delete_profile(&self, user_id: &str) -> Result<()> {
        self.deletes.lock().unwrap().push(user_id.to_string());
        Ok(())
    }
}

struct FailingStore {
    attempts: Arc<AtomicUsize>,
}

impl ProfileStore for FailingStore {
    async fn delete_profile(&self, _user_id: &str) -> Result<()> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(CleanupError::StoreError {
            status: 403,
            detail: "PERMISSION_DENIED: Missing or insufficient permissions.".to_string(),
        })
    }
}

fn event(user_id: &str) -> UserDeletedEvent {
    UserDeletedEvent {
        user_id: user_id.to_string(),
    }
}

#[tokio::test]
async fn one_event_issues_exactly_one_delete() {
    let deletes = Arc::new(Mutex::new(Vec::new()));
    let reactor = DeletionReactor::new(RecordingStore {
        deletes: deletes.clone(),
    });

    let outcome = reactor.handle(event("abc123")).await;

    assert!(outcome.deleted);
    assert_eq!(outcome.user_id, "abc123");
    assert!(outcome.error.is_none());
    assert_eq!(*deletes.lock().unwrap(), vec!["abc123".to_string()]);
}

#[tokio::test]
async fn failure_is_swallowed_and_not_retried() {
    let attempts = Arc::new(AtomicUsize::new(0));
    let reactor = DeletionReactor::new(FailingStore {
        attempts: attempts.clone(),
    });

    let outcome = reactor.handle(event("abc123")).await;

    assert!(!outcome.deleted);
    assert_eq!(outcome.user_id, "abc123");
    let detail = outcome.error.expect("failure detail should be reported");
    assert!(detail.contains("PERMISSION_DENIED"));
    assert_eq!(attempts.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn concurrent_events_for_distinct_users_are_independent() {
    let deletes = Arc::new(Mutex::new(Vec::new()));
    let reactor = DeletionReactor::new(RecordingStore {
        deletes: deletes.clone(),
    });

    let (a, b) = tokio::join!(
        reactor.handle(event("user-1")),
        reactor.handle(event("user-2"))
    );

    assert!(a.deleted);
    assert!(b.deleted);
    assert_eq!(a.user_id, "user-1");
    assert_eq!(b.user_id, "user-2");

    let mut recorded = deletes.lock().unwrap().clone();
    recorded.sort();
    assert_eq!(recorded, vec!["user-1".to_string(), "user-2".to_string()]);
}

#[tokio::test]
async fn provider_fields_beyond_user_id_are_ignored() {
    let payload = serde_json::json!({
        "user_id": "abc123",
        "email": "someone@example.com",
        "provider": "password",
        "deleted_at": "2024-01-01T00:00:00Z"
    });

    let event: UserDeletedEvent = serde_json::from_value(payload).unwrap();
    assert_eq!(event.user_id, "abc123");

    let deletes = Arc::new(Mutex::new(Vec::new()));
    let reactor = DeletionReactor::new(RecordingStore {
        deletes: deletes.clone(),
    });
    let outcome = reactor.handle(event).await;

    assert!(outcome.deleted);
    assert_eq!(*deletes.lock().unwrap(), vec!["abc123".to_string()]);
}
