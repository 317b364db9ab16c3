use crate::core::{CleanupOutcome, ProfileStore, UserDeletedEvent};

/// Reacts to account-deletion events by removing the matching profile
/// document. Stateless; one instance is shared across concurrent invocations.
pub struct DeletionReactor<S: ProfileStore> {
    store: S,
}

impl<S: ProfileStore> DeletionReactor<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Handles one deletion event. The delete is attempted exactly once; a
    /// failure is logged and swallowed so the platform always sees the
    /// invocation complete.
    pub async fn handle(&self, event: UserDeletedEvent) -> CleanupOutcome {
        let user_id = event.user_id;

        match self.store.delete_profile(&user_id).await {
            Ok(()) => {
                tracing::info!(
                    event = "user_deleted_cleanup",
                    user_id = %user_id,
                    outcome = "deleted",
                    "Successfully deleted user {} from Firestore",
                    user_id
                );
                CleanupOutcome {
                    user_id,
                    deleted: true,
                    error: None,
                }
            }
            Err(e) => {
                tracing::error!(
                    event = "user_deleted_cleanup",
                    user_id = %user_id,
                    outcome = "failed",
                    error = %e,
                    "Error deleting user {} from Firestore: {}",
                    user_id,
                    e
                );
                CleanupOutcome {
                    user_id,
                    deleted: false,
                    error: Some(e.to_string()),
                }
            }
        }
    }
}
