use serde::{Deserialize, Serialize};

/// Account-deletion notification as delivered by the identity provider.
/// Only the user identifier matters here; any other provider-defined fields
/// in the payload are ignored during deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDeletedEvent {
    pub user_id: String,
}

/// What a single invocation did, mirroring the two log branches. The hosting
/// platform treats both variants as a completed invocation.
#[derive(Debug, Clone, Serialize)]
pub struct CleanupOutcome {
    pub user_id: String,
    pub deleted: bool,
    pub error: Option<String>,
}
