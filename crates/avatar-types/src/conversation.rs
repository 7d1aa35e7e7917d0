use serde::{Deserialize, Serialize};

/// A conversation row in the remote store.
///
/// Pure bookkeeping: created at session-start boundaries, its id is never
/// read back by the session controller. The store's column for the owner
/// is `user_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationRecord {
    pub id: String,
    #[serde(rename = "user_id")]
    pub owner_id: String,
    pub title: String,
    pub created_at: String,
    pub updated_at: String,
}

impl ConversationRecord {
    /// Build a record locally; the REST store returns server-generated rows
    /// instead.
    pub fn new(owner_id: impl Into<String>, title: impl Into<String>) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            owner_id: owner_id.into(),
            title: title.into(),
            created_at: now.clone(),
            updated_at: now,
        }
    }
}
