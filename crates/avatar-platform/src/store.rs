//! Conversation store adapter — PostgREST-style insert.
//!
//! The client only ever creates fresh rows at session boundaries; it never
//! reads conversation history back.

use async_trait::async_trait;
use gloo_net::http::Request;
use serde::Serialize;

use avatar_core::ports::ConversationStorePort;
use avatar_types::{config::ServiceConfig, conversation::ConversationRecord, AvatarError, Result};

use crate::net::{error_from_body, with_deadline};

pub struct RestConversationStore {
    config: ServiceConfig,
}

impl RestConversationStore {
    pub fn new(config: ServiceConfig) -> Self {
        Self { config }
    }

    fn endpoint(&self) -> String {
        format!("{}/rest/v1/conversations", self.config.base_url)
    }
}

#[derive(Serialize)]
struct NewConversation<'a> {
    #[serde(rename = "user_id")]
    owner_id: &'a str,
    title: &'a str,
}

#[async_trait(?Send)]
impl ConversationStorePort for RestConversationStore {
    async fn create_conversation(
        &self,
        owner_id: &str,
        title: &str,
    ) -> Result<ConversationRecord> {
        let url = self.endpoint();
        with_deadline(
            async {
                let response = Request::post(&url)
                    .header("Content-Type", "application/json")
                    .header("apikey", &self.config.anon_key)
                    .header("Authorization", &format!("Bearer {}", self.config.anon_key))
                    .header("Prefer", "return=representation")
                    .json(&NewConversation { owner_id, title })
                    .map_err(|e| AvatarError::Network(e.to_string()))?
                    .send()
                    .await
                    .map_err(|e| AvatarError::Network(e.to_string()))?;

                let status = response.status();
                let status_text = response.status_text();
                let body = response.text().await.unwrap_or_default();

                if !response.ok() {
                    return Err(AvatarError::Store(error_from_body(
                        status,
                        &status_text,
                        &body,
                    )));
                }

                // PostgREST returns the inserted rows as an array.
                let rows: Vec<ConversationRecord> =
                    serde_json::from_str(&body).map_err(|e| AvatarError::Store(e.to_string()))?;
                rows.into_iter()
                    .next()
                    .ok_or_else(|| AvatarError::Store("empty insert response".to_string()))
            },
            self.config.timeout_ms,
        )
        .await
    }
}
