//! Token broker adapter — issues short-lived session credentials.
//!
//! Uses browser `fetch()` via gloo-net for WASM compatibility. The broker
//! endpoint forwards the persona to the avatar service and returns
//! `{"sessionToken": "..."}` on success.

use async_trait::async_trait;
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

use avatar_core::ports::TokenBrokerPort;
use avatar_types::{config::ServiceConfig, persona::PersonaConfig, AvatarError, Result};

use crate::net::{error_from_body, with_deadline};

pub struct BrokerClient {
    config: ServiceConfig,
}

impl BrokerClient {
    pub fn new(config: ServiceConfig) -> Self {
        Self { config }
    }

    fn endpoint(&self) -> String {
        format!("{}/functions/v1/get-anam-token", self.config.base_url)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TokenRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    persona_config: Option<&'a PersonaConfig>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenResponse {
    #[serde(default)]
    session_token: Option<String>,
}

/// Parse a 2xx broker response body. A missing or empty token is a
/// credential failure, not a success with an unusable value.
pub fn token_from_body(body: &str) -> Result<String> {
    let parsed: TokenResponse =
        serde_json::from_str(body).map_err(|e| AvatarError::Credential(e.to_string()))?;
    match parsed.session_token {
        Some(token) if !token.is_empty() => Ok(token),
        _ => Err(AvatarError::Credential(
            "no session token received".to_string(),
        )),
    }
}

#[async_trait(?Send)]
impl TokenBrokerPort for BrokerClient {
    async fn issue_token(&self, persona: Option<&PersonaConfig>) -> Result<String> {
        let url = self.endpoint();
        with_deadline(
            async {
                let response = Request::post(&url)
                    .header("Content-Type", "application/json")
                    .header("Authorization", &format!("Bearer {}", self.config.anon_key))
                    .json(&TokenRequest {
                        persona_config: persona,
                    })
                    .map_err(|e| AvatarError::Network(e.to_string()))?
                    .send()
                    .await
                    .map_err(|e| AvatarError::Network(e.to_string()))?;

                let status = response.status();
                let status_text = response.status_text();
                let body = response.text().await.unwrap_or_default();

                if !response.ok() {
                    return Err(AvatarError::Credential(error_from_body(
                        status,
                        &status_text,
                        &body,
                    )));
                }
                token_from_body(&body)
            },
            self.config.timeout_ms,
        )
        .await
    }
}
