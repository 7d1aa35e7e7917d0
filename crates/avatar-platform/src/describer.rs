//! Image describer adapter — turns a shared image into natural language.
//!
//! The endpoint wraps a vision model; the client only sees
//! `{"description": "..."}` or an error body.

use async_trait::async_trait;
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

use avatar_core::ports::ImageDescriberPort;
use avatar_types::{config::ServiceConfig, AvatarError, Result};

use crate::net::{error_from_body, with_deadline};

pub struct DescriberClient {
    config: ServiceConfig,
}

impl DescriberClient {
    pub fn new(config: ServiceConfig) -> Self {
        Self { config }
    }

    fn endpoint(&self) -> String {
        format!("{}/functions/v1/analyze-image", self.config.base_url)
    }
}

#[derive(Serialize)]
struct DescribeRequest<'a> {
    image: &'a str,
}

#[derive(Deserialize)]
struct DescribeResponse {
    #[serde(default)]
    description: Option<String>,
}

/// Parse a 2xx describer response body.
pub fn description_from_body(body: &str) -> Result<String> {
    let parsed: DescribeResponse =
        serde_json::from_str(body).map_err(|e| AvatarError::Describe(e.to_string()))?;
    match parsed.description {
        Some(description) if !description.is_empty() => Ok(description),
        _ => Err(AvatarError::Describe("no description received".to_string())),
    }
}

#[async_trait(?Send)]
impl ImageDescriberPort for DescriberClient {
    async fn describe(&self, image_data_uri: &str) -> Result<String> {
        let url = self.endpoint();
        with_deadline(
            async {
                let response = Request::post(&url)
                    .header("Content-Type", "application/json")
                    .header("Authorization", &format!("Bearer {}", self.config.anon_key))
                    .json(&DescribeRequest {
                        image: image_data_uri,
                    })
                    .map_err(|e| AvatarError::Network(e.to_string()))?
                    .send()
                    .await
                    .map_err(|e| AvatarError::Network(e.to_string()))?;

                let status = response.status();
                let status_text = response.status_text();
                let body = response.text().await.unwrap_or_default();

                if !response.ok() {
                    return Err(AvatarError::Describe(error_from_body(
                        status,
                        &status_text,
                        &body,
                    )));
                }
                description_from_body(&body)
            },
            self.config.timeout_ms,
        )
        .await
    }
}
