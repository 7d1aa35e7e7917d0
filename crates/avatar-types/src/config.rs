use serde::{Deserialize, Serialize};

use crate::persona::PersonaConfig;

/// Endpoints and credential for the remote services.
///
/// Passed into each platform adapter at construction time; there is no
/// process-global service lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Base URL of the backend that hosts the token broker, the image
    /// describer and the conversation store.
    pub base_url: String,
    /// Public (anon) key sent as a bearer credential.
    pub anon_key: String,
    /// Deadline applied to every remote call.
    pub timeout_ms: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            anon_key: String::new(),
            timeout_ms: 15_000,
        }
    }
}

/// Top-level client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    pub services: ServiceConfig,
    /// Persona handed to `connect`; fields left empty are defaulted by the
    /// token broker.
    pub persona: PersonaConfig,
    /// DOM id of the video element the avatar streams onto.
    pub surface_id: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            services: ServiceConfig::default(),
            persona: PersonaConfig::named("Alex").with_system_prompt(DEFAULT_SYSTEM_PROMPT),
            surface_id: "avatar-video-surface".to_string(),
        }
    }
}

const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful and friendly AI assistant with vision \
capabilities. You can analyze images and provide clear, concise, and helpful responses to user \
questions.";
