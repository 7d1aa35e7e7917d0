//! Port traits — the hexagonal architecture boundary.
//!
//! These traits are defined here in `avatar-core` (pure Rust).
//! Implementations live in `avatar-platform` (browser adapters).
//! The core never imports platform code; it only depends on these traits.
//!
//! All traits are `?Send`: the client runs on the single-threaded browser
//! main thread.

use std::rc::Rc;

use async_trait::async_trait;
use avatar_types::{conversation::ConversationRecord, persona::PersonaConfig, Result};

// ─── Token Broker Port ───────────────────────────────────────

#[async_trait(?Send)]
pub trait TokenBrokerPort {
    /// Request a short-lived session credential.
    ///
    /// The persona, if given, is forwarded verbatim; the broker defaults
    /// any omitted field server-side. A 2xx response without a token must
    /// surface as [`avatar_types::AvatarError::Credential`].
    async fn issue_token(&self, persona: Option<&PersonaConfig>) -> Result<String>;
}

// ─── Image Describer Port ────────────────────────────────────

#[async_trait(?Send)]
pub trait ImageDescriberPort {
    /// Turn a data-URI-encoded image into a natural-language description.
    async fn describe(&self, image_data_uri: &str) -> Result<String>;
}

// ─── Streaming Transport Port ────────────────────────────────

/// A live streaming connection obtained from [`TransportPort::establish`].
///
/// Exclusively owned by the session controller; at most one live handle
/// exists per controller at any time.
#[async_trait(?Send)]
pub trait TransportHandle {
    /// Forward a user message to the remote avatar.
    async fn send(&self, text: &str) -> Result<()>;

    /// Stop streaming and free the remote session. Called at most once.
    async fn release(&self) -> Result<()>;
}

#[async_trait(?Send)]
pub trait TransportPort {
    /// Start streaming onto the video surface identified by `surface_id`,
    /// authenticated with `token`.
    async fn establish(&self, surface_id: &str, token: &str) -> Result<Rc<dyn TransportHandle>>;
}

// ─── Conversation Store Port ─────────────────────────────────

#[async_trait(?Send)]
pub trait ConversationStorePort {
    /// Create a fresh conversation record for bookkeeping. The client never
    /// reads conversation history back.
    async fn create_conversation(&self, owner_id: &str, title: &str)
        -> Result<ConversationRecord>;
}
