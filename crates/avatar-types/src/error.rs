use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum AvatarError {
    #[error("credential error: {0}")]
    Credential(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("image description error: {0}")]
    Describe(String),

    #[error("a connect is already in flight")]
    ConcurrentOperation,

    #[error("conversation store error: {0}")]
    Store(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("timed out after {0}ms")]
    Timeout(u64),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("JS interop error: {0}")]
    JsInterop(String),
}

impl AvatarError {
    /// Message for the status line, without the category prefix.
    /// Remote services already return human-readable text; repeating the
    /// variant name in front of it reads badly in the UI.
    pub fn user_message(&self) -> String {
        match self {
            AvatarError::Credential(m)
            | AvatarError::Transport(m)
            | AvatarError::Describe(m)
            | AvatarError::Store(m)
            | AvatarError::Network(m)
            | AvatarError::Serialization(m)
            | AvatarError::Config(m)
            | AvatarError::JsInterop(m) => m.clone(),
            other => other.to_string(),
        }
    }
}

impl From<serde_json::Error> for AvatarError {
    fn from(e: serde_json::Error) -> Self {
        AvatarError::Serialization(e.to_string())
    }
}
