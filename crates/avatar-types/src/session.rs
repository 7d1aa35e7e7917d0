use serde::{Deserialize, Serialize};

/// Connection lifecycle of one avatar session.
///
/// Legal transitions:
/// Idle → Connecting → Connected → Disconnecting → Idle,
/// plus Connecting → Failed on any connect error and
/// Failed → Connecting on retry. Failed is recoverable, not terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConnectionState {
    Idle,
    Connecting,
    Connected,
    Disconnecting,
    Failed,
}

impl ConnectionState {
    /// Whether a new connect attempt may start from this state.
    pub fn can_connect(&self) -> bool {
        matches!(self, ConnectionState::Idle | ConnectionState::Failed)
    }

    /// Status-line text shown for this state.
    pub fn label(&self) -> &'static str {
        match self {
            ConnectionState::Idle => "Start a session to begin",
            ConnectionState::Connecting => "Connecting to AI avatar...",
            ConnectionState::Connected => "Connected - Speak naturally",
            ConnectionState::Disconnecting => "Ending session...",
            ConnectionState::Failed => "Connection failed",
        }
    }
}

impl Default for ConnectionState {
    fn default() -> Self {
        ConnectionState::Idle
    }
}
