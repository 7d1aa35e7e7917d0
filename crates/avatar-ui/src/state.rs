//! UI-level state that drives rendering.
//! This is a read-only projection of the session core, updated each frame
//! by draining the EventBus.

use avatar_types::event::SessionEvent;
use avatar_types::image::PendingImage;
use avatar_types::session::ConnectionState;

/// State visible to UI panels
pub struct UiState {
    /// Current connection lifecycle state
    pub connection: ConnectionState,
    /// Status line under the stage
    pub status_text: String,
    /// Last surfaced error, shown in a banner until the next session
    pub error_banner: Option<String>,
    /// A send is in flight
    pub is_sending: bool,
    /// Pending image preview, synced from the share flow each frame
    pub preview: Option<PendingImage>,
    /// Bookkeeping id of the current conversation record
    pub conversation_id: Option<String>,
    /// The user asked for a session (drives Start/End button choice even
    /// while the connect is still in flight)
    pub session_requested: bool,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            connection: ConnectionState::Idle,
            status_text: ConnectionState::Idle.label().to_string(),
            error_banner: None,
            is_sending: false,
            preview: None,
            conversation_id: None,
            session_requested: false,
        }
    }

    /// Process events from the EventBus and update UI state
    pub fn process_events(&mut self, events: Vec<SessionEvent>) {
        for event in events {
            match event {
                SessionEvent::StateChanged { state } => {
                    self.connection = state;
                    self.status_text = state.label().to_string();
                    match state {
                        ConnectionState::Connected => self.error_banner = None,
                        // Failed must re-offer Start so retry doesn't need a
                        // detour through End Session.
                        ConnectionState::Idle | ConnectionState::Failed => {
                            self.session_requested = false;
                        }
                        _ => {}
                    }
                }
                SessionEvent::SessionError { message } => {
                    self.status_text = format!("Error: {}", message);
                    self.error_banner = Some(message);
                }
                SessionEvent::SendStarted => {
                    self.is_sending = true;
                    self.status_text = "Sending to AI...".to_string();
                }
                SessionEvent::SendFinished => {
                    self.is_sending = false;
                    if self.connection == ConnectionState::Connected {
                        self.status_text = ConnectionState::Connected.label().to_string();
                    }
                }
                SessionEvent::ImageSelected { file_name } => {
                    self.status_text = format!("Share {}?", file_name);
                }
                SessionEvent::ImageDiscarded => {
                    self.preview = None;
                }
                SessionEvent::ImageShared => {
                    self.status_text = "Image shared with AI".to_string();
                }
                SessionEvent::ImageShareFailed { message } => {
                    self.status_text = "Failed to analyze image".to_string();
                    self.error_banner = Some(message);
                }
                SessionEvent::ConversationStarted { id } => {
                    self.conversation_id = Some(id);
                }
            }
        }
    }

    pub fn is_live(&self) -> bool {
        self.connection == ConnectionState::Connected
    }

    pub fn is_busy(&self) -> bool {
        matches!(
            self.connection,
            ConnectionState::Connecting | ConnectionState::Disconnecting
        ) || self.is_sending
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
