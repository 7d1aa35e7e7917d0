use serde::{Deserialize, Serialize};

use crate::session::ConnectionState;

/// Events emitted by the session controller and the image share flow.
/// The UI drains these each frame for reactive updates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SessionEvent {
    /// The connection state machine moved
    StateChanged { state: ConnectionState },

    /// A session-level error was surfaced (connect failure, failed send)
    SessionError { message: String },

    /// An outbound message left for the transport
    SendStarted,

    /// The most recent outbound message settled
    SendFinished,

    /// The user picked an image that passed the media-type gate
    ImageSelected { file_name: String },

    /// The pending image was dropped (sent, cancelled, or session ended)
    ImageDiscarded,

    /// An image description was injected into the session
    ImageShared,

    /// The describe step failed; nothing was sent
    ImageShareFailed { message: String },

    /// A conversation record was created for bookkeeping
    ConversationStarted { id: String },
}
