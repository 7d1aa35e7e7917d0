#[cfg(test)]
mod tests {
    use crate::state::*;
    use avatar_types::event::SessionEvent;
    use avatar_types::image::PendingImage;
    use avatar_types::session::ConnectionState;

    fn pending() -> PendingImage {
        PendingImage {
            file_name: "cat.png".to_string(),
            media_type: "image/png".to_string(),
            data_uri: "data:image/png;base64,AAAA".to_string(),
        }
    }

    // ─── UiState Tests ───────────────────────────────────────

    #[test]
    fn test_ui_state_initial() {
        let state = UiState::new();
        assert_eq!(state.connection, ConnectionState::Idle);
        assert_eq!(state.status_text, "Start a session to begin");
        assert!(state.error_banner.is_none());
        assert!(!state.is_sending);
        assert!(state.preview.is_none());
        assert!(state.conversation_id.is_none());
        assert!(!state.is_live());
        assert!(!state.is_busy());
    }

    #[test]
    fn test_ui_state_connecting_is_busy() {
        let mut state = UiState::new();
        state.process_events(vec![SessionEvent::StateChanged {
            state: ConnectionState::Connecting,
        }]);
        assert_eq!(state.connection, ConnectionState::Connecting);
        assert_eq!(state.status_text, "Connecting to AI avatar...");
        assert!(state.is_busy());
        assert!(!state.is_live());
    }

    #[test]
    fn test_ui_state_connected_clears_banner() {
        let mut state = UiState::new();
        state.error_banner = Some("old failure".to_string());
        state.process_events(vec![SessionEvent::StateChanged {
            state: ConnectionState::Connected,
        }]);
        assert!(state.is_live());
        assert!(state.error_banner.is_none());
        assert_eq!(state.status_text, "Connected - Speak naturally");
    }

    #[test]
    fn test_ui_state_idle_resets_session_request() {
        let mut state = UiState::new();
        state.session_requested = true;
        state.process_events(vec![SessionEvent::StateChanged {
            state: ConnectionState::Idle,
        }]);
        assert!(!state.session_requested);
    }

    #[test]
    fn test_ui_state_failed_offers_retry() {
        let mut state = UiState::new();
        state.session_requested = true;
        state.process_events(vec![
            SessionEvent::SessionError {
                message: "no key".to_string(),
            },
            SessionEvent::StateChanged {
                state: ConnectionState::Failed,
            },
        ]);
        // The Start button comes back immediately; the error stays visible.
        assert!(!state.session_requested);
        assert_eq!(state.connection, ConnectionState::Failed);
        assert_eq!(state.error_banner.as_deref(), Some("no key"));
    }

    #[test]
    fn test_ui_state_session_error() {
        let mut state = UiState::new();
        state.process_events(vec![SessionEvent::SessionError {
            message: "no key".to_string(),
        }]);
        assert_eq!(state.error_banner.as_deref(), Some("no key"));
        assert_eq!(state.status_text, "Error: no key");
    }

    #[test]
    fn test_ui_state_send_cycle() {
        let mut state = UiState::new();
        state.process_events(vec![
            SessionEvent::StateChanged {
                state: ConnectionState::Connected,
            },
            SessionEvent::SendStarted,
        ]);
        assert!(state.is_sending);
        assert!(state.is_busy());
        assert_eq!(state.status_text, "Sending to AI...");

        state.process_events(vec![SessionEvent::SendFinished]);
        assert!(!state.is_sending);
        assert_eq!(state.status_text, "Connected - Speak naturally");
    }

    #[test]
    fn test_ui_state_image_events() {
        let mut state = UiState::new();
        state.preview = Some(pending());

        state.process_events(vec![SessionEvent::ImageSelected {
            file_name: "cat.png".to_string(),
        }]);
        assert_eq!(state.status_text, "Share cat.png?");

        state.process_events(vec![SessionEvent::ImageShared]);
        assert_eq!(state.status_text, "Image shared with AI");

        state.process_events(vec![SessionEvent::ImageDiscarded]);
        assert!(state.preview.is_none());
    }

    #[test]
    fn test_ui_state_image_share_failed() {
        let mut state = UiState::new();
        state.process_events(vec![SessionEvent::ImageShareFailed {
            message: "service down".to_string(),
        }]);
        assert_eq!(state.status_text, "Failed to analyze image");
        assert_eq!(state.error_banner.as_deref(), Some("service down"));
    }

    #[test]
    fn test_ui_state_conversation_started() {
        let mut state = UiState::new();
        state.process_events(vec![SessionEvent::ConversationStarted {
            id: "conv-1".to_string(),
        }]);
        assert_eq!(state.conversation_id.as_deref(), Some("conv-1"));
    }
}
