//! Session controller — owns the full lifecycle of one avatar session.
//!
//! The original event-driven callback style is re-expressed as an explicit
//! state machine with a single-flight guard:
//!
//! Idle → Connecting → Connected → Disconnecting → Idle,
//! with Connecting → Failed on any connect error and Failed → Connecting
//! on retry.
//!
//! The transport handle is an owned resource: acquired in `connect`,
//! released in `disconnect` or on connect failure, never held anywhere
//! else. At most one live handle exists per controller at any time.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use avatar_types::{
    event::SessionEvent, persona::PersonaConfig, session::ConnectionState, AvatarError, Result,
};

use crate::event_bus::EventBus;
use crate::ports::{TokenBrokerPort, TransportHandle, TransportPort};

pub struct SessionController {
    broker: Rc<dyn TokenBrokerPort>,
    transport: Rc<dyn TransportPort>,
    events: EventBus,
    state: Cell<ConnectionState>,
    handle: RefCell<Option<Rc<dyn TransportHandle>>>,
    last_error: RefCell<Option<String>>,
    sending: Cell<bool>,
    /// Generation counter for outbound sends: only the most recent send may
    /// clear the `sending` flag.
    send_seq: Cell<u64>,
    /// Set when a disconnect arrives while a connect is still in flight;
    /// applied once the connect settles so the fresh handle cannot leak.
    disconnect_pending: Cell<bool>,
}

impl SessionController {
    pub fn new(
        broker: Rc<dyn TokenBrokerPort>,
        transport: Rc<dyn TransportPort>,
        events: EventBus,
    ) -> Self {
        Self {
            broker,
            transport,
            events,
            state: Cell::new(ConnectionState::Idle),
            handle: RefCell::new(None),
            last_error: RefCell::new(None),
            sending: Cell::new(false),
            send_seq: Cell::new(0),
            disconnect_pending: Cell::new(false),
        }
    }

    pub fn state(&self) -> ConnectionState {
        self.state.get()
    }

    pub fn is_connected(&self) -> bool {
        self.state.get() == ConnectionState::Connected
    }

    pub fn is_sending_message(&self) -> bool {
        self.sending.get()
    }

    pub fn last_error(&self) -> Option<String> {
        self.last_error.borrow().clone()
    }

    fn set_state(&self, next: ConnectionState) {
        self.state.set(next);
        self.events.emit(SessionEvent::StateChanged { state: next });
    }

    /// Connect to the avatar service and start streaming onto `surface_id`.
    ///
    /// Single-flight: rejected with [`AvatarError::ConcurrentOperation`]
    /// unless the controller is Idle or Failed; rejection causes no state
    /// change and no outbound call. Exactly one credential request and at
    /// most one establish call are made per attempt. Any failure moves the
    /// state to Failed and records a human-readable `last_error`.
    pub async fn connect(&self, surface_id: &str, persona: Option<PersonaConfig>) -> Result<()> {
        if !self.state.get().can_connect() {
            return Err(AvatarError::ConcurrentOperation);
        }
        *self.last_error.borrow_mut() = None;
        self.set_state(ConnectionState::Connecting);

        let token = match self.broker.issue_token(persona.as_ref()).await {
            Ok(token) => token,
            Err(e) => return Err(self.fail_connect(e)),
        };

        let handle = match self.transport.establish(surface_id, &token).await {
            Ok(handle) => handle,
            Err(e) => return Err(self.fail_connect(e)),
        };

        if self.disconnect_pending.take() {
            // A disconnect was queued while we were establishing: apply it
            // now instead of going Connected.
            if let Err(e) = handle.release().await {
                log::warn!("release after queued disconnect failed: {}", e);
            }
            *self.last_error.borrow_mut() = None;
            self.set_state(ConnectionState::Idle);
            return Ok(());
        }

        *self.handle.borrow_mut() = Some(handle);
        self.set_state(ConnectionState::Connected);
        log::info!("avatar session connected on surface {}", surface_id);
        Ok(())
    }

    fn fail_connect(&self, err: AvatarError) -> AvatarError {
        let message = err.user_message();
        log::error!("connect failed: {}", err);
        self.events.emit(SessionEvent::SessionError {
            message: message.clone(),
        });
        *self.last_error.borrow_mut() = Some(message);
        self.set_state(ConnectionState::Failed);

        if self.disconnect_pending.take() {
            // The queued disconnect still applies: there is no handle to
            // release, the session just settles at Idle with the error
            // cleared.
            *self.last_error.borrow_mut() = None;
            self.set_state(ConnectionState::Idle);
        }
        err
    }

    /// End the session. Best-effort: release errors are logged and the
    /// local state still clears, so "end session" always appears to
    /// succeed. Valid (and idempotent) from any state.
    pub async fn disconnect(&self) {
        if self.state.get() == ConnectionState::Connecting {
            // A connect is still in flight; teardown is applied once it
            // settles rather than interleaved with handle creation.
            self.disconnect_pending.set(true);
            return;
        }

        self.set_state(ConnectionState::Disconnecting);
        let handle = self.handle.borrow_mut().take();
        if let Some(handle) = handle {
            if let Err(e) = handle.release().await {
                log::warn!("transport release failed: {}", e);
            }
        }
        self.sending.set(false);
        *self.last_error.borrow_mut() = None;
        self.set_state(ConnectionState::Idle);
    }

    /// Forward `text` verbatim to the live transport.
    ///
    /// Silent no-op unless the session is Connected. Send failures are
    /// logged and surfaced as events, never propagated.
    pub async fn send_message(&self, text: &str) {
        let handle = match self.current_handle() {
            Some(handle) => handle,
            None => return,
        };

        let seq = self.send_seq.get() + 1;
        self.send_seq.set(seq);
        self.sending.set(true);
        self.events.emit(SessionEvent::SendStarted);

        if let Err(e) = handle.send(text).await {
            log::warn!("message send failed: {}", e);
            self.events.emit(SessionEvent::SessionError {
                message: e.user_message(),
            });
        }

        // Only the most recent send clears the busy flag; a stale
        // completion must not hide a newer in-flight send.
        if self.send_seq.get() == seq {
            self.sending.set(false);
            self.events.emit(SessionEvent::SendFinished);
        }
    }

    /// Inject a shared image's description into the conversation as one
    /// message. Same preconditions and error policy as [`send_message`].
    ///
    /// [`send_message`]: SessionController::send_message
    pub async fn send_image_context(&self, description: &str, user_query: Option<&str>) {
        let message = image_context_message(description, user_query);
        self.send_message(&message).await;
    }

    fn current_handle(&self) -> Option<Rc<dyn TransportHandle>> {
        if self.state.get() != ConnectionState::Connected {
            return None;
        }
        self.handle.borrow().clone()
    }
}

/// Compose the instruction injected when the user shares an image: the
/// share notice, then the description verbatim, then either the user's
/// literal question or an acknowledge-and-invite prompt. Always one
/// message, always in that order.
pub fn image_context_message(description: &str, user_query: Option<&str>) -> String {
    match user_query {
        Some(query) => format!(
            "Note to AI: The user has shared an image. Here's what the image contains: {}. \
             The user asks: \"{}\"",
            description, query
        ),
        None => format!(
            "Note to AI: The user has shared an image. Here's what the image contains: {}. \
             Please acknowledge you've seen the image and offer to answer any questions about it.",
            description
        ),
    }
}
