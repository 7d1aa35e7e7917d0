//! Image share flow — select → preview → describe → inject as context.
//!
//! A short sequential pipeline on top of a Connected session controller.
//! The pending image is owned exclusively by this flow and is discarded on
//! every exit path of `share_image`, so a failed share never leaves stale
//! state behind.

use std::cell::RefCell;
use std::rc::Rc;

use avatar_types::{
    event::SessionEvent,
    image::{ImageCandidate, PendingImage},
    Result,
};

use crate::event_bus::EventBus;
use crate::ports::ImageDescriberPort;
use crate::session::SessionController;

pub struct ImageShareFlow {
    describer: Rc<dyn ImageDescriberPort>,
    events: EventBus,
    pending: RefCell<Option<PendingImage>>,
}

impl ImageShareFlow {
    pub fn new(describer: Rc<dyn ImageDescriberPort>, events: EventBus) -> Self {
        Self {
            describer,
            events,
            pending: RefCell::new(None),
        }
    }

    pub fn pending(&self) -> Option<PendingImage> {
        self.pending.borrow().clone()
    }

    /// Accept a user-picked file. Non-image media types are ignored
    /// without raising an error; a new selection replaces any unsent one.
    pub fn select_image(&self, candidate: ImageCandidate) {
        if !candidate.is_image() {
            log::debug!(
                "ignoring non-image selection: {} ({})",
                candidate.file_name,
                candidate.media_type
            );
            return;
        }
        let pending = PendingImage::from(candidate);
        self.events.emit(SessionEvent::ImageSelected {
            file_name: pending.file_name.clone(),
        });
        *self.pending.borrow_mut() = Some(pending);
    }

    /// Drop the pending image. Safe to call at any time, idempotent.
    pub fn discard_pending(&self) {
        if self.pending.borrow_mut().take().is_some() {
            self.events.emit(SessionEvent::ImageDiscarded);
        }
    }

    /// Describe the pending image and inject the description into the
    /// session.
    ///
    /// No-op unless an image is pending and the session is Connected.
    /// Otherwise a strict sequence: describe, then send — the send is never
    /// attempted when the describe step failed — and the pending image is
    /// discarded as a finalizer regardless of outcome.
    pub async fn share_image(&self, session: &SessionController) {
        let pending = self.pending.borrow().clone();
        let pending = match pending {
            Some(pending) => pending,
            None => return,
        };
        if !session.is_connected() {
            return;
        }

        let outcome = self.describe_and_send(&pending, session).await;
        self.discard_pending();

        match outcome {
            Ok(()) => self.events.emit(SessionEvent::ImageShared),
            Err(e) => {
                log::warn!("image share failed: {}", e);
                self.events.emit(SessionEvent::ImageShareFailed {
                    message: e.user_message(),
                });
            }
        }
    }

    async fn describe_and_send(
        &self,
        pending: &PendingImage,
        session: &SessionController,
    ) -> Result<()> {
        let description = self.describer.describe(&pending.data_uri).await?;
        session.send_image_context(&description, None).await;
        Ok(())
    }
}
