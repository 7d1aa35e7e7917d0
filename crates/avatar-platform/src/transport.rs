//! Streaming transport adapter — bridges to the avatar SDK's JS global.
//!
//! The SDK is consumed opaquely: the adapter only depends on
//! `createClient` / `streamToVideoElement` / `sendUserMessage` /
//! `stopStreaming` succeeding or failing, never on SDK internals. The
//! page is expected to expose the SDK as `window.anam`.

use std::rc::Rc;

use async_trait::async_trait;
use wasm_bindgen::prelude::*;

use avatar_core::ports::{TransportHandle, TransportPort};
use avatar_types::{AvatarError, Result};

use crate::net::with_deadline;

#[wasm_bindgen]
extern "C" {
    type SdkClient;

    #[wasm_bindgen(js_namespace = ["window", "anam"], js_name = createClient, catch)]
    fn create_client(session_token: &str) -> std::result::Result<SdkClient, JsValue>;

    #[wasm_bindgen(method, js_name = streamToVideoElement, catch)]
    async fn stream_to_video_element(
        this: &SdkClient,
        element_id: &str,
    ) -> std::result::Result<JsValue, JsValue>;

    #[wasm_bindgen(method, js_name = sendUserMessage, catch)]
    async fn send_user_message(
        this: &SdkClient,
        message: &str,
    ) -> std::result::Result<JsValue, JsValue>;

    #[wasm_bindgen(method, js_name = stopStreaming, catch)]
    async fn stop_streaming(this: &SdkClient) -> std::result::Result<JsValue, JsValue>;
}

fn js_err(context: &str, value: JsValue) -> AvatarError {
    let detail = value.as_string().unwrap_or_else(|| format!("{:?}", value));
    AvatarError::Transport(format!("{}: {}", context, detail))
}

/// Transport over the avatar SDK. Establishment is bounded by the same
/// deadline as the HTTP adapters.
pub struct SdkTransport {
    timeout_ms: u64,
}

impl SdkTransport {
    pub fn new(timeout_ms: u64) -> Self {
        Self { timeout_ms }
    }
}

#[async_trait(?Send)]
impl TransportPort for SdkTransport {
    async fn establish(&self, surface_id: &str, token: &str) -> Result<Rc<dyn TransportHandle>> {
        let client = create_client(token).map_err(|e| js_err("createClient failed", e))?;
        with_deadline(
            async {
                client
                    .stream_to_video_element(surface_id)
                    .await
                    .map(|_| ())
                    .map_err(|e| js_err("streamToVideoElement failed", e))
            },
            self.timeout_ms,
        )
        .await?;
        log::info!("avatar stream attached to #{}", surface_id);
        Ok(Rc::new(SdkHandle { client }))
    }
}

struct SdkHandle {
    client: SdkClient,
}

#[async_trait(?Send)]
impl TransportHandle for SdkHandle {
    async fn send(&self, text: &str) -> Result<()> {
        self.client
            .send_user_message(text)
            .await
            .map(|_| ())
            .map_err(|e| js_err("sendUserMessage failed", e))
    }

    async fn release(&self) -> Result<()> {
        self.client
            .stop_streaming()
            .await
            .map(|_| ())
            .map_err(|e| js_err("stopStreaming failed", e))
    }
}
