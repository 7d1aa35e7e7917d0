//! Small helpers shared by the HTTP adapters.

use std::future::Future;

use futures::future::{select, Either};
use gloo_timers::future::TimeoutFuture;
use serde::Deserialize;

use avatar_types::{AvatarError, Result};

/// Race `fut` against a deadline. Timeouts follow the same failure path as
/// any other adapter error.
pub async fn with_deadline<T>(fut: impl Future<Output = Result<T>>, timeout_ms: u64) -> Result<T> {
    let fut = std::pin::pin!(fut);
    let deadline = std::pin::pin!(TimeoutFuture::new(timeout_ms as u32));
    match select(fut, deadline).await {
        Either::Left((outcome, _)) => outcome,
        Either::Right(((), _)) => Err(AvatarError::Timeout(timeout_ms)),
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: String,
}

/// Extract the human-readable message from a non-2xx response body.
/// The services return `{"error": "..."}`; anything else falls back to the
/// HTTP status line.
pub fn error_from_body(status: u16, status_text: &str, body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) if !parsed.error.is_empty() => parsed.error,
        _ => format!("HTTP {}: {}", status, status_text),
    }
}
