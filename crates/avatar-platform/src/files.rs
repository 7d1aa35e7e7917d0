//! File reading — browser `File` → data-URI preview.
//!
//! FileReader is callback-based; the callbacks are bridged onto a oneshot
//! channel so callers get a plain async function.

use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use avatar_types::{image::ImageCandidate, AvatarError, Result};

/// Read a user-picked file into an [`ImageCandidate`], preserving the
/// browser-reported media type. The media-type gate itself lives in the
/// core flow; this just produces the candidate.
pub async fn read_candidate(file: &web_sys::File) -> Result<ImageCandidate> {
    let file_name = file.name();
    let media_type = file.type_();
    let data_uri = read_as_data_uri(file).await?;
    Ok(ImageCandidate {
        file_name,
        media_type,
        data_uri,
    })
}

async fn read_as_data_uri(file: &web_sys::File) -> Result<String> {
    let reader = web_sys::FileReader::new()
        .map_err(|e| AvatarError::JsInterop(format!("FileReader unavailable: {:?}", e)))?;

    let (tx, rx) = oneshot::channel::<Result<String>>();
    let tx = Rc::new(RefCell::new(Some(tx)));

    let reader_for_load = reader.clone();
    let tx_for_load = tx.clone();
    let onload = Closure::wrap(Box::new(move |_event: web_sys::ProgressEvent| {
        let outcome = reader_for_load
            .result()
            .ok()
            .and_then(|value| value.as_string())
            .ok_or_else(|| {
                AvatarError::JsInterop("FileReader produced no string result".to_string())
            });
        if let Some(tx) = tx_for_load.borrow_mut().take() {
            let _ = tx.send(outcome);
        }
    }) as Box<dyn FnMut(web_sys::ProgressEvent)>);

    let tx_for_error = tx.clone();
    let onerror = Closure::wrap(Box::new(move |_event: web_sys::ProgressEvent| {
        if let Some(tx) = tx_for_error.borrow_mut().take() {
            let _ = tx.send(Err(AvatarError::JsInterop("file read failed".to_string())));
        }
    }) as Box<dyn FnMut(web_sys::ProgressEvent)>);

    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    reader.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    reader
        .read_as_data_url(file)
        .map_err(|e| AvatarError::JsInterop(format!("readAsDataURL failed: {:?}", e)))?;

    // The closures stay alive until the read settles; dropping them after
    // the await detaches the handlers.
    let outcome = rx
        .await
        .map_err(|_| AvatarError::JsInterop("file read callback dropped".to_string()))?;
    drop(onload);
    drop(onerror);
    outcome
}
