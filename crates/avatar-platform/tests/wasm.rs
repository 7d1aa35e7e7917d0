//! WASM-target tests for avatar-platform (Node.js runtime).
//!
//! Covers the pure parsing helpers under wasm32-unknown-unknown via
//! `wasm-pack test --node`. The fetch/FileReader adapters themselves need
//! a browser and live services and are exercised manually.

use wasm_bindgen_test::*;

use avatar_platform::broker::token_from_body;
use avatar_platform::describer::description_from_body;
use avatar_platform::net::error_from_body;
use avatar_types::AvatarError;

// ─── Token response parsing ──────────────────────────────

#[wasm_bindgen_test]
fn token_from_body_ok() {
    let token = token_from_body(r#"{"sessionToken":"tok-A"}"#).unwrap();
    assert_eq!(token, "tok-A");
}

#[wasm_bindgen_test]
fn token_from_body_missing_is_credential_error() {
    // A 2xx response without a token must fail, not yield an empty token.
    let err = token_from_body(r#"{}"#).unwrap_err();
    match err {
        AvatarError::Credential(message) => assert_eq!(message, "no session token received"),
        other => panic!("unexpected error: {}", other),
    }
}

#[wasm_bindgen_test]
fn token_from_body_empty_is_credential_error() {
    let err = token_from_body(r#"{"sessionToken":""}"#).unwrap_err();
    assert!(matches!(err, AvatarError::Credential(_)));
}

#[wasm_bindgen_test]
fn token_from_body_ignores_extra_fields() {
    let token = token_from_body(r#"{"sessionToken":"tok-A","expiresIn":300}"#).unwrap();
    assert_eq!(token, "tok-A");
}

#[wasm_bindgen_test]
fn token_from_body_invalid_json() {
    let err = token_from_body("{{not json}}").unwrap_err();
    assert!(matches!(err, AvatarError::Credential(_)));
}

// ─── Describe response parsing ───────────────────────────

#[wasm_bindgen_test]
fn description_from_body_ok() {
    let description = description_from_body(r#"{"description":"a red bicycle"}"#).unwrap();
    assert_eq!(description, "a red bicycle");
}

#[wasm_bindgen_test]
fn description_from_body_missing() {
    let err = description_from_body(r#"{}"#).unwrap_err();
    match err {
        AvatarError::Describe(message) => assert_eq!(message, "no description received"),
        other => panic!("unexpected error: {}", other),
    }
}

// ─── Error body parsing ──────────────────────────────────

#[wasm_bindgen_test]
fn error_from_body_uses_service_message() {
    let message = error_from_body(500, "Internal Server Error", r#"{"error":"no key"}"#);
    assert_eq!(message, "no key");
}

#[wasm_bindgen_test]
fn error_from_body_falls_back_to_status() {
    let message = error_from_body(502, "Bad Gateway", "<html>oops</html>");
    assert_eq!(message, "HTTP 502: Bad Gateway");
}

#[wasm_bindgen_test]
fn error_from_body_empty_error_field_falls_back() {
    let message = error_from_body(500, "Internal Server Error", r#"{"error":""}"#);
    assert_eq!(message, "HTTP 500: Internal Server Error");
}
