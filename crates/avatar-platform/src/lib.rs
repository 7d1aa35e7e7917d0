//! Browser platform adapters for the avatar client.
//!
//! Everything here implements an `avatar-core` port trait against a real
//! browser API: gloo-net fetch for the HTTP services, wasm-bindgen externs
//! for the avatar SDK, and FileReader for image previews.

pub mod broker;
pub mod describer;
pub mod files;
pub mod net;
pub mod store;
pub mod transport;
