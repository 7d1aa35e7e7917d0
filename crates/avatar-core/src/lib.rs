pub mod event_bus;
pub mod image_share;
pub mod ports;
pub mod session;
