pub mod config;
pub mod conversation;
pub mod error;
pub mod event;
pub mod image;
pub mod persona;
pub mod session;


pub use error::AvatarError;
pub type Result<T> = std::result::Result<T, AvatarError>;
