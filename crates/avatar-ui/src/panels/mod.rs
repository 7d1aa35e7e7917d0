pub mod image;
pub mod stage;
