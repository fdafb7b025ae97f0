pub mod calm;
pub mod chat;
pub mod components;
pub mod home;
pub mod layout;
pub mod practice;
pub mod progress;
pub mod settings;

// Re-export commonly used functions from layout
pub use layout::{bare_page, page, Chrome};
