//! Core domain entities
//!
//! Pure data structures with no I/O or external dependencies.

mod log_event;
mod user;
pub mod result;

pub use log_event::LogEvent;
pub use user::User;
