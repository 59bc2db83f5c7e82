//! Service layer - business logic orchestration
//!
//! Services coordinate domain logic and port interactions.

pub mod logging;
mod user;

pub use logging::{EntryPoint, LogEntry, LoggingService};
pub use user::UserService;
