//! Port definitions (hexagonal architecture)
//!
//! Ports define the interfaces for external dependencies. The core domain
//! depends only on these traits, not on concrete implementations.

mod event_sink;
mod repository;

pub use event_sink::EventSink;
pub use repository::UserRepository;

#[cfg(test)]
pub use repository::MockUserRepository;
