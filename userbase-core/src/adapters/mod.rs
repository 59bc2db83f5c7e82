//! Adapter implementations
//!
//! Adapters implement the port traits with concrete technologies:
//! - In-memory `Vec` for the UserRepository port
//! - The DuckDB-backed logging service for the EventSink port

pub mod memory;

use crate::domain::LogEvent;
use crate::ports::EventSink;
use crate::services::LoggingService;

impl EventSink for LoggingService {
    fn record(&self, event: LogEvent) {
        // Logging should never break the app
        let _ = self.log(event);
    }
}
