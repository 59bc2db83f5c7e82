//! Event sink port - where services report what happened

use crate::domain::LogEvent;

/// Destination for privacy-safe log events
///
/// Recording must never fail the calling operation, so there is no
/// return value. Implementations swallow their own errors.
pub trait EventSink: Send + Sync {
    fn record(&self, event: LogEvent);
}
