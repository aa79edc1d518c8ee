//! Structured logging integration for events
//!
//! Every emitted event is mirrored into `tracing` with structured fields,
//! whether or not a sink is configured. Without an installed subscriber this
//! produces no output.

use tracing::{debug, warn, Level};

use crate::EventMessage;

/// Log an event using the tracing infrastructure with structured fields
pub fn log_event_with_tracing(message: &EventMessage) {
    let meta = &message.meta;
    let event = &message.event;
    let path = event.path().display();

    if meta.tracing_level() == Level::WARN {
        warn!(
            target: "scopedir::events",
            event_id = %meta.event_id,
            correlation = ?meta.correlation_id,
            path = %path,
            error = event.error().unwrap_or_default(),
            "{event}"
        );
    } else {
        debug!(
            target: "scopedir::events",
            event_id = %meta.event_id,
            correlation = ?meta.correlation_id,
            path = %path,
            "{event}"
        );
    }
}
