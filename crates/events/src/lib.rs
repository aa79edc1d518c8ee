#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Event system for scopedir
//!
//! A managed directory reports its lifecycle (create, keep, remove and the
//! two failure kinds) as [`TempDirEvent`]s. Each event is mirrored into
//! `tracing` and, when a [`LogSink`] is configured, delivered to it as a
//! rendered line or as a structured [`EventMessage`].

pub mod event;
pub mod logging;
pub mod meta;
pub mod sink;

pub use event::{EventMessage, TempDirEvent};
pub use meta::{EventLevel, EventMeta};
pub use sink::{LogFn, LogSink};

/// The unified trait for emitting directory events
pub trait EventEmitter {
    /// Get the sink for this emitter, if logging is enabled
    fn log_sink(&self) -> Option<&LogSink>;

    /// Emit an event through this emitter
    fn emit(&self, event: TempDirEvent) {
        let message = EventMessage::from_event(event);
        logging::log_event_with_tracing(&message);
        if let Some(sink) = self.log_sink() {
            sink.deliver(&message);
        }
    }
}

impl EventEmitter for LogSink {
    fn log_sink(&self) -> Option<&LogSink> {
        Some(self)
    }
}

impl EventEmitter for Option<LogSink> {
    fn log_sink(&self) -> Option<&LogSink> {
        self.as_ref()
    }
}
