use crossbeam::channel::{self, Receiver, Sender};
use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

use crate::EventMessage;

/// Callback receiving one rendered event line
pub type LogFn = Arc<dyn Fn(&str) + Send + Sync>;

/// Destination for the events of a managed directory
#[derive(Clone)]
pub enum LogSink {
    /// One line per event on standard output
    Stdout,
    /// Rendered line handed to a caller-supplied function
    Callback(LogFn),
    /// Structured message sent over a channel
    Channel(Sender<EventMessage>),
}

impl LogSink {
    #[must_use]
    pub fn stdout() -> Self {
        Self::Stdout
    }

    #[must_use]
    pub fn callback(f: impl Fn(&str) + Send + Sync + 'static) -> Self {
        Self::Callback(Arc::new(f))
    }

    /// Create a channel sink together with the receiving end
    #[must_use]
    pub fn channel() -> (Self, Receiver<EventMessage>) {
        let (tx, rx) = channel::unbounded();
        (Self::Channel(tx), rx)
    }

    /// Hand a message to the sink.
    ///
    /// Delivery never fails: a closed stdout or a dropped receiver is ignored
    /// since emission can happen inside `Drop`.
    pub fn deliver(&self, message: &EventMessage) {
        match self {
            Self::Stdout => {
                let mut out = io::stdout().lock();
                let _ = writeln!(out, "{}", message.event);
            }
            Self::Callback(f) => f(&message.event.to_string()),
            Self::Channel(tx) => {
                let _ = tx.send(message.clone());
            }
        }
    }
}

impl fmt::Debug for LogSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdout => f.write_str("Stdout"),
            Self::Callback(_) => f.write_str("Callback(..)"),
            Self::Channel(_) => f.write_str("Channel(..)"),
        }
    }
}
