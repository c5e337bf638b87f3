//! The log-sink seam.
//!
//! Scribe never talks to a logging backend directly: the middleware is
//! handed a [`LogSink`] at construction time and emits one record per
//! request into it. Injecting the sink (instead of reaching for global
//! logger state) keeps concurrent substitution and test doubles trivial.

use crate::fields::LogRecord;
use std::sync::Mutex;

/// Destination for emitted [`LogRecord`]s.
///
/// Implementations must be safe for concurrent use: one sink instance is
/// shared by every in-flight request. A sink that fails internally owns
/// that failure; `emit` is infallible from the middleware's point of view.
pub trait LogSink: Send + Sync {
    /// Accepts one record. Called exactly once per request.
    fn emit(&self, record: LogRecord);
}

/// An in-memory sink that retains every record it receives.
///
/// Intended for tests and in-process inspection; production deployments
/// use a sink that forwards to the logging backend (see the
/// `scribe-telemetry` crate).
///
/// # Example
///
/// ```rust
/// use scribe_core::{Level, LogRecord, LogSink, MemorySink};
///
/// let sink = MemorySink::new();
/// sink.emit(LogRecord::new(Level::Info, "http request info", "httpInfo"));
///
/// assert_eq!(sink.len(), 1);
/// assert_eq!(sink.records()[0].message, "http request info");
/// ```
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<LogRecord>>,
}

impl MemorySink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every record received so far, in emission order.
    #[must_use]
    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().expect("sink poisoned").clone()
    }

    /// Returns the number of records received.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.lock().expect("sink poisoned").len()
    }

    /// Returns true if no records have been received.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl LogSink for MemorySink {
    fn emit(&self, record: LogRecord) {
        self.records.lock().expect("sink poisoned").push(record);
    }
}
