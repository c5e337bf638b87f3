//! # Scribe
//!
//! **HTTP request/response capture and structured logging middleware**
//!
//! Scribe wraps an inner request handler and records the full lifecycle of
//! each exchange: request metadata (method, host, path, form values, query
//! parameters, route variables, headers, body) and response metadata
//! (status code, headers, body). One structured record is emitted per
//! request, after the inner handler completes.
//!
//! ## Quick Start
//!
//! ```rust
//! use scribe::prelude::*;
//! use std::sync::Arc;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> std::io::Result<()> {
//! // The inner handler writes its response through a ResponseWriter.
//! let inner: Arc<dyn Handler> = Arc::new(FnHandler::new(|_request, writer| {
//!     Box::pin(async move {
//!         writer.write(b"hello")?;
//!         Ok(())
//!     })
//! }));
//!
//! // Inject a sink; production code uses scribe::telemetry::TracingSink.
//! let sink = Arc::new(MemorySink::new());
//! let logged = RequestLogger::new(inner, sink.clone());
//!
//! let request = Request::new(
//!     http::Method::GET,
//!     http::Uri::from_static("/hello"),
//!     http::HeaderMap::new(),
//!     bytes::Bytes::new(),
//!     Params::new(),
//! );
//! let mut response = ResponseBuffer::new();
//! logged.handle(&request, &mut response).await?;
//!
//! assert_eq!(sink.len(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! caller → RequestLogger → CaptureWriter → inner handler
//!                │                              │
//!                └── HttpInfo ──→ LogSink ←─────┘ (after return)
//! ```
//!
//! The capture writer forwards every operation to the real writer
//! unchanged; the logger observes, never interferes.

#![doc(html_root_url = "https://docs.rs/scribe/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use scribe_core as core;

// Re-export middleware types
pub use scribe_middleware as middleware;

// Re-export telemetry types
pub use scribe_telemetry as telemetry;

/// Commonly used types, importable in one line.
pub mod prelude {
    pub use scribe_core::{
        names, BoxFuture, Field, FieldValue, FnHandler, Handler, Level, LogRecord, LogSink,
        MemorySink, Params, Request, ResponseBuffer, ResponseWriter, ValueMap,
    };
    pub use scribe_middleware::{CaptureWriter, HttpInfo, RequestLogger};
    pub use scribe_telemetry::{init_logging, LogConfig, TracingSink};
}
