//! # Scribe Core
//!
//! Core types for the Scribe HTTP capture-and-log middleware.
//!
//! This crate defines the seams the middleware is built on: the inbound
//! request view, the outbound response-writer abstraction, the handler
//! trait, and the structured log record model with its sink trait.
//!
//! | Type | Role |
//! |------|------|
//! | [`Request`] | Buffered view of one inbound request (method, URI, headers, body, route variables) |
//! | [`Params`] | Route variables extracted by the router |
//! | [`ResponseWriter`] | Outbound writer abstraction (headers, status, body bytes) |
//! | [`ResponseBuffer`] | In-memory terminal writer, convertible to `http::Response` |
//! | [`Handler`] | Inner request handler writing into a `ResponseWriter` |
//! | [`LogRecord`] / [`Field`] | One structured entry with ordered, typed, namespaced fields |
//! | [`ValueMap`] | Insertion-ordered string-to-values mapping for structured fields |
//! | [`LogSink`] | Record destination, injected into the middleware |
//!
//! The capturing decorator and the request-logging middleware themselves
//! live in `scribe-middleware`; the `tracing`-backed production sink and
//! the logging bootstrap live in `scribe-telemetry`.

#![doc(html_root_url = "https://docs.rs/scribe-core/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod fields;
pub mod handler;
pub mod params;
pub mod request;
pub mod sink;
pub mod writer;

// Re-export main types at crate root
pub use fields::{names, Field, FieldValue, Level, LogRecord, ValueMap};
pub use handler::{BoxFuture, FnHandler, Handler};
pub use params::Params;
pub use request::Request;
pub use sink::{LogSink, MemorySink};
pub use writer::{ResponseBuffer, ResponseWriter};
