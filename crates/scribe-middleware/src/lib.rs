//! # Scribe Middleware
//!
//! Request/response capture middleware for the Scribe logging library.
//!
//! Two pieces compose into the request-handling pipeline:
//!
//! - [`CaptureWriter`] decorates the outbound response writer,
//!   transparently forwarding every operation while keeping a copy of the
//!   status code and body bytes.
//! - [`RequestLogger`] decorates an inner handler: it routes the handler's
//!   output through a fresh `CaptureWriter`, then extracts a fixed set of
//!   request and response fields and emits exactly one structured record
//!   per request to the injected sink.
//!
//! ```text
//! caller → RequestLogger → CaptureWriter → inner handler
//!                │                              │
//!                └── HttpInfo ──→ LogSink ←─────┘ (after return)
//! ```
//!
//! The middleware adds no failure modes of its own: transport errors pass
//! through unchanged, and form-parse failures degrade to an empty field
//! rather than surfacing.

#![doc(html_root_url = "https://docs.rs/scribe-middleware/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod capture;
pub mod http_info;
pub mod logger;

// Re-export main types at crate root
pub use capture::CaptureWriter;
pub use http_info::HttpInfo;
pub use logger::RequestLogger;
