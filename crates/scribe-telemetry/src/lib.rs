//! # Scribe Telemetry
//!
//! Logging bootstrap and the production sink for the Scribe middleware.
//!
//! This crate owns the two process-level concerns that the middleware
//! itself deliberately does not:
//!
//! - **Bootstrap**: [`init_logging`] installs the global
//!   `tracing-subscriber` pipeline from a [`LogConfig`] (JSON output for
//!   production, pretty output for development).
//! - **Emission**: [`TracingSink`] implements `scribe_core::LogSink` by
//!   turning each record into one `tracing` event, keeping the namespaced
//!   fields in emission order.
//!
//! # Example
//!
//! ```rust,ignore
//! use scribe_telemetry::{init_logging, LogConfig, TracingSink};
//! use scribe_middleware::RequestLogger;
//! use std::sync::Arc;
//!
//! init_logging(&LogConfig::production())?;
//!
//! let logger = RequestLogger::new(inner_handler, Arc::new(TracingSink::new()));
//! ```

#![doc(html_root_url = "https://docs.rs/scribe-telemetry/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod logging;

// Re-export main types at crate root
pub use config::LogConfig;
pub use error::TelemetryError;
pub use logging::{init_logging, TracingSink};
