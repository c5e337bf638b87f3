//! Structured logging bootstrap and the tracing-backed sink.
//!
//! [`init_logging`] installs the process-wide `tracing-subscriber`
//! pipeline (JSON for production, pretty for development). [`TracingSink`]
//! bridges Scribe's [`LogRecord`]s into that pipeline: each record becomes
//! one `tracing` event carrying the namespaced fields as a JSON payload,
//! serialized in emission order.

use crate::config::LogConfig;
use crate::error::TelemetryError;
use scribe_core::{Field, Level, LogRecord, LogSink};
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Event target used for all records emitted through [`TracingSink`].
const TARGET: &str = "scribe";

/// Initializes the logging subsystem.
///
/// # Errors
///
/// Returns [`TelemetryError::LoggingInit`] if the level filter is invalid
/// or a global subscriber is already installed.
pub fn init_logging(config: &LogConfig) -> Result<(), TelemetryError> {
    if !config.enabled {
        return Ok(());
    }

    let filter = EnvFilter::try_new(&config.level)
        .map_err(|e| TelemetryError::LoggingInit(format!("Invalid log level: {e}")))?;

    if config.json_format {
        // JSON format for production
        let fmt_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_file(config.file_line_info)
            .with_line_number(config.file_line_info)
            .with_target(config.include_target)
            .with_filter(filter);

        tracing_subscriber::registry()
            .with(fmt_layer)
            .try_init()
            .map_err(|e| TelemetryError::LoggingInit(e.to_string()))?;
    } else {
        // Pretty format for development
        let fmt_layer = tracing_subscriber::fmt::layer()
            .pretty()
            .with_file(config.file_line_info)
            .with_line_number(config.file_line_info)
            .with_target(config.include_target)
            .with_filter(filter);

        tracing_subscriber::registry()
            .with(fmt_layer)
            .try_init()
            .map_err(|e| TelemetryError::LoggingInit(e.to_string()))?;
    }

    Ok(())
}

/// Sink that forwards records into the `tracing` ecosystem.
///
/// Each record becomes a single event at the record's level, with the
/// namespace label and the ordered field payload attached:
///
/// ```text
/// INFO scribe: http request info namespace="httpInfo" fields={"host":...}
/// ```
///
/// `tracing` field names must be static, so the dynamic field set travels
/// as one JSON-encoded value; downstream JSON log consumers unwrap it by
/// the namespace key.
#[derive(Debug, Clone, Default)]
pub struct TracingSink;

impl TracingSink {
    /// Creates the sink.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl LogSink for TracingSink {
    fn emit(&self, record: LogRecord) {
        let payload = render_fields(&record.fields);
        match record.level {
            Level::Debug => tracing::debug!(
                target: TARGET,
                namespace = record.namespace,
                fields = %payload,
                "{}",
                record.message
            ),
            Level::Info => tracing::info!(
                target: TARGET,
                namespace = record.namespace,
                fields = %payload,
                "{}",
                record.message
            ),
            Level::Warn => tracing::warn!(
                target: TARGET,
                namespace = record.namespace,
                fields = %payload,
                "{}",
                record.message
            ),
            Level::Error => tracing::error!(
                target: TARGET,
                namespace = record.namespace,
                fields = %payload,
                "{}",
                record.message
            ),
        }
    }
}

/// Serializes the ordered field list as a JSON object.
fn render_fields(fields: &[Field]) -> String {
    struct FieldsJson<'a>(&'a [Field]);

    impl Serialize for FieldsJson<'_> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut map = serializer.serialize_map(Some(self.0.len()))?;
            for field in self.0 {
                map.serialize_entry(field.name, &field.value)?;
            }
            map.end()
        }
    }

    serde_json::to_string(&FieldsJson(fields)).unwrap_or_else(|_| "{}".to_string())
}
