//! Structured log fields and records.
//!
//! A [`LogRecord`] is one structured entry: a level, a message, and an
//! ordered sequence of named [`Field`]s grouped under a namespace label.
//! Field names and their order are a compatibility surface — downstream
//! log consumers match on them — so records serialize with a hand-written
//! implementation that preserves declaration order instead of going
//! through a sorted map.
//!
//! [`ValueMap`] is the structured value type for map-shaped fields (form
//! values, query parameters, route variables, header collections): an
//! insertion-ordered mapping from name to a sequence of values.

use bytes::Bytes;
use indexmap::IndexMap;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// Standard field names emitted by the request logger.
///
/// Use these constants when matching on emitted records; the names are a
/// compatibility surface shared with downstream log consumers.
pub mod names {
    /// Namespace label grouping all request/response fields.
    pub const NAMESPACE: &str = "httpInfo";

    /// Declared request host.
    pub const HOST: &str = "host";
    /// HTTP verb.
    pub const METHOD: &str = "method";
    /// Raw request target as received.
    pub const PATH: &str = "path";
    /// Body parsed as a URL-encoded form.
    pub const FORM: &str = "form";
    /// Parsed query-string parameters.
    pub const QUERY: &str = "query";
    /// Router-extracted path variables.
    pub const VARS: &str = "vars";
    /// Full raw request body.
    pub const REQUEST_BODY: &str = "requestBody";
    /// Request header collection.
    pub const REQUEST_HEADER: &str = "requestHeader";
    /// Response status code.
    pub const RESPONSE_CODE: &str = "responseCode";
    /// Response header collection.
    pub const RESPONSE_HEADER: &str = "responseHeader";
    /// Full buffered response body.
    pub const RESPONSE_BODY: &str = "responseBody";
}

/// An insertion-ordered mapping from name to a sequence of string values.
///
/// This is the explicit serializable shape for every map-valued log field:
/// form values, query parameters, route variables and header collections
/// all flatten to it. Keys keep the order in which they were appended and
/// serialize as a JSON object in that order.
///
/// # Example
///
/// ```rust
/// use scribe_core::ValueMap;
///
/// let mut map = ValueMap::new();
/// map.append("limit", "5");
/// map.append("tag", "a");
/// map.append("tag", "b");
///
/// assert_eq!(map.get("limit"), Some(&["5".to_string()][..]));
/// assert_eq!(map.get("tag").map(<[String]>::len), Some(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct ValueMap {
    inner: IndexMap<String, Vec<String>>,
}

impl ValueMap {
    /// Creates a new empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a map with the given key capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: IndexMap::with_capacity(capacity),
        }
    }

    /// Appends a value under the given name, keeping earlier values.
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.inner.entry(name.into()).or_default().push(value.into());
    }

    /// Returns the values recorded under a name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.inner.get(name).map(Vec::as_slice)
    }

    /// Returns true if the map holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the number of distinct names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns an iterator over (name, values) pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.inner.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

impl FromIterator<(String, String)> for ValueMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (name, value) in iter {
            map.append(name, value);
        }
        map
    }
}

/// The typed value of a single log field.
///
/// The variants are exactly the value types the sink interface accepts:
/// strings, integers, structured maps and byte-strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// A string value.
    Str(String),
    /// An integer value.
    Int(i64),
    /// A structured name-to-values mapping.
    Map(ValueMap),
    /// A byte-string, rendered as (lossy) UTF-8 text when serialized.
    Bytes(Bytes),
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Str(s) => serializer.serialize_str(s),
            Self::Int(i) => serializer.serialize_i64(*i),
            Self::Map(m) => m.serialize(serializer),
            Self::Bytes(b) => serializer.serialize_str(&String::from_utf8_lossy(b)),
        }
    }
}

/// A named, typed value attached to a single log record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// The field name.
    pub name: &'static str,
    /// The field value.
    pub value: FieldValue,
}

impl Field {
    /// Creates a string field.
    #[must_use]
    pub fn str(name: &'static str, value: impl Into<String>) -> Self {
        Self {
            name,
            value: FieldValue::Str(value.into()),
        }
    }

    /// Creates an integer field.
    #[must_use]
    pub fn int(name: &'static str, value: i64) -> Self {
        Self {
            name,
            value: FieldValue::Int(value),
        }
    }

    /// Creates a structured map field.
    #[must_use]
    pub fn map(name: &'static str, value: ValueMap) -> Self {
        Self {
            name,
            value: FieldValue::Map(value),
        }
    }

    /// Creates a byte-string field.
    #[must_use]
    pub fn bytes(name: &'static str, value: impl Into<Bytes>) -> Self {
        Self {
            name,
            value: FieldValue::Bytes(value.into()),
        }
    }
}

/// Log severity of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Diagnostic detail.
    Debug,
    /// Routine operational events.
    Info,
    /// Unexpected but recoverable conditions.
    Warn,
    /// Failures.
    Error,
}

impl Level {
    /// Returns the lowercase level name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// A single structured log entry.
///
/// Records are created once per request and handed straight to the sink;
/// nothing retains them afterwards. Serialization nests the fields under
/// the namespace label, in the order they were pushed:
///
/// ```json
/// {"level":"info","msg":"...","httpInfo":{"host":"...","method":"..."}}
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    /// Severity of the record.
    pub level: Level,
    /// Human-readable message.
    pub message: String,
    /// Namespace label grouping the fields.
    pub namespace: &'static str,
    /// Named fields, in emission order.
    pub fields: Vec<Field>,
}

impl LogRecord {
    /// Creates a record with no fields yet.
    #[must_use]
    pub fn new(level: Level, message: impl Into<String>, namespace: &'static str) -> Self {
        Self {
            level,
            message: message.into(),
            namespace,
            fields: Vec::new(),
        }
    }

    /// Appends a field, preserving emission order.
    pub fn push(&mut self, field: Field) {
        self.fields.push(field);
    }

    /// Returns the field with the given name, if present.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}

impl Serialize for LogRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        struct Namespaced<'a>(&'a [Field]);

        impl Serialize for Namespaced<'_> {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                let mut map = serializer.serialize_map(Some(self.0.len()))?;
                for field in self.0 {
                    map.serialize_entry(field.name, &field.value)?;
                }
                map.end()
            }
        }

        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry("level", self.level.as_str())?;
        map.serialize_entry("msg", &self.message)?;
        map.serialize_entry(self.namespace, &Namespaced(&self.fields))?;
        map.end()
    }
}
