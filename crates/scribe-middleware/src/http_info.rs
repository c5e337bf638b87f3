//! Field extraction for the request log record.
//!
//! [`HttpInfo`] is an ephemeral, read-only view over a request and the
//! capture writer that observed its response. It exists only long enough
//! to assemble one [`LogRecord`]; nothing it does is observable to the
//! handler or the caller.
//!
//! Field names and extraction order are a compatibility surface (see
//! [`scribe_core::names`]); `record` emits all eleven fields every time,
//! empty or not.

use crate::capture::CaptureWriter;
use bytes::Bytes;
use http::HeaderMap;
use scribe_core::{names, Field, Level, LogRecord, Request, ResponseWriter, ValueMap};

/// Message string carried by every request record.
const MESSAGE: &str = "http request info";

/// Read-only view assembling the per-request log record.
pub struct HttpInfo<'a, 'w, W: ResponseWriter + ?Sized> {
    request: &'a Request,
    writer: &'a CaptureWriter<'w, W>,
}

impl<'a, 'w, W: ResponseWriter + ?Sized> HttpInfo<'a, 'w, W> {
    /// Creates the view over a handled request and its capture writer.
    pub fn new(request: &'a Request, writer: &'a CaptureWriter<'w, W>) -> Self {
        Self { request, writer }
    }

    fn host(&self) -> Field {
        Field::str(names::HOST, self.request.host())
    }

    fn method(&self) -> Field {
        Field::str(names::METHOD, self.request.method().as_str())
    }

    fn path(&self) -> Field {
        Field::str(names::PATH, self.request.path())
    }

    fn form(&self) -> Field {
        // Only a URL-encoded body is a form; parse failures are swallowed
        // and an empty map is logged instead.
        let mut map = ValueMap::new();
        if has_form_content_type(self.request) {
            if let Ok(body) = std::str::from_utf8(self.request.body()) {
                if let Some(parsed) = parse_pairs(body) {
                    map = parsed;
                }
            }
        }
        Field::map(names::FORM, map)
    }

    fn query(&self) -> Field {
        let map = self
            .request
            .query_string()
            .and_then(parse_pairs)
            .unwrap_or_default();
        Field::map(names::QUERY, map)
    }

    fn vars(&self) -> Field {
        Field::map(names::VARS, self.request.params().to_value_map())
    }

    fn request_body(&self) -> Field {
        Field::str(
            names::REQUEST_BODY,
            String::from_utf8_lossy(self.request.body()),
        )
    }

    fn request_header(&self) -> Field {
        Field::map(names::REQUEST_HEADER, header_values(self.request.headers()))
    }

    fn response_code(&self) -> Field {
        Field::int(names::RESPONSE_CODE, i64::from(self.writer.status().as_u16()))
    }

    fn response_header(&self) -> Field {
        Field::map(names::RESPONSE_HEADER, header_values(self.writer.headers()))
    }

    fn response_body(&self) -> Field {
        Field::bytes(
            names::RESPONSE_BODY,
            Bytes::copy_from_slice(self.writer.body()),
        )
    }

    /// Assembles the record. Extraction order defines field order.
    #[must_use]
    pub fn record(&self) -> LogRecord {
        let mut record = LogRecord::new(Level::Info, MESSAGE, names::NAMESPACE);
        record.push(self.host());
        record.push(self.method());
        record.push(self.path());
        record.push(self.form());
        record.push(self.query());
        record.push(self.vars());
        record.push(self.request_body());
        record.push(self.request_header());
        record.push(self.response_code());
        record.push(self.response_header());
        record.push(self.response_body());
        record
    }
}

/// True if the request declares a URL-encoded form body.
fn has_form_content_type(request: &Request) -> bool {
    request
        .content_type()
        .and_then(|ct| ct.split(';').next())
        .is_some_and(|mime| {
            mime.trim()
                .eq_ignore_ascii_case("application/x-www-form-urlencoded")
        })
}

/// Parses a URL-encoded pair list into a [`ValueMap`], `None` on failure.
fn parse_pairs(input: &str) -> Option<ValueMap> {
    serde_urlencoded::from_str::<Vec<(String, String)>>(input)
        .ok()
        .map(|pairs| pairs.into_iter().collect())
}

/// Flattens a header collection into name-to-values pairs, in map order.
fn header_values(headers: &HeaderMap) -> ValueMap {
    let mut map = ValueMap::new();
    for name in headers.keys() {
        for value in headers.get_all(name) {
            map.append(name.as_str(), String::from_utf8_lossy(value.as_bytes()));
        }
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::{HeaderMap, Method, StatusCode, Uri};
    use scribe_core::{FieldValue, Params, ResponseBuffer};

    fn request(method: Method, uri: &'static str, headers: HeaderMap, body: &[u8]) -> Request {
        Request::new(
            method,
            Uri::from_static(uri),
            headers,
            Bytes::copy_from_slice(body),
            Params::new(),
        )
    }

    fn map_field(record: &LogRecord, name: &str) -> ValueMap {
        match &record.field(name).expect("field missing").value {
            FieldValue::Map(m) => m.clone(),
            other => panic!("expected map for {name}, got {other:?}"),
        }
    }

    #[test]
    fn test_record_has_all_fields_in_order() {
        let req = request(Method::GET, "/items", HeaderMap::new(), b"");
        let mut real = ResponseBuffer::new();
        let capture = CaptureWriter::new(&mut real);

        let record = HttpInfo::new(&req, &capture).record();

        let order: Vec<_> = record.fields.iter().map(|f| f.name).collect();
        assert_eq!(
            order,
            vec![
                "host",
                "method",
                "path",
                "form",
                "query",
                "vars",
                "requestBody",
                "requestHeader",
                "responseCode",
                "responseHeader",
                "responseBody",
            ]
        );
        assert_eq!(record.message, "http request info");
        assert_eq!(record.namespace, "httpInfo");
    }

    #[test]
    fn test_query_parsing() {
        let req = request(Method::GET, "/items?limit=5&tag=a&tag=b", HeaderMap::new(), b"");
        let mut real = ResponseBuffer::new();
        let capture = CaptureWriter::new(&mut real);

        let record = HttpInfo::new(&req, &capture).record();
        let query = map_field(&record, "query");

        assert_eq!(query.get("limit"), Some(&["5".to_string()][..]));
        assert_eq!(
            query.get("tag"),
            Some(&["a".to_string(), "b".to_string()][..])
        );
    }

    #[test]
    fn test_missing_query_logs_empty_map() {
        let req = request(Method::GET, "/items", HeaderMap::new(), b"");
        let mut real = ResponseBuffer::new();
        let capture = CaptureWriter::new(&mut real);

        let record = HttpInfo::new(&req, &capture).record();
        assert!(map_field(&record, "query").is_empty());
    }

    #[test]
    fn test_form_parsing_with_content_type() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "content-type",
            "application/x-www-form-urlencoded; charset=utf-8".parse().unwrap(),
        );
        let req = request(Method::POST, "/items", headers, b"name=widget&qty=3");
        let mut real = ResponseBuffer::new();
        let capture = CaptureWriter::new(&mut real);

        let record = HttpInfo::new(&req, &capture).record();
        let form = map_field(&record, "form");

        assert_eq!(form.get("name"), Some(&["widget".to_string()][..]));
        assert_eq!(form.get("qty"), Some(&["3".to_string()][..]));
    }

    #[test]
    fn test_form_ignored_without_form_content_type() {
        let mut headers = HeaderMap::new();
        headers.insert("content-type", "application/json".parse().unwrap());
        let req = request(Method::POST, "/items", headers, b"{\"name\":\"widget\"}");
        let mut real = ResponseBuffer::new();
        let capture = CaptureWriter::new(&mut real);

        let record = HttpInfo::new(&req, &capture).record();
        assert!(map_field(&record, "form").is_empty());

        // The raw body is still logged as requestBody.
        assert_eq!(
            record.field("requestBody").unwrap().value,
            FieldValue::Str("{\"name\":\"widget\"}".to_string())
        );
    }

    #[test]
    fn test_malformed_form_is_swallowed() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "content-type",
            "application/x-www-form-urlencoded".parse().unwrap(),
        );
        let req = request(Method::POST, "/items", headers, b"name=%zz%");
        let mut real = ResponseBuffer::new();
        let capture = CaptureWriter::new(&mut real);

        let record = HttpInfo::new(&req, &capture).record();
        assert!(map_field(&record, "form").is_empty());
    }

    #[test]
    fn test_vars_as_single_element_lists() {
        let mut params = Params::new();
        params.push("id", "42");
        let req = Request::new(
            Method::GET,
            Uri::from_static("/items/42"),
            HeaderMap::new(),
            Bytes::new(),
            params,
        );
        let mut real = ResponseBuffer::new();
        let capture = CaptureWriter::new(&mut real);

        let record = HttpInfo::new(&req, &capture).record();
        let vars = map_field(&record, "vars");
        assert_eq!(vars.get("id"), Some(&["42".to_string()][..]));
    }

    #[test]
    fn test_response_fields_reflect_capture() {
        let req = request(Method::GET, "/items/42", HeaderMap::new(), b"");
        let mut real = ResponseBuffer::new();
        let mut capture = CaptureWriter::new(&mut real);

        capture.write_status(StatusCode::NOT_FOUND);
        capture
            .headers_mut()
            .insert("content-type", "text/plain".parse().unwrap());
        capture.write(b"not found").unwrap();

        let record = HttpInfo::new(&req, &capture).record();

        assert_eq!(
            record.field("responseCode").unwrap().value,
            FieldValue::Int(404)
        );
        assert_eq!(
            record.field("responseBody").unwrap().value,
            FieldValue::Bytes(Bytes::from_static(b"not found"))
        );
        let response_header = map_field(&record, "responseHeader");
        assert_eq!(
            response_header.get("content-type"),
            Some(&["text/plain".to_string()][..])
        );
    }

    #[test]
    fn test_repeated_request_headers_keep_all_values() {
        let mut headers = HeaderMap::new();
        headers.append("accept", "text/html".parse().unwrap());
        headers.append("accept", "application/json".parse().unwrap());
        let req = request(Method::GET, "/", headers, b"");
        let mut real = ResponseBuffer::new();
        let capture = CaptureWriter::new(&mut real);

        let record = HttpInfo::new(&req, &capture).record();
        let request_header = map_field(&record, "requestHeader");
        assert_eq!(
            request_header.get("accept"),
            Some(&["text/html".to_string(), "application/json".to_string()][..])
        );
    }
}
