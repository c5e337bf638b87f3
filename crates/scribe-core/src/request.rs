//! Buffered view of one inbound HTTP request.
//!
//! [`Request`] carries everything the logger and the inner handler need:
//! method, URI, headers, the fully-buffered body, and the route variables
//! the router extracted. Buffering the body up front keeps capture
//! non-destructive — both the handler and the field extraction read the
//! same bytes.

use crate::params::Params;
use bytes::Bytes;
use http::{header, HeaderMap, Method, Uri};

/// A single inbound request, buffered and ready for handling.
///
/// # Example
///
/// ```rust
/// use scribe_core::{Params, Request};
/// use http::{HeaderMap, Method, Uri};
/// use bytes::Bytes;
///
/// let mut params = Params::new();
/// params.push("id", "42");
///
/// let request = Request::new(
///     Method::GET,
///     Uri::from_static("/items/42?limit=5"),
///     HeaderMap::new(),
///     Bytes::new(),
///     params,
/// );
///
/// assert_eq!(request.path(), "/items/42?limit=5");
/// assert_eq!(request.query_string(), Some("limit=5"));
/// assert_eq!(request.params().get("id"), Some("42"));
/// ```
#[derive(Debug, Clone)]
pub struct Request {
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
    params: Params,
}

impl Request {
    /// Creates a request view from its parts.
    #[must_use]
    pub fn new(method: Method, uri: Uri, headers: HeaderMap, body: Bytes, params: Params) -> Self {
        Self {
            method,
            uri,
            headers,
            body,
            params,
        }
    }

    /// Creates a request view from a buffered `http::Request`.
    ///
    /// Route variables are supplied separately because the router that
    /// extracted them is a collaborator, not part of the request itself.
    #[must_use]
    pub fn from_http(request: http::Request<Bytes>, params: Params) -> Self {
        let (parts, body) = request.into_parts();
        Self::new(parts.method, parts.uri, parts.headers, body, params)
    }

    /// Returns the HTTP method.
    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Returns the request URI.
    #[must_use]
    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    /// Returns the raw request target as received: path plus query,
    /// percent-encoding intact.
    #[must_use]
    pub fn path(&self) -> &str {
        self.uri
            .path_and_query()
            .map_or_else(|| self.uri.path(), http::uri::PathAndQuery::as_str)
    }

    /// Returns the query string, if the URI carries one.
    #[must_use]
    pub fn query_string(&self) -> Option<&str> {
        self.uri.query()
    }

    /// Returns the declared request host.
    ///
    /// Resolution order matches standard HTTP semantics: the `Host` header
    /// first, then the URI authority, then the empty string.
    #[must_use]
    pub fn host(&self) -> &str {
        if let Some(host) = self.headers.get(header::HOST).and_then(|v| v.to_str().ok()) {
            return host;
        }
        self.uri.authority().map_or("", http::uri::Authority::as_str)
    }

    /// Returns the request headers.
    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Returns the buffered request body.
    #[must_use]
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Returns the route variables extracted by the router.
    #[must_use]
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Returns a specific header value as a string, if present and valid
    /// UTF-8.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Returns the Content-Type header value.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get(uri: &'static str) -> Request {
        Request::new(
            Method::GET,
            Uri::from_static(uri),
            HeaderMap::new(),
            Bytes::new(),
            Params::new(),
        )
    }

    #[test]
    fn test_path_keeps_query() {
        let request = get("/items?limit=5");
        assert_eq!(request.path(), "/items?limit=5");
        assert_eq!(request.query_string(), Some("limit=5"));
    }

    #[test]
    fn test_path_keeps_encoding() {
        let request = get("/search?q=hello%20world");
        assert_eq!(request.path(), "/search?q=hello%20world");
    }

    #[test]
    fn test_no_query() {
        let request = get("/items");
        assert_eq!(request.path(), "/items");
        assert_eq!(request.query_string(), None);
    }

    #[test]
    fn test_host_from_header() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, "api.example.com".parse().unwrap());

        let request = Request::new(
            Method::GET,
            Uri::from_static("/"),
            headers,
            Bytes::new(),
            Params::new(),
        );
        assert_eq!(request.host(), "api.example.com");
    }

    #[test]
    fn test_host_from_authority() {
        let request = get("http://upstream.internal:8080/items");
        assert_eq!(request.host(), "upstream.internal:8080");
    }

    #[test]
    fn test_host_absent() {
        let request = get("/items");
        assert_eq!(request.host(), "");
    }

    #[test]
    fn test_from_http() {
        let http_request = http::Request::builder()
            .method(Method::POST)
            .uri("/items")
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Bytes::from_static(b"name=widget"))
            .unwrap();

        let mut params = Params::new();
        params.push("id", "42");

        let request = Request::from_http(http_request, params);
        assert_eq!(request.method(), &Method::POST);
        assert_eq!(
            request.content_type(),
            Some("application/x-www-form-urlencoded")
        );
        assert_eq!(request.body().as_ref(), b"name=widget");
        assert_eq!(request.params().get("id"), Some("42"));
    }
}
