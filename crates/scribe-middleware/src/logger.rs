//! The request-logging middleware.
//!
//! [`RequestLogger`] decorates an inner [`Handler`]: each request runs
//! through a fresh [`CaptureWriter`], and once the inner handler returns,
//! one structured record is assembled and emitted to the injected sink.

use crate::capture::CaptureWriter;
use crate::http_info::HttpInfo;
use scribe_core::{BoxFuture, Handler, LogSink, Request, ResponseWriter};
use std::io;
use std::sync::Arc;

/// Middleware that emits one structured log record per handled request.
///
/// The sink is an explicit constructor dependency; the logger holds no
/// global state and may be invoked concurrently across requests, each of
/// which gets its own capture writer.
///
/// The record is emitted after the inner handler returns — never before,
/// and exactly once — regardless of the status code it produced or whether
/// it surfaced a transport error. Handler errors are returned to the
/// caller unchanged.
///
/// # Example
///
/// ```rust
/// use scribe_core::{FnHandler, MemorySink, Handler, ResponseBuffer, Params, Request};
/// use scribe_middleware::RequestLogger;
/// use bytes::Bytes;
/// use http::{HeaderMap, Method, Uri};
/// use std::sync::Arc;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> std::io::Result<()> {
/// let sink = Arc::new(MemorySink::new());
/// let handler = RequestLogger::new(
///     Arc::new(FnHandler::new(|_req, writer| {
///         Box::pin(async move {
///             writer.write(b"hello")?;
///             Ok(())
///         })
///     })),
///     sink.clone(),
/// );
///
/// let request = Request::new(
///     Method::GET,
///     Uri::from_static("/hello"),
///     HeaderMap::new(),
///     Bytes::new(),
///     Params::new(),
/// );
/// let mut response = ResponseBuffer::new();
/// handler.handle(&request, &mut response).await?;
///
/// assert_eq!(sink.len(), 1);
/// # Ok(())
/// # }
/// ```
pub struct RequestLogger {
    inner: Arc<dyn Handler>,
    sink: Arc<dyn LogSink>,
}

impl RequestLogger {
    /// Wraps `inner` so that every request it handles is logged to `sink`.
    #[must_use]
    pub fn new(inner: Arc<dyn Handler>, sink: Arc<dyn LogSink>) -> Self {
        Self { inner, sink }
    }
}

impl Handler for RequestLogger {
    fn handle<'a>(
        &'a self,
        request: &'a Request,
        writer: &'a mut (dyn ResponseWriter + Send),
    ) -> BoxFuture<'a, io::Result<()>> {
        Box::pin(async move {
            let mut capture = CaptureWriter::new(writer);
            let result = self.inner.handle(request, &mut capture).await;

            self.sink.emit(HttpInfo::new(request, &capture).record());

            result
        })
    }
}
