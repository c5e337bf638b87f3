//! The inner-handler trait.
//!
//! A [`Handler`] consumes a [`Request`] and produces its response by
//! writing into a [`ResponseWriter`]. Middleware decorates handlers by
//! implementing the same trait and delegating — the capability set stays
//! identical all the way down the chain.

use crate::request::Request;
use crate::writer::ResponseWriter;
use std::future::Future;
use std::io;
use std::pin::Pin;
use std::sync::Arc;

/// A boxed future returned by handlers.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// An HTTP request handler that writes its response.
///
/// The `io::Result` carries transport failures from the writer: a handler
/// that sees a failed [`ResponseWriter::write`] propagates it with `?` and
/// the failure surfaces to whoever invoked the handler, unchanged.
///
/// # Example
///
/// ```rust
/// use scribe_core::{BoxFuture, Handler, Request, ResponseWriter};
/// use http::StatusCode;
/// use std::io;
///
/// struct NotFound;
///
/// impl Handler for NotFound {
///     fn handle<'a>(
///         &'a self,
///         _request: &'a Request,
///         writer: &'a mut (dyn ResponseWriter + Send),
///     ) -> BoxFuture<'a, io::Result<()>> {
///         Box::pin(async move {
///             writer.write_status(StatusCode::NOT_FOUND);
///             writer.write(b"not found")?;
///             Ok(())
///         })
///     }
/// }
/// ```
pub trait Handler: Send + Sync {
    /// Handles one request, writing the response into `writer`.
    fn handle<'a>(
        &'a self,
        request: &'a Request,
        writer: &'a mut (dyn ResponseWriter + Send),
    ) -> BoxFuture<'a, io::Result<()>>;
}

impl<H: Handler + ?Sized> Handler for Arc<H> {
    fn handle<'a>(
        &'a self,
        request: &'a Request,
        writer: &'a mut (dyn ResponseWriter + Send),
    ) -> BoxFuture<'a, io::Result<()>> {
        (**self).handle(request, writer)
    }
}

/// A handler built from an async closure.
///
/// This allows defining simple handlers without implementing the trait
/// directly. The closure must return a boxed future because the writer
/// borrow flows into it.
///
/// # Example
///
/// ```rust
/// use scribe_core::FnHandler;
///
/// let handler = FnHandler::new(|_request, writer| {
///     Box::pin(async move {
///         writer.write(b"hello")?;
///         Ok(())
///     })
/// });
/// # let _ = handler;
/// ```
pub struct FnHandler<F> {
    func: F,
}

impl<F> FnHandler<F>
where
    F: for<'a> Fn(
            &'a Request,
            &'a mut (dyn ResponseWriter + Send),
        ) -> BoxFuture<'a, io::Result<()>>
        + Send
        + Sync,
{
    /// Creates a new function-based handler.
    pub const fn new(func: F) -> Self {
        Self { func }
    }
}

impl<F> Handler for FnHandler<F>
where
    F: for<'a> Fn(
            &'a Request,
            &'a mut (dyn ResponseWriter + Send),
        ) -> BoxFuture<'a, io::Result<()>>
        + Send
        + Sync,
{
    fn handle<'a>(
        &'a self,
        request: &'a Request,
        writer: &'a mut (dyn ResponseWriter + Send),
    ) -> BoxFuture<'a, io::Result<()>> {
        (self.func)(request, writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Params, ResponseBuffer};
    use bytes::Bytes;
    use http::{HeaderMap, Method, StatusCode, Uri};

    fn test_request() -> Request {
        Request::new(
            Method::GET,
            Uri::from_static("/test"),
            HeaderMap::new(),
            Bytes::new(),
            Params::new(),
        )
    }

    #[tokio::test]
    async fn test_fn_handler_writes_response() {
        let handler = FnHandler::new(|_request, writer| {
            Box::pin(async move {
                writer.write_status(StatusCode::ACCEPTED);
                writer.write(b"queued")?;
                Ok(())
            })
        });

        let request = test_request();
        let mut buffer = ResponseBuffer::new();
        handler.handle(&request, &mut buffer).await.unwrap();

        assert_eq!(buffer.status(), StatusCode::ACCEPTED);
        assert_eq!(buffer.body(), b"queued");
    }

    #[tokio::test]
    async fn test_arc_handler_delegates() {
        let handler: Arc<dyn Handler> = Arc::new(FnHandler::new(|_request, writer| {
            Box::pin(async move {
                writer.write(b"via arc")?;
                Ok(())
            })
        }));

        let request = test_request();
        let mut buffer = ResponseBuffer::new();
        handler.handle(&request, &mut buffer).await.unwrap();

        assert_eq!(buffer.body(), b"via arc");
    }
}
