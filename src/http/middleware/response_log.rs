//! Response logging interceptor.
//!
//! Wraps the call so downstream writes land in a private buffer instead of
//! the wire. After downstream completes the buffer is decoded for the log
//! record and then replayed, byte-for-byte, as the real response body. The
//! replay happens unconditionally; only the log line is subject to the size
//! gate.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use std::time::Instant;

use axum::{
    body::Body,
    http::{header, Request, Response, StatusCode},
};
use tower::{Layer, Service};
use tracing::{error, info};

use crate::http::middleware::capture;
use crate::log::format::{default_response_format, ResponseFormatter};
use crate::log::record::{ResponseRecord, UNKNOWN_FIELD};

/// Response payloads at or above this many characters are delivered but not
/// logged.
pub const DEFAULT_RESPONSE_BODY_LIMIT: usize = 2048;

/// Layer that logs each response body after buffering it.
#[derive(Clone)]
pub struct ResponseLogLayer {
    formatter: ResponseFormatter,
    body_limit: usize,
}

impl ResponseLogLayer {
    /// Create a layer with the given size gate, using the built-in line
    /// format.
    pub fn new(body_limit: usize) -> Self {
        Self {
            formatter: Arc::new(default_response_format),
            body_limit,
        }
    }

    /// Replace the line format with a custom formatter.
    pub fn with_formatter<F>(mut self, formatter: F) -> Self
    where
        F: Fn(&ResponseRecord) -> String + Send + Sync + 'static,
    {
        self.formatter = Arc::new(formatter);
        self
    }

    /// Get the formatter this layer installs into its services.
    pub fn formatter(&self) -> &ResponseFormatter {
        &self.formatter
    }
}

impl Default for ResponseLogLayer {
    fn default() -> Self {
        Self::new(DEFAULT_RESPONSE_BODY_LIMIT)
    }
}

impl<S> Layer<S> for ResponseLogLayer {
    type Service = ResponseLogService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        ResponseLogService {
            inner,
            formatter: self.formatter.clone(),
            body_limit: self.body_limit,
        }
    }
}

/// Service produced by [`ResponseLogLayer`].
#[derive(Clone)]
pub struct ResponseLogService<S> {
    inner: S,
    formatter: ResponseFormatter,
    body_limit: usize,
}

impl<S> Service<Request<Body>> for ResponseLogService<S>
where
    S: Service<Request<Body>, Response = Response<Body>> + Clone + Send + 'static,
    S::Future: Send + 'static,
{
    type Response = Response<Body>;
    type Error = S::Error;
    type Future =
        Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send + 'static>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);
        let formatter = self.formatter.clone();
        let body_limit = self.body_limit;

        Box::pin(async move {
            let start = Instant::now();
            // Downstream failures propagate unchanged; there is no buffered
            // state yet to restore.
            let response = inner.call(req).await?;
            let duration_ms = start.elapsed().as_millis() as u64;

            let (parts, body) = response.into_parts();
            let content_type = parts
                .headers
                .get(header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .unwrap_or(UNKNOWN_FIELD)
                .to_string();

            let bytes = match capture::buffer_body(body).await {
                Ok(bytes) => bytes,
                Err(err) => {
                    // The original stream is already consumed; a clean 500
                    // beats a truncated body on the wire.
                    error!(error = %err, "Failed to buffer response body");
                    let mut response = Response::new(Body::empty());
                    *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
                    return Ok(response);
                }
            };
            let payload = capture::body_text(&bytes);

            if payload.chars().count() < body_limit {
                let record = ResponseRecord {
                    content_type,
                    duration_ms,
                    payload,
                };
                info!(target: "response_log", "{}", (formatter)(&record));
            }

            // Replay: this delivers the buffered bytes to the real caller,
            // gated or not.
            Ok(Response::from_parts(parts, Body::from(bytes)))
        })
    }
}
