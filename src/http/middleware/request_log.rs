//! Request logging interceptor.
//!
//! Wraps the call before it reaches downstream handlers: captures request
//! metadata and the request body, forwards both unchanged, and emits one
//! formatted line on the `request_log` target once downstream has completed
//! (so status and duration are known).

use std::future::Future;
use std::net::SocketAddr;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use std::time::Instant;

use axum::{
    body::Body,
    extract::ConnectInfo,
    http::{header, Request, Response, StatusCode},
};
use chrono::Local;
use tower::{Layer, Service};
use tracing::{error, info};

use crate::http::middleware::capture;
use crate::log::format::{default_request_format, RequestFormatter};
use crate::log::record::{protocol_name, RequestRecord, UNKNOWN_FIELD};

/// Authenticated identity attached to a request by the hosting application.
///
/// Absent on anonymous calls; the log record then shows `-`.
#[derive(Clone, Debug)]
pub struct AuthenticatedUser(pub String);

/// Layer that logs each request with its body payload.
///
/// The formatter is resolved once at construction and applies to every call
/// handled by services built from this layer.
#[derive(Clone)]
pub struct RequestLogLayer {
    formatter: RequestFormatter,
}

impl RequestLogLayer {
    /// Create a layer using the built-in line format.
    pub fn new() -> Self {
        Self {
            formatter: Arc::new(default_request_format),
        }
    }

    /// Replace the line format with a custom formatter.
    pub fn with_formatter<F>(mut self, formatter: F) -> Self
    where
        F: Fn(&RequestRecord) -> String + Send + Sync + 'static,
    {
        self.formatter = Arc::new(formatter);
        self
    }

    /// Get the formatter this layer installs into its services.
    pub fn formatter(&self) -> &RequestFormatter {
        &self.formatter
    }
}

impl Default for RequestLogLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Layer<S> for RequestLogLayer {
    type Service = RequestLogService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        RequestLogService {
            inner,
            formatter: self.formatter.clone(),
        }
    }
}

/// Service produced by [`RequestLogLayer`].
#[derive(Clone)]
pub struct RequestLogService<S> {
    inner: S,
    formatter: RequestFormatter,
}

impl<S> Service<Request<Body>> for RequestLogService<S>
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
        // The future must own a service, and it must be the one that was
        // polled ready; self keeps the fresh clone.
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);
        let formatter = self.formatter.clone();

        Box::pin(async move {
            let timestamp = Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z").to_string();

            let remote_addr = req
                .extensions()
                .get::<ConnectInfo<SocketAddr>>()
                .map(|ConnectInfo(addr)| addr.ip().to_string())
                .unwrap_or_else(|| UNKNOWN_FIELD.to_string());
            let user = req
                .extensions()
                .get::<AuthenticatedUser>()
                .map(|u| u.0.clone())
                .unwrap_or_else(|| UNKNOWN_FIELD.to_string());
            let method = req.method().clone();
            let path = req
                .uri()
                .path_and_query()
                .map(|pq| pq.as_str().to_string())
                .unwrap_or_else(|| req.uri().path().to_string());
            let protocol = protocol_name(req.version()).to_string();
            let user_agent = req
                .headers()
                .get(header::USER_AGENT)
                .and_then(|v| v.to_str().ok())
                .unwrap_or(UNKNOWN_FIELD)
                .to_string();

            // Capture before forwarding: downstream consumes the body, so it
            // must already be the replayed buffer by then.
            let (parts, body) = req.into_parts();
            let bytes = match capture::buffer_body(body).await {
                Ok(bytes) => bytes,
                Err(err) => {
                    error!(error = %err, "Failed to buffer request body");
                    let mut response = Response::new(Body::empty());
                    *response.status_mut() = StatusCode::BAD_REQUEST;
                    return Ok(response);
                }
            };
            let payload = capture::body_text(&bytes);
            let req = Request::from_parts(parts, Body::from(bytes));

            let start = Instant::now();
            let response = inner.call(req).await?;
            let duration_ms = start.elapsed().as_millis() as u64;

            let record = RequestRecord {
                remote_addr,
                user,
                status: response.status(),
                method,
                timestamp,
                path,
                protocol,
                user_agent,
                payload,
                duration_ms,
            };
            info!(target: "request_log", "{}", (formatter)(&record));

            Ok(response)
        })
    }
}
