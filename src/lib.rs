//! HTTP access logging middleware.
//!
//! Two tower layers for an axum pipeline: [`RequestLogLayer`] captures
//! request metadata and body, forwards them unchanged, and logs one line per
//! call; [`ResponseLogLayer`] buffers the response body downstream writes,
//! logs it, and replays the buffered bytes to the real caller. A small demo
//! server ([`HttpServer`]) shows the intended wiring.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod log;
pub mod observability;

pub use config::AppConfig;
pub use http::middleware::{
    AuthenticatedUser, RequestIdLayer, RequestLogLayer, ResponseLogLayer,
};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use log::{RequestRecord, ResponseRecord};
