//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → middleware/ (request ID, request log, response log)
//!     → handlers.rs (demo resource endpoints)
//!     → response replayed to client by the response interceptor
//! ```

pub mod handlers;
pub mod middleware;
pub mod server;

pub use server::HttpServer;
