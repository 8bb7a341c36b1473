//! Demonstration REST surface.
//!
//! A minimal resource endpoint exercising the logging interceptors. Not part
//! of the middleware itself.

use axum::body::Bytes;

/// `GET /api/values`
pub async fn get_values() -> &'static str {
    "GET Success!"
}

/// `POST /api/values`
pub async fn post_values() -> &'static str {
    "POST Success!"
}

/// `POST /api/echo` — returns the request body unchanged.
pub async fn echo(body: Bytes) -> Bytes {
    body
}
