//! Immutable per-call log records.

use axum::http::{Method, StatusCode, Version};

/// Sentinel rendered for optional fields that are absent (no authenticated
/// user, no User-Agent header, no Content-Type header).
pub const UNKNOWN_FIELD: &str = "-";

/// Snapshot of one request, built after downstream completes so status and
/// duration are known.
#[derive(Debug, Clone)]
pub struct RequestRecord {
    /// Client IP address, or `-` when the connection info is unavailable.
    pub remote_addr: String,

    /// Authenticated user identity, or `-` for anonymous calls.
    pub user: String,

    /// Response status code.
    pub status: StatusCode,

    /// Request method.
    pub method: Method,

    /// Request timestamp, ISO-8601 with offset, millisecond precision.
    pub timestamp: String,

    /// Request path including the query string.
    pub path: String,

    /// Protocol version string (e.g. "HTTP/1.1").
    pub protocol: String,

    /// User-Agent header, or `-` when absent.
    pub user_agent: String,

    /// Request body decoded as text.
    pub payload: String,

    /// Time spent in the downstream stage, whole milliseconds.
    pub duration_ms: u64,
}

/// Snapshot of one response.
#[derive(Debug, Clone)]
pub struct ResponseRecord {
    /// Content-Type header, or `-` when absent.
    pub content_type: String,

    /// Time spent in the downstream stage, whole milliseconds.
    pub duration_ms: u64,

    /// Response body decoded as text.
    pub payload: String,
}

/// Render an HTTP version as the protocol string used in log lines.
pub fn protocol_name(version: Version) -> &'static str {
    match version {
        Version::HTTP_09 => "HTTP/0.9",
        Version::HTTP_10 => "HTTP/1.0",
        Version::HTTP_11 => "HTTP/1.1",
        Version::HTTP_2 => "HTTP/2.0",
        Version::HTTP_3 => "HTTP/3.0",
        _ => UNKNOWN_FIELD,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protocol_names() {
        assert_eq!(protocol_name(Version::HTTP_11), "HTTP/1.1");
        assert_eq!(protocol_name(Version::HTTP_2), "HTTP/2.0");
    }
}
