//! Log line formatters.
//!
//! A formatter is a pure function from a record to a single string. Each
//! interceptor owns exactly one, chosen at construction time; the defaults
//! below are used when the hosting application does not supply its own.

use std::sync::Arc;

use crate::log::record::{RequestRecord, ResponseRecord};

/// Formatter for request-side log lines.
pub type RequestFormatter = Arc<dyn Fn(&RequestRecord) -> String + Send + Sync>;

/// Formatter for response-side log lines.
pub type ResponseFormatter = Arc<dyn Fn(&ResponseRecord) -> String + Send + Sync>;

/// Default request line:
/// `{remote_addr} - {user} {timestamp} "{method} {path} {protocol}" {status} "{user_agent}" {duration_ms}ms \r\n {payload}`
pub fn default_request_format(record: &RequestRecord) -> String {
    format!(
        "{} - {} {} \"{} {} {}\" {} \"{}\" {}ms \r\n {}",
        record.remote_addr,
        record.user,
        record.timestamp,
        record.method,
        record.path,
        record.protocol,
        record.status.as_u16(),
        record.user_agent,
        record.duration_ms,
        record.payload,
    )
}

/// Default response line:
/// `{content_type}\r\n {duration_ms}ms \r\n {payload}`
pub fn default_response_format(record: &ResponseRecord) -> String {
    format!(
        "{}\r\n {}ms \r\n {}",
        record.content_type, record.duration_ms, record.payload,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{Method, StatusCode};
    use crate::log::record::UNKNOWN_FIELD;

    fn sample_request_record() -> RequestRecord {
        RequestRecord {
            remote_addr: "127.0.0.1".into(),
            user: "alice".into(),
            status: StatusCode::OK,
            method: Method::POST,
            timestamp: "2026-08-08T10:15:30.123+00:00".into(),
            path: "/api/values?limit=5".into(),
            protocol: "HTTP/1.1".into(),
            user_agent: "curl/8.5.0".into(),
            payload: "{\"a\":1}".into(),
            duration_ms: 42,
        }
    }

    #[test]
    fn request_line_layout() {
        let line = default_request_format(&sample_request_record());
        assert_eq!(
            line,
            "127.0.0.1 - alice 2026-08-08T10:15:30.123+00:00 \
             \"POST /api/values?limit=5 HTTP/1.1\" 200 \"curl/8.5.0\" 42ms \r\n {\"a\":1}"
        );
    }

    #[test]
    fn request_sentinels_render_as_dash() {
        let mut record = sample_request_record();
        record.user = UNKNOWN_FIELD.into();
        record.user_agent = UNKNOWN_FIELD.into();
        let line = default_request_format(&record);
        assert!(line.contains(" - - "));
        assert!(line.contains("\"-\""));
    }

    #[test]
    fn response_line_layout() {
        let record = ResponseRecord {
            content_type: "text/plain; charset=utf-8".into(),
            duration_ms: 7,
            payload: "GET Success!".into(),
        };
        assert_eq!(
            default_response_format(&record),
            "text/plain; charset=utf-8\r\n 7ms \r\n GET Success!"
        );
    }

    #[test]
    fn formatting_is_idempotent() {
        let record = sample_request_record();
        assert_eq!(
            default_request_format(&record),
            default_request_format(&record)
        );

        let record = ResponseRecord {
            content_type: UNKNOWN_FIELD.into(),
            duration_ms: 0,
            payload: String::new(),
        };
        assert_eq!(
            default_response_format(&record),
            default_response_format(&record)
        );
    }
}
