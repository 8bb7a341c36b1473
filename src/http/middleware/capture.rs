//! Stream capture for the logging interceptors.
//!
//! Request and response bodies are one-shot, forward-only streams: once
//! consumed they cannot be re-read. Both interceptors route the stream
//! through here — the whole body is collected into an owned buffer, the
//! buffer is decoded for the log record, and the same buffer is handed back
//! to the pipeline so the real consumer sees byte-identical content.

use axum::body::{to_bytes, Body, Bytes};

/// Collect an entire body into an in-memory buffer.
///
/// The buffer replaces the original stream in the pipeline, so no length
/// cap is applied here; request-size limits are enforced by the server's
/// body-limit layer before the interceptors run.
pub async fn buffer_body(body: Body) -> Result<Bytes, axum::Error> {
    to_bytes(body, usize::MAX).await
}

/// Decode a captured buffer as text for logging.
///
/// UTF-8 with lossy replacement: the transport does not tell us the
/// encoding, and a log line must never fail because of payload bytes.
pub fn body_text(bytes: &Bytes) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn buffer_preserves_bytes() {
        let payload = b"{\"a\":1}".to_vec();
        let bytes = buffer_body(Body::from(payload.clone())).await.unwrap();
        assert_eq!(bytes.as_ref(), payload.as_slice());
    }

    #[tokio::test]
    async fn empty_body_buffers_to_empty() {
        let bytes = buffer_body(Body::empty()).await.unwrap();
        assert!(bytes.is_empty());
        assert_eq!(body_text(&bytes), "");
    }

    #[test]
    fn non_utf8_decodes_lossily() {
        let bytes = Bytes::from_static(&[0x66, 0x6f, 0xff, 0x6f]);
        assert_eq!(body_text(&bytes), "fo\u{fffd}o");
    }
}
