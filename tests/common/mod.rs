//! Shared utilities for the integration tests.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex, Once};

use tokio::net::TcpListener;

use access_log::config::AppConfig;
use access_log::http::HttpServer;
use access_log::lifecycle::Shutdown;
use access_log::log::{default_request_format, default_response_format, RequestRecord, ResponseRecord};
use access_log::{RequestLogLayer, ResponseLogLayer};

/// The log interceptors emit their records as `tracing` events, so the line
/// formatter (which the capturing layers below hook for their side effect) only
/// runs when a subscriber is interested. In-process tests drive the router
/// directly, where `main`'s subscriber never runs, so install one once here.
static INIT_SUBSCRIBER: Once = Once::new();

fn ensure_subscriber() {
    INIT_SUBSCRIBER.call_once(|| {
        access_log::observability::logging::init(&AppConfig::default().observability);
    });
}

/// Start the demo server on an ephemeral port.
///
/// Returns the bound address and the shutdown handle for teardown.
pub async fn start_server(mut config: AppConfig) -> (SocketAddr, Shutdown) {
    config.listener.bind_address = "127.0.0.1:0".to_string();
    let listener = TcpListener::bind(&config.listener.bind_address)
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(config);
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    (addr, shutdown)
}

/// A request log layer whose formatter also captures each record, so tests
/// can assert on log content without parsing subscriber output.
pub fn capturing_request_layer() -> (RequestLogLayer, Arc<Mutex<Vec<RequestRecord>>>) {
    ensure_subscriber();
    let records = Arc::new(Mutex::new(Vec::new()));
    let sink = records.clone();
    let layer = RequestLogLayer::new().with_formatter(move |record: &RequestRecord| {
        sink.lock().unwrap().push(record.clone());
        default_request_format(record)
    });
    (layer, records)
}

/// Response-side counterpart of [`capturing_request_layer`].
pub fn capturing_response_layer(
    body_limit: usize,
) -> (ResponseLogLayer, Arc<Mutex<Vec<ResponseRecord>>>) {
    ensure_subscriber();
    let records = Arc::new(Mutex::new(Vec::new()));
    let sink = records.clone();
    let layer =
        ResponseLogLayer::new(body_limit).with_formatter(move |record: &ResponseRecord| {
            sink.lock().unwrap().push(record.clone());
            default_response_format(record)
        });
    (layer, records)
}
