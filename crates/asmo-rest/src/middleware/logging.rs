//! Request logging middleware.

use axum::{body::Body, http::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::{error, info, info_span, warn, Instrument};

/// Header carrying the request id, set by `SetRequestIdLayer`.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Logs method, path, status and duration of every request inside a span
/// tagged with the request id.
pub async fn logging_middleware(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string();
    let start = Instant::now();

    let span = info_span!("request", request_id = %request_id);
    let response = next.run(request).instrument(span).await;

    let duration_ms = start.elapsed().as_millis();
    let status = response.status().as_u16();

    if response.status().is_server_error() {
        error!(target: "http", request_id = %request_id, method = %method, path = %path, status, duration_ms, "HTTP request failed");
    } else if response.status().is_client_error() {
        warn!(target: "http", request_id = %request_id, method = %method, path = %path, status, duration_ms, "HTTP request rejected");
    } else {
        info!(target: "http", request_id = %request_id, method = %method, path = %path, status, duration_ms, "HTTP request completed");
    }

    response
}
