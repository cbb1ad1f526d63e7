//! Request logging middleware
//!
//! Logs every request with its status and duration, tagged with a request
//! id that is echoed back in the `x-request-id` response header.

use axum::{
    body::Body,
    extract::Request,
    http::HeaderValue,
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::Instrument;
use uuid::Uuid;

/// Header carrying the request id in both directions
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request id stored in request extensions
#[derive(Clone, Debug)]
pub struct RequestId(pub String);

impl RequestId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Reuse the caller's id when it sent one
    fn from_request(request: &Request) -> Self {
        request
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty())
            .map(|v| Self(v.to_string()))
            .unwrap_or_default()
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

pub async fn log_request(request: Request, next: Next) -> Response<Body> {
    let start = Instant::now();
    let request_id = RequestId::from_request(&request);

    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let query = request.uri().query().map(|q| q.to_string());

    tracing::debug!(
        request_id = %request_id,
        method = %method,
        path = %path,
        query = %query.as_deref().unwrap_or("-"),
        "Incoming request"
    );

    let span = tracing::info_span!(
        "http_request",
        request_id = %request_id,
        method = %method,
        path = %path,
    );
    let mut response = next.run(request).instrument(span).await;

    let status = response.status().as_u16();
    let duration_ms = format!("{:.2}", start.elapsed().as_secs_f64() * 1000.0);

    if response.status().is_server_error() {
        tracing::error!(request_id = %request_id, method = %method, path = %path, status, duration_ms = %duration_ms, "Server error");
    } else if response.status().is_client_error() {
        tracing::warn!(request_id = %request_id, method = %method, path = %path, status, duration_ms = %duration_ms, "Client error");
    } else {
        tracing::info!(request_id = %request_id, method = %method, path = %path, status, duration_ms = %duration_ms, "Request completed");
    }

    if let Ok(value) = HeaderValue::from_str(&request_id.0) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http;

    #[test]
    fn test_request_id_generation() {
        let id = RequestId::new();
        assert_eq!(id.0.len(), 36);
    }

    #[test]
    fn test_incoming_header_is_reused() {
        let request = http::Request::builder()
            .uri("/")
            .header(REQUEST_ID_HEADER, "abc-123")
            .body(Body::empty())
            .unwrap();
        assert_eq!(RequestId::from_request(&request).to_string(), "abc-123");
    }

    #[test]
    fn test_blank_header_is_replaced() {
        let request = http::Request::builder()
            .uri("/")
            .header(REQUEST_ID_HEADER, "")
            .body(Body::empty())
            .unwrap();
        assert_ne!(RequestId::from_request(&request).0, "");
    }
}
