use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use lazy_static::lazy_static;
use std::time::Instant;
use uuid::Uuid;

use super::config::LogConfig;

lazy_static! {
    /// Slow-request threshold in milliseconds, `None` when disabled
    static ref SLOW_REQUEST_THRESHOLD_MS: Option<u64> = {
        let config = LogConfig::from_env();
        config
            .log_slow_requests
            .then_some(config.slow_request_threshold_ms)
    };
}

/// Request ID wrapper for tracking requests through the system
#[derive(Clone, Debug)]
pub struct RequestId(pub String);

/// Middleware to generate unique request IDs for correlation
///
/// A client-supplied `X-Request-ID` is kept; otherwise a UUID v4 is used.
pub async fn request_id_middleware(mut req: Request, next: Next) -> Response {
    let request_id = req
        .headers()
        .get("X-Request-ID")
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(|s| s.to_string())
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    req.extensions_mut().insert(RequestId(request_id.clone()));

    let mut response = next.run(req).await;

    if let Ok(header_value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert("X-Request-ID", header_value);
    }

    response
}

/// Middleware to log every HTTP request under the `access_log` target
pub async fn access_log_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();

    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let query = req.uri().query().map(|q| q.to_string());

    let request_id = req
        .extensions()
        .get::<RequestId>()
        .map(|id| id.0.clone())
        .unwrap_or_else(|| "unknown".to_string());

    let user_agent = req
        .headers()
        .get("user-agent")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    let response = next.run(req).await;

    let status = response.status();
    let duration_ms = start.elapsed().as_millis() as u64;

    let bytes_sent = response
        .headers()
        .get("content-length")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(0);

    tracing::info!(
        target: "access_log",
        request_id = %request_id,
        method = %method,
        path = %path,
        query = ?query,
        status = status.as_u16(),
        duration_ms = duration_ms,
        bytes_sent = bytes_sent,
        user_agent = %user_agent,
        "HTTP request completed"
    );

    if let Some(threshold_ms) = *SLOW_REQUEST_THRESHOLD_MS {
        if duration_ms > threshold_ms {
            tracing::warn!(
                request_id = %request_id,
                path = %path,
                duration_ms = duration_ms,
                threshold_ms = threshold_ms,
                "Slow request detected"
            );
        }
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, middleware, routing::get, Extension, Router};
    use tower::ServiceExt;

    fn app() -> Router {
        Router::new()
            .route(
                "/",
                get(|Extension(id): Extension<RequestId>| async move { id.0 }),
            )
            .layer(middleware::from_fn(access_log_middleware))
            .layer(middleware::from_fn(request_id_middleware))
    }

    #[tokio::test]
    async fn test_request_id_generated() {
        let response = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let id = response.headers().get("X-Request-ID").unwrap().to_str().unwrap();
        assert_eq!(id.len(), 36);
        assert_eq!(id.matches('-').count(), 4);
    }

    #[tokio::test]
    async fn test_request_id_echoed() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header("X-Request-ID", "test-id-123")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.headers().get("X-Request-ID").unwrap(), "test-id-123");
    }

    #[test]
    fn test_request_id_wrapper() {
        let id = RequestId("test-id-123".to_string());
        assert_eq!(id.clone().0, "test-id-123");
    }
}
