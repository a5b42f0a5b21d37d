use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use spoken_math::server::{create_router, AppState};
use spoken_math::SpokenMathNormalizer;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

fn app() -> Router {
    let state = AppState {
        normalizer: Arc::new(SpokenMathNormalizer::with_builtin_languages().unwrap()),
        default_language: "en".to_string(),
        request_timeout: Duration::from_secs(10),
    };
    create_router(state)
}

fn post_normalize(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/normalize")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn read_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_normalize_endpoint() {
    let response = app()
        .oneshot(post_normalize(json!({
            "transcript": "add ten percent to two hundred"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["status"], "success");
    assert_eq!(body["language"], "en");
    assert_eq!(body["normalized"], "(200 * (1 + 10 / 100))");
}

#[tokio::test]
async fn test_normalize_regional_locale_falls_back_to_primary() {
    let response = app()
        .oneshot(post_normalize(json!({
            "transcript": "trois quarts de 100",
            "language": "fr-CA"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["language"], "fr");
    assert_eq!(body["normalized"], "((3/4) * 100)");
}

#[tokio::test]
async fn test_normalize_unknown_language_uses_default() {
    let response = app()
        .oneshot(post_normalize(json!({
            "transcript": "5 plus 3",
            "language": "xx"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["language"], "en");
    assert_eq!(body["normalized"], "5 + 3");
}

#[tokio::test]
async fn test_normalize_empty_transcript_rejected() {
    let response = app()
        .oneshot(post_normalize(json!({ "transcript": "   " })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json(response).await;
    assert_eq!(body["status"], "error");
    assert_eq!(body["error"], "Transcript cannot be empty");
}

#[tokio::test]
async fn test_list_languages() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/languages")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["default_language"], "en");

    let languages = body["languages"].as_array().unwrap();
    assert_eq!(languages.len(), 6);
    assert_eq!(languages[0]["code"], "de");
    assert_eq!(languages[0]["decimal_separator"], "comma");
    assert_eq!(languages[1]["code"], "en");
    assert_eq!(languages[1]["name"], "English");
}

#[tokio::test]
async fn test_health_check() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_request_id_header_returned() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/health")
                .header("X-Request-ID", "client-req-42")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response.headers().get("X-Request-ID").unwrap(),
        "client-req-42"
    );
}
