use axum::{
    extract::State,
    middleware,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;

use crate::error::Result;
use crate::languages::{resolve_language_code, DecimalSeparator, LanguagePatterns};
use crate::logging::{access_log_middleware, request_id_middleware};
use crate::models::{
    HealthResponse, LanguageInfo, LanguagesResponse, NormalizeRequest, NormalizeResponse,
};
use crate::text_processing::SpokenMathNormalizer;

// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub normalizer: Arc<SpokenMathNormalizer>,
    pub default_language: String,
    pub request_timeout: Duration,
}

/// Normalize a spoken transcript
async fn normalize(
    State(state): State<AppState>,
    Json(req): Json<NormalizeRequest>,
) -> Result<Json<NormalizeResponse>> {
    req.validate()?;

    let requested = req
        .language
        .as_deref()
        .unwrap_or(&state.default_language);
    let language = resolve_language_code(
        requested,
        state.normalizer.registry(),
        &state.default_language,
    );

    let normalized = state.normalizer.normalize(&req.transcript, &language)?;

    tracing::debug!(
        language = %language,
        transcript_chars = req.transcript.chars().count(),
        "Transcript normalized"
    );

    Ok(Json(NormalizeResponse {
        status: "success".to_string(),
        language,
        normalized,
    }))
}

/// List registered languages
async fn list_languages(State(state): State<AppState>) -> Json<LanguagesResponse> {
    let registry = state.normalizer.registry();
    let languages = registry
        .codes()
        .iter()
        .filter_map(|code| registry.get(code))
        .map(|patterns| language_info(&patterns))
        .collect();

    Json(LanguagesResponse {
        default_language: state.default_language.clone(),
        languages,
    })
}

fn language_info(patterns: &LanguagePatterns) -> LanguageInfo {
    LanguageInfo {
        code: patterns.code.clone(),
        name: patterns.name.clone(),
        decimal_separator: match patterns.decimal_separator {
            DecimalSeparator::Period => "period",
            DecimalSeparator::Comma => "comma",
        }
        .to_string(),
    }
}

/// Health check endpoint
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub fn create_router(state: AppState) -> Router<()> {
    // Configure CORS to allow all origins (adjust as needed for production)
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let request_timeout = state.request_timeout;

    Router::new()
        .route("/normalize", post(normalize))
        .route("/languages", get(list_languages))
        .route("/health", get(health_check))
        .with_state(state)
        .layer(TimeoutLayer::new(request_timeout))
        .layer(middleware::from_fn(access_log_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(cors)
}
