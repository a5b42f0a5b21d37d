use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::fmt;

#[derive(Debug)]
pub enum NormalizerError {
    // I/O errors
    Io(std::io::Error),

    // Language data errors
    UnsupportedLanguage(String),
    PatternCompile { language: String, message: String },
    LanguagePack(String),

    // Request validation errors
    InvalidRequest(String),
    EmptyTranscript,
}

impl fmt::Display for NormalizerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NormalizerError::Io(e) => write!(f, "I/O error: {}", e),
            NormalizerError::UnsupportedLanguage(code) => {
                write!(f, "Unsupported language: {}", code)
            }
            NormalizerError::PatternCompile { language, message } => {
                write!(f, "Pattern compile error for '{}': {}", language, message)
            }
            NormalizerError::LanguagePack(msg) => write!(f, "Language pack error: {}", msg),
            NormalizerError::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
            NormalizerError::EmptyTranscript => write!(f, "Transcript cannot be empty"),
        }
    }
}

impl std::error::Error for NormalizerError {}

// Conversions
impl From<std::io::Error> for NormalizerError {
    fn from(err: std::io::Error) -> Self {
        NormalizerError::Io(err)
    }
}

impl From<serde_json::Error> for NormalizerError {
    fn from(err: serde_json::Error) -> Self {
        NormalizerError::LanguagePack(err.to_string())
    }
}

// Axum integration
impl IntoResponse for NormalizerError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            NormalizerError::EmptyTranscript
            | NormalizerError::InvalidRequest(_)
            | NormalizerError::UnsupportedLanguage(_) => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            _ => {
                tracing::error!("Internal error: {}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (
            status,
            axum::Json(serde_json::json!({
                "status": "error",
                "error": message
            })),
        )
            .into_response()
    }
}

pub type Result<T> = std::result::Result<T, NormalizerError>;
