use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Server configuration error")]
    MissingApiKey,

    #[error("Upstream error {status}: {body}")]
    Upstream { status: StatusCode, body: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to serve page")]
    PageUnavailable(#[source] std::io::Error),
}

// Implement alias for Result to simplify usage
pub type AppResult<T> = Result<T, AppError>;

/// Single error boundary per request: every failure is converted to a
/// JSON envelope with an `error` string. Internal details (stack traces,
/// upstream URLs, the key) never reach the caller.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        #[derive(Serialize)]
        struct ErrorBody {
            error: String,
            #[serde(skip_serializing_if = "Option::is_none")]
            details: Option<String>,
        }

        match &self {
            AppError::MethodNotAllowed => {}
            AppError::Upstream { status, body } => {
                tracing::warn!("Upstream error {}: {}", status, body);
            }
            other => tracing::error!("Request failed: {}", other),
        }

        let (status, error, details) = match self {
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                "Method not allowed".to_string(),
                None,
            ),
            AppError::MissingApiKey => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Server configuration error".to_string(),
                None,
            ),
            // Relay the upstream's own status code with its raw text body
            AppError::Upstream { status, body } => (status, body, None),
            AppError::Network(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string(), None),
            AppError::Parse(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string(), None),
            AppError::PageUnavailable(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to serve page".to_string(),
                Some(e.to_string()),
            ),
        };

        (status, Json(ErrorBody { error, details })).into_response()
    }
}
