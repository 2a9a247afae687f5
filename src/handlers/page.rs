// Static page handler
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use tokio::fs;
use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::server::AppState;

/// Serve the configured HTML document as-is. The file carries no key
/// material; the page reaches the API through the proxy route.
pub async fn handle_page(State(state): State<AppState>) -> AppResult<Response> {
    let html = fs::read_to_string(&state.config.page_path)
        .await
        .map_err(AppError::PageUnavailable)?;

    debug!(
        "Served page {} ({} bytes)",
        state.config.page_path,
        html.len()
    );

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        html,
    )
        .into_response())
}
