// Gemini proxy handler
use axum::{
    body::Bytes,
    extract::State,
    response::{IntoResponse, Json, Response},
};
use serde_json::{json, Value};
use tracing::{debug, info};

use crate::error::{AppError, AppResult};
use crate::mappers::gemini::extract_text;
use crate::server::AppState;

/// Handle generateContent. The caller's body is forwarded to the
/// upstream byte-for-byte, with the server-held key attached; the body
/// is never inspected or validated on the way out.
pub async fn handle_generate(State(state): State<AppState>, body: Bytes) -> AppResult<Response> {
    info!("Received generateContent request ({} bytes)", body.len());

    // 1. Resolve the key; without it the request is not forwarded
    let api_key = state
        .config
        .gemini_api_key
        .as_ref()
        .ok_or(AppError::MissingApiKey)?;

    // 2. Upstream call
    let response = state
        .upstream
        .generate_content(&state.config.model, api_key, body)
        .await?;

    // 3. Non-2xx is relayed with the upstream's own status and raw body
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(AppError::Upstream { status, body });
    }

    // 4. Best-effort text extraction; a missing path never fails the request
    let payload = response.text().await?;
    let raw: Value = serde_json::from_str(&payload)?;
    let text = extract_text(&raw).map(str::to_owned);

    debug!("generateContent relayed, text extracted: {}", text.is_some());

    Ok(Json(json!({ "text": text, "raw": raw })).into_response())
}
