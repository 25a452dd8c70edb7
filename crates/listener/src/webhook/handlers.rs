use axum::{
    extract::{rejection::StringRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{info, warn};

use crate::error::WebhookError;

use super::{
    state::AppState,
    types::{HealthStatus, WebhookAck},
    utils::json_reply,
};

/// Handle incoming webhook notifications by echoing the raw body back
pub async fn handle_webhook(
    State(state): State<AppState>,
    body: Result<String, StringRejection>,
) -> Response {
    match body.map_err(WebhookError::from) {
        Ok(payload) => {
            // Debug escapes newlines so one webhook stays one log line
            info!(bytes = payload.len(), payload = ?payload, "Received webhook data");
            json_reply(StatusCode::OK, WebhookAck::received(payload))
        }
        Err(e) => {
            warn!(error = %e, "Failed to read webhook payload");
            state.surface(e).into_response()
        }
    }
}

/// Health check endpoint handler
pub async fn health_check() -> Response {
    json_reply(StatusCode::OK, HealthStatus::healthy())
}
