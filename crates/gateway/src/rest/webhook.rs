//! Telegram webhook endpoint.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use slotwatch_telegram::Update;
use tracing::{debug, warn};

use crate::error::GatewayError;
use crate::middleware::boundary_reply;
use crate::state::GatewayState;

/// Handle one update pushed by Telegram.
///
/// Replies inline with a `sendMessage` call when the update carried a
/// command, and with an empty 200 otherwise.
///
/// Mounted at `telegram.webhook_path`; the documented path is the default.
#[utoipa::path(
    post,
    path = "/telegram/webhook",
    tag = "telegram",
    request_body(content = String, description = "Telegram Update object, served at the configured webhook path (default shown)", content_type = "application/json"),
    responses(
        (status = 200, description = "sendMessage webhook reply, an empty body, or a plain-text error"),
        (status = 401, description = "Secret token missing or wrong")
    )
)]
pub async fn handle_webhook(State(state): State<Arc<GatewayState>>, body: Bytes) -> Response {
    let update = match Update::from_slice(&body).map_err(GatewayError::from) {
        Ok(update) => update,
        Err(error) => {
            warn!(%error, bytes = body.len(), "could not parse webhook update");
            return boundary_reply(&error);
        }
    };

    match state.dispatcher().handle_update(&update).await {
        Some(reply) => Json(reply).into_response(),
        None => {
            debug!(update_id = update.update_id, "nothing to reply");
            StatusCode::OK.into_response()
        }
    }
}
