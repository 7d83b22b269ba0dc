//! Middleware for webhook authentication and other cross-cutting concerns

use std::any::Any;
use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header, HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::{error, warn};

use crate::error::GatewayError;
use crate::state::GatewayState;

/// Header Telegram sets to the `secret_token` given to `setWebhook`.
pub const SECRET_TOKEN_HEADER: &str = "x-telegram-bot-api-secret-token";

/// Rejects webhook calls whose secret token header does not match the
/// configured secret. Without a configured secret every call is let through.
pub async fn webhook_secret_middleware(
    State(state): State<Arc<GatewayState>>,
    request: Request,
    next: Next,
) -> Result<Response, GatewayError> {
    let Some(expected) = state.webhook_secret() else {
        return Ok(next.run(request).await);
    };

    let provided = request
        .headers()
        .get(SECRET_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok());

    match provided {
        Some(token) if token == expected => Ok(next.run(request).await),
        Some(_) => {
            warn!("webhook call with wrong secret token");
            Err(GatewayError::AuthenticationFailed(
                "Invalid webhook secret token".to_string(),
            ))
        }
        None => {
            warn!("webhook call without secret token");
            Err(GatewayError::AuthenticationFailed(
                "Missing webhook secret token".to_string(),
            ))
        }
    }
}

/// Logging middleware for request/response logging
pub async fn logging_middleware(request: Request, next: Next) -> impl IntoResponse {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let start = std::time::Instant::now();
    let response = next.run(request).await;
    let duration = start.elapsed();

    tracing::info!(
        method = %method,
        uri = %uri,
        status = %response.status(),
        duration_ms = duration.as_millis(),
        "Request completed"
    );

    response
}

/// Failures that reach the HTTP boundary are answered with a plain-text 200
/// so Telegram does not keep redelivering the update.
pub fn boundary_reply(error: &GatewayError) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        error.to_string(),
    )
        .into_response()
}

/// Response used by the panic-catching layer.
pub fn panic_reply(panic: Box<dyn Any + Send + 'static>) -> axum::http::Response<String> {
    let detail = if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else {
        "unknown panic".to_string()
    };

    error!(%detail, "request handler panicked");

    let mut response =
        axum::http::Response::new(GatewayError::InternalError(detail).to_string());
    *response.status_mut() = StatusCode::OK;
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/plain; charset=utf-8"),
    );
    response
}
