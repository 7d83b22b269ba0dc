//! REST API endpoints for the gateway

pub mod health;
pub mod webhook;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::middleware::webhook_secret_middleware;
use crate::state::GatewayState;

/// Create all REST API routes
pub fn create_rest_routes(state: &Arc<GatewayState>) -> Router<Arc<GatewayState>> {
    Router::new()
        .route("/health", get(health::health_check))
        .merge(
            Router::new()
                .route(state.webhook_path(), post(webhook::handle_webhook))
                .route_layer(axum_middleware::from_fn_with_state(
                    state.clone(),
                    webhook_secret_middleware,
                )),
        )
}
