//! # Slotwatch Gateway Crate
//!
//! HTTP surface of the bot. Telegram delivers updates to the webhook route;
//! the gateway authenticates them, hands them to the command dispatcher, and
//! answers with a webhook reply.
//!
//! ## Architecture
//!
//! - **REST**: webhook and health endpoints
//! - **State**: shared dispatcher and Telegram settings
//! - **Middleware**: webhook secret check, request logging, panic containment
//!
//! ## Usage
//!
//! ```rust,ignore
//! use slotwatch_gateway::{create_router, GatewayState};
//!
//! let state = GatewayState::new(dispatcher, config.telegram.clone());
//! let app = create_router(state);
//!
//! axum::serve(listener, app).await?;
//! ```

pub mod error;
pub mod middleware;
pub mod rest;
pub mod state;

pub use error::{GatewayError, GatewayResult};
pub use state::{Dispatcher, GatewayState};

use axum::{middleware as axum_middleware, Router};
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;

/// Create the main application router with all routes
pub fn create_router(state: GatewayState) -> Router {
    let arc_state = Arc::new(state);

    #[allow(unused_mut)]
    let mut router = Router::new()
        .merge(rest::create_rest_routes(&arc_state).with_state(arc_state))
        .layer(CatchPanicLayer::custom(middleware::panic_reply))
        .layer(axum_middleware::from_fn(middleware::logging_middleware));

    // Add Swagger UI if in debug mode
    #[cfg(debug_assertions)]
    {
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        #[derive(OpenApi)]
        #[openapi(
            paths(rest::health::health_check, rest::webhook::handle_webhook),
            components(schemas(rest::health::HealthResponse)),
            tags(
                (name = "health", description = "Liveness"),
                (name = "telegram", description = "Telegram webhook"),
            )
        )]
        struct ApiDoc;

        router = router.merge(
            SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()),
        );
    }

    router
}
