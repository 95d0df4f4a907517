pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::assessment::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Assessment session API
        .route("/api/v1/sessions", post(handlers::handle_create_session))
        .route("/api/v1/sessions/:id", get(handlers::handle_get_session))
        .route(
            "/api/v1/sessions/:id/submit",
            post(handlers::handle_submit),
        )
        .route("/api/v1/sessions/:id/reset", post(handlers::handle_reset))
        // Stateless pipeline invocation
        .route("/api/v1/recommendations", post(handlers::handle_recommend))
        .with_state(state)
}
