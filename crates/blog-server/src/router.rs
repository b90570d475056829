use axum::routing::get;
use axum::{middleware, Router};
use tower_http::trace::TraceLayer;

use crate::handler;
use crate::middleware::log_requests;
use crate::state::AppState;

/// Build the axum router with all blog endpoints.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handler::health_handler))
        .route("/info", get(handler::info_handler))
        .route(
            "/posts",
            get(handler::list_posts)
                .post(handler::create_post)
                .delete(handler::delete_posts),
        )
        .route("/post/:id", get(handler::get_post))
        .layer(middleware::from_fn(log_requests))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
