//! Router assembly
//!
//! Middleware order, outermost first: CORS, request id, panic recovery,
//! HTTP tracing, request logging.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::{
    handle_panic, log_requests, make_request_span, propagate_request_id_layer,
    set_request_id_layer,
};
use crate::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health))
        // Users
        .route(
            "/users",
            post(handlers::create_user).get(handlers::list_users),
        )
        .route(
            "/users/:id",
            get(handlers::get_user)
                .put(handlers::update_user)
                .delete(handlers::delete_user),
        )
        .fallback(handlers::not_found)
        // Middleware
        .layer(middleware::from_fn(log_requests))
        .layer(
            ServiceBuilder::new()
                .layer(set_request_id_layer())
                .layer(propagate_request_id_layer())
                .layer(CatchPanicLayer::custom(handle_panic))
                .layer(TraceLayer::new_for_http().make_span_with(make_request_span)),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
