//! Route definitions for the portfolio HTTP API.
//!
//! Public reads live under `/api`, login under `/auth`, and guarded
//! mutations under `/admin`. The router receives `AppState` and threads
//! it through every route via `.with_state(state)`.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{get, post, put},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .merge(auth_routes())
        .merge(public_routes())
        .merge(admin_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Auth endpoints: login
fn auth_routes() -> Router<AppState> {
    Router::new().route("/auth/login", post(handlers::auth::login))
}

/// Public read endpoints (no auth required)
fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/api/health", get(handlers::health::health))
        .route("/api/projects", get(handlers::project::list_projects))
        .route("/api/projects/{id}", get(handlers::project::get_project))
        .route("/api/blog", get(handlers::post::list_posts))
        .route("/api/blog/{id}", get(handlers::post::get_post))
}

/// Admin mutations, all behind the bearer-token guard
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/projects", post(handlers::project::create_project))
        .route(
            "/admin/projects/{id}",
            put(handlers::project::update_project).delete(handlers::project::delete_project),
        )
        .route("/admin/blog", post(handlers::post::create_post))
        .route(
            "/admin/blog/{id}",
            put(handlers::post::update_post).delete(handlers::post::delete_post),
        )
}
