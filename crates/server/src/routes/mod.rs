use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::state::AppState;

pub mod admin;
pub mod public;

/// Public read routes plus the password-gated editor routes. Editor bodies
/// may be as large as `max_body_bytes`.
pub fn build_router(state: AppState, cors: CorsLayer, max_body_bytes: usize) -> Router {
    let public_routes = Router::new()
        .route("/health", get(public::health))
        .route("/metrics", get(public::metrics))
        .route("/api/portfolio", get(public::portfolio))
        .route("/api/portfolio/view", get(public::portfolio_view));

    let admin_routes = Router::new()
        .route("/admin/portfolio", get(admin::portfolio))
        .route("/admin/profile/:field", put(admin::set_profile_field))
        .route("/admin/section-titles/:key", put(admin::set_section_title))
        .route("/admin/projects", post(admin::upsert_project))
        .route("/admin/projects/:id", delete(admin::delete_project))
        .route("/admin/stacks", post(admin::upsert_stack))
        .route("/admin/stacks/:id", delete(admin::delete_stack))
        .route("/admin/contacts", post(admin::upsert_contact))
        .route("/admin/contacts/:id", delete(admin::delete_contact))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            admin::require_admin_password,
        ))
        .layer(DefaultBodyLimit::max(max_body_bytes));

    public_routes
        .merge(admin_routes)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
