use axum::{extract::State, http::StatusCode, Json};
use common::types::Health;
use models::PortfolioState;
use service::{observability, PortfolioView};
use tracing::error;

use crate::state::AppState;

pub async fn health(State(state): State<AppState>) -> Json<Health> {
    Json(Health { status: "ok", ready: state.store.is_ready() })
}

pub async fn metrics() -> (StatusCode, String) {
    match observability::encode_metrics() {
        Ok(body) => (StatusCode::OK, body),
        Err(e) => {
            error!(error = %e, "metrics encoding failed");
            (StatusCode::INTERNAL_SERVER_ERROR, e)
        }
    }
}

/// The raw document, exactly what gets persisted.
pub async fn portfolio(State(state): State<AppState>) -> Json<PortfolioState> {
    Json(PortfolioState::clone(&state.store.snapshot()))
}

/// Display-ready form with fallbacks applied and projects grouped.
pub async fn portfolio_view(State(state): State<AppState>) -> Json<PortfolioView> {
    Json(PortfolioView::from_state(&state.store.snapshot()))
}
