use axum::{
    extract::{Path, Request, State},
    http::StatusCode,
    middleware::Next,
    response::Response,
    Json,
};
use models::{
    Collection, ContactLink, ContactLinkInput, PortfolioState, ProfileField, Project, ProjectInput,
    SectionKey, StackIcon, StackIconInput,
};
use serde::Deserialize;
use tracing::{info, warn};

use crate::{errors::JsonApiError, state::AppState};

pub const PASSWORD_HEADER: &str = "X-Admin-Password";

#[derive(Debug, Deserialize)]
pub struct ValueBody {
    pub value: String,
}

pub async fn require_admin_password(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, JsonApiError> {
    let authorized = req
        .headers()
        .get(PASSWORD_HEADER)
        .and_then(|v| v.to_str().ok())
        .map_or(false, |candidate| state.admin_password_matches(candidate));
    if !authorized {
        warn!(path = %req.uri().path(), "editor request rejected");
        return Err(JsonApiError::unauthorized());
    }
    Ok(next.run(req).await)
}

pub async fn portfolio(State(state): State<AppState>) -> Json<PortfolioState> {
    Json(PortfolioState::clone(&state.store.snapshot()))
}

pub async fn set_profile_field(
    State(state): State<AppState>,
    Path(field): Path<String>,
    Json(body): Json<ValueBody>,
) -> Result<Json<PortfolioState>, JsonApiError> {
    let field = field
        .parse::<ProfileField>()
        .map_err(|e| JsonApiError::not_found(e.to_string()))?;
    state.store.set_profile_field(field, body.value);
    info!(%field, "profile field updated");
    Ok(Json(PortfolioState::clone(&state.store.snapshot())))
}

pub async fn set_section_title(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Json(body): Json<ValueBody>,
) -> Result<Json<PortfolioState>, JsonApiError> {
    let key = key
        .parse::<SectionKey>()
        .map_err(|e| JsonApiError::not_found(e.to_string()))?;
    state.store.set_project_section_title(key, body.value);
    info!(%key, "section title updated");
    Ok(Json(PortfolioState::clone(&state.store.snapshot())))
}

pub async fn upsert_project(State(state): State<AppState>, Json(input): Json<ProjectInput>) -> Json<Project> {
    let project = state.store.upsert_project(input);
    info!(id = %project.id, "project saved");
    Json(project)
}

pub async fn upsert_stack(State(state): State<AppState>, Json(input): Json<StackIconInput>) -> Json<StackIcon> {
    let stack = state.store.upsert_stack(input);
    info!(id = %stack.id, "stack saved");
    Json(stack)
}

pub async fn upsert_contact(
    State(state): State<AppState>,
    Json(input): Json<ContactLinkInput>,
) -> Json<ContactLink> {
    let contact = state.store.upsert_contact(input);
    info!(id = %contact.id, "contact saved");
    Json(contact)
}

fn delete_from(state: &AppState, collection: Collection, id: &str) -> StatusCode {
    if state.store.delete(collection, id) {
        info!(%collection, id, "item deleted");
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    }
}

pub async fn delete_project(State(state): State<AppState>, Path(id): Path<String>) -> StatusCode {
    delete_from(&state, Collection::Projects, &id)
}

pub async fn delete_stack(State(state): State<AppState>, Path(id): Path<String>) -> StatusCode {
    delete_from(&state, Collection::Stacks, &id)
}

pub async fn delete_contact(State(state): State<AppState>, Path(id): Path<String>) -> StatusCode {
    delete_from(&state, Collection::Contacts, &id)
}
