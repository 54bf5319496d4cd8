//! Template Routes - Saved Template Sets
//!
//! HTTP handlers that delegate to TemplateService for business logic.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

use issueforge::domain::DomainError;

use crate::models::{ErrorResponse, SaveTemplatesRequest, TemplateResponse};
use crate::AppState;

fn domain_error(e: DomainError) -> (StatusCode, Json<ErrorResponse>) {
    let status = match &e {
        DomainError::Validation(_) => StatusCode::BAD_REQUEST,
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(ErrorResponse::new(e.to_string())))
}

/// Listing filter
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListTemplatesQuery {
    /// Owner whose saved sets are listed
    pub owner_id: Uuid,
}

/// Save a generated template set
#[utoipa::path(
    post,
    path = "/issueforge/templates",
    request_body = SaveTemplatesRequest,
    responses(
        (status = 200, description = "Templates saved", body = TemplateResponse),
        (status = 400, description = "Incomplete template set", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Templates"
)]
pub async fn save_templates(
    State(state): State<AppState>,
    Json(payload): Json<SaveTemplatesRequest>,
) -> Result<Json<TemplateResponse>, (StatusCode, Json<ErrorResponse>)> {
    let (owner_id, request, templates) = payload.into_parts();

    let saved = state
        .template_service
        .save(owner_id, request, templates)
        .await
        .map_err(domain_error)?;

    Ok(Json(saved.into()))
}

/// List an owner's saved template sets, newest first
#[utoipa::path(
    get,
    path = "/issueforge/templates",
    params(ListTemplatesQuery),
    responses(
        (status = 200, description = "Saved template sets", body = Vec<TemplateResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Templates"
)]
pub async fn list_templates(
    State(state): State<AppState>,
    Query(query): Query<ListTemplatesQuery>,
) -> Result<Json<Vec<TemplateResponse>>, (StatusCode, Json<ErrorResponse>)> {
    let templates = state
        .template_service
        .list_by_owner(query.owner_id)
        .await
        .map_err(domain_error)?;

    Ok(Json(templates.into_iter().map(Into::into).collect()))
}

/// Get a saved template set by ID
#[utoipa::path(
    get,
    path = "/issueforge/templates/{id}",
    params(
        ("id" = Uuid, Path, description = "Template set ID")
    ),
    responses(
        (status = 200, description = "Template set found", body = TemplateResponse),
        (status = 404, description = "Template set not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Templates"
)]
pub async fn get_template(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TemplateResponse>, (StatusCode, Json<ErrorResponse>)> {
    let template = state
        .template_service
        .get_by_id(id)
        .await
        .map_err(domain_error)?
        .ok_or((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new("Templates not found")),
        ))?;

    Ok(Json(template.into()))
}

/// Delete a saved template set
#[utoipa::path(
    delete,
    path = "/issueforge/templates/{id}",
    params(
        ("id" = Uuid, Path, description = "Template set ID")
    ),
    responses(
        (status = 200, description = "Template set deleted"),
        (status = 404, description = "Template set not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Templates"
)]
pub async fn delete_template(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<ErrorResponse>)> {
    let deleted = state
        .template_service
        .delete(id)
        .await
        .map_err(domain_error)?;

    if !deleted {
        return Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new("Templates not found")),
        ));
    }

    Ok(Json(serde_json::json!({
        "status": "ok",
        "message": "Templates deleted"
    })))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/issueforge/templates",
            get(list_templates).post(save_templates),
        )
        .route(
            "/issueforge/templates/:id",
            get(get_template).delete(delete_template),
        )
}
