//! Profile Routes - Identity Records

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use uuid::Uuid;

use crate::models::{ErrorResponse, ProfileResponse, UpsertProfileRequest};
use crate::AppState;

/// Get a profile by ID
#[utoipa::path(
    get,
    path = "/issueforge/profiles/{id}",
    params(
        ("id" = Uuid, Path, description = "Profile ID")
    ),
    responses(
        (status = 200, description = "Profile found", body = ProfileResponse),
        (status = 404, description = "Profile not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Profiles"
)]
pub async fn get_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ProfileResponse>, (StatusCode, Json<ErrorResponse>)> {
    let profile = state
        .profile_service
        .get_by_id(id)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(e.to_string())),
            )
        })?
        .ok_or((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new("Profile not found")),
        ))?;

    Ok(Json(profile.into()))
}

/// Create or update a profile
#[utoipa::path(
    put,
    path = "/issueforge/profiles/{id}",
    params(
        ("id" = Uuid, Path, description = "Profile ID")
    ),
    request_body = UpsertProfileRequest,
    responses(
        (status = 200, description = "Profile saved", body = ProfileResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Profiles"
)]
pub async fn upsert_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpsertProfileRequest>,
) -> Result<Json<ProfileResponse>, (StatusCode, Json<ErrorResponse>)> {
    let profile = state
        .profile_service
        .upsert(id, payload.email, payload.full_name, payload.avatar_url)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(e.to_string())),
            )
        })?;

    Ok(Json(profile.into()))
}

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/issueforge/profiles/:id",
        get(get_profile).put(upsert_profile),
    )
}
