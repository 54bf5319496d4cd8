//! Generate Routes - Template Generation
//!
//! HTTP handlers that delegate to GenerationService.

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};

use issueforge::domain::{GenerationError, GenerationRequest};

use crate::models::{ErrorResponse, GenerateTemplatesRequest, GenerateTemplatesResponse};
use crate::AppState;

/// Generate three issue templates for a project description.
///
/// Every failure category collapses to one externally visible 500 body;
/// the distinct kind is logged.
#[utoipa::path(
    post,
    path = "/issueforge/generate",
    request_body = GenerateTemplatesRequest,
    responses(
        (status = 200, description = "Templates generated", body = GenerateTemplatesResponse),
        (status = 500, description = "Generation failed", body = ErrorResponse)
    ),
    tag = "Generate"
)]
pub async fn generate_templates(
    State(state): State<AppState>,
    Json(payload): Json<GenerateTemplatesRequest>,
) -> Result<Json<GenerateTemplatesResponse>, (StatusCode, Json<ErrorResponse>)> {
    let service = state.generation_service.as_ref().ok_or_else(|| {
        tracing::warn!("Generation requested but no ANTHROPIC_API_KEY is configured");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new("Failed to generate templates")),
        )
    })?;

    let request: GenerationRequest = payload.into();

    match service.generate(&request).await {
        Ok(templates) => Ok(Json(templates.into())),
        Err(e) => {
            tracing::warn!("Template generation failed: {}", e);
            let message = match e {
                GenerationError::InvalidResponse(_) => "Invalid response from AI",
                GenerationError::Parse(_) => "Failed to parse AI response",
                GenerationError::Service(_) => "Failed to generate templates",
            };
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(message)),
            ))
        }
    }
}

pub fn router() -> Router<AppState> {
    Router::new().route("/issueforge/generate", post(generate_templates))
}
