//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{
    // Template models
    ErrorResponse, GenerateTemplatesRequest, GenerateTemplatesResponse, SaveTemplatesRequest,
    TemplateResponse,
    // Profile models
    ProfileResponse, UpsertProfileRequest,
};
use crate::routes::{generate, profile, template};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Issueforge API",
        version = "0.1.0",
        description = "AI-generated GitHub issue templates\n\nDescribe a project, receive bug report, feature request and performance issue templates in YAML.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Generate", description = "Template generation via the LLM provider"),
        (name = "Templates", description = "Saved template sets"),
        (name = "Profiles", description = "Identity records"),
    ),
    paths(
        generate::generate_templates,
        template::save_templates,
        template::list_templates,
        template::get_template,
        template::delete_template,
        profile::get_profile,
        profile::upsert_profile,
    ),
    components(
        schemas(
            // Template
            GenerateTemplatesRequest,
            GenerateTemplatesResponse,
            SaveTemplatesRequest,
            TemplateResponse,
            ErrorResponse,
            // Profile
            UpsertProfileRequest,
            ProfileResponse,
        )
    ),
)]
pub struct ApiDoc;
