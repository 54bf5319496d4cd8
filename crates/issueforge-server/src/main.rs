use axum::{middleware, routing::get, Json, Router};
use serde::Serialize;
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod auth;
mod models;
mod routes;

use adapters::{AnthropicProvider, PgProfileRepository, PgTemplateRepository};
use issueforge::LlmProvider;
use application::{GenerationService, ProfileService, TemplateService};

/// Type aliases for application services with concrete implementations
pub type AppGenerationService = GenerationService<AnthropicProvider>;
pub type AppTemplateService = TemplateService<PgTemplateRepository>;
pub type AppProfileService = ProfileService<PgProfileRepository>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    /// Absent when no ANTHROPIC_API_KEY is configured; generation requests
    /// then fail at first use rather than at startup
    pub generation_service: Option<Arc<AppGenerationService>>,
    pub template_service: Arc<AppTemplateService>,
    pub profile_service: Arc<AppProfileService>,
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Issueforge API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[shuttle_runtime::main]
async fn main(
    #[shuttle_shared_db::Postgres] pool: PgPool,
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("🔧 Issueforge API initializing...");

    // Initialize API key from secrets
    if let Some(api_key) = secrets.get("ISSUEFORGE_API_KEY") {
        auth::init_api_key(api_key);
        tracing::info!("🔐 API key authentication enabled");
    } else {
        tracing::warn!("⚠️  No ISSUEFORGE_API_KEY set - authentication disabled");
    }

    // Run migrations
    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    tracing::info!("✅ Database migrations completed");

    // Initialize the generation provider if configured
    let generation_service = secrets.get("ANTHROPIC_API_KEY").map(|key| {
        let provider = match secrets.get("ANTHROPIC_MODEL") {
            Some(model) => AnthropicProvider::new(key).with_model(model),
            None => AnthropicProvider::new(key),
        };
        tracing::info!("🤖 Generation provider initialized ({})", provider.model_id());
        Arc::new(GenerationService::new(Arc::new(provider)))
    });

    if generation_service.is_none() {
        tracing::warn!("⚠️  No ANTHROPIC_API_KEY set - generation will fail at first use");
    }

    // Initialize application services
    let template_repo = Arc::new(PgTemplateRepository::new(pool.clone()));
    let profile_repo = Arc::new(PgProfileRepository::new(pool.clone()));
    let template_service = Arc::new(TemplateService::new(template_repo));
    let profile_service = Arc::new(ProfileService::new(profile_repo));

    // Create application state
    let state = AppState {
        generation_service,
        template_service,
        profile_service,
    };

    // Protected routes (require authentication)
    let protected_routes = Router::new()
        .merge(routes::generate::router())
        .merge(routes::template::router())
        .merge(routes::profile::router())
        .layer(middleware::from_fn(auth::auth_middleware));

    // OpenAPI documentation
    let openapi = routes::swagger::ApiDoc::openapi();

    // Build router with shared state
    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(protected_routes)
        .layer(CorsLayer::permissive())
        .with_state(state);

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ Issueforge API ready");

    Ok(router.into())
}
