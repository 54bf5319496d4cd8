//! Simple API Key Authentication (Bearer Token)

use axum::{
    extract::Request,
    http::{header, StatusCode},
    middleware::Next,
    response::Response,
};

/// API Key from environment/secrets
static API_KEY: std::sync::OnceLock<String> = std::sync::OnceLock::new();

/// Initialize the API key
pub fn init_api_key(key: String) {
    let _ = API_KEY.set(key);
}

/// Authentication middleware
/// Validates Bearer token against the API key
pub async fn auth_middleware(request: Request, next: Next) -> Result<Response, StatusCode> {
    let api_key = match API_KEY.get().map(|s| s.as_str()) {
        Some(key) if !key.is_empty() => key,
        _ => {
            // No API key configured = auth disabled (for development)
            tracing::warn!("No API key configured, authentication disabled");
            return Ok(next.run(request).await);
        }
    };

    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    match auth_header.and_then(|h| h.strip_prefix("Bearer ")) {
        Some(token) if token == api_key => Ok(next.run(request).await),
        Some(_) => {
            tracing::warn!("Invalid API key attempted");
            Err(StatusCode::UNAUTHORIZED)
        }
        None => {
            tracing::warn!("Missing or malformed Authorization header");
            Err(StatusCode::UNAUTHORIZED)
        }
    }
}
