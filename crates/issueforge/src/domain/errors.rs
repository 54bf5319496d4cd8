//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;
use uuid::Uuid;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: String, id: String },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("External service error: {0}")]
    ExternalService(String),
}

impl DomainError {
    pub fn not_found<T: AsRef<str>>(entity_type: T, id: Uuid) -> Self {
        Self::NotFound {
            entity_type: entity_type.as_ref().to_string(),
            id: id.to_string(),
        }
    }
}

/// Failure kinds of one template generation attempt.
///
/// The HTTP boundary collapses all three into a single 500, but the kinds
/// stay distinguishable here so callers and logs can tell a provider outage
/// from a malformed completion.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// The first content block of the completion was not textual
    #[error("Invalid upstream response: {0}")]
    InvalidResponse(String),

    /// The textual completion could not be decoded into a complete template set
    #[error("Failed to parse generated templates: {0}")]
    Parse(String),

    /// Network or service-level failure calling the provider
    #[error("Generation service failure: {0}")]
    Service(String),
}

impl From<GenerationError> for DomainError {
    fn from(err: GenerationError) -> Self {
        DomainError::ExternalService(err.to_string())
    }
}
