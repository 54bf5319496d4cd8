//! Template Application Service (Use Case)
//!
//! Save, list, fetch and delete operations over the record store.

use std::sync::Arc;
use uuid::Uuid;

use issueforge::domain::{DomainError, GenerationRequest, IssueTemplate, TemplateSet};
use issueforge::ports::TemplateRepository;

/// Application service for saved template sets
pub struct TemplateService<R: TemplateRepository> {
    repo: Arc<R>,
}

impl<R: TemplateRepository> TemplateService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Persist a template set for an owner as one new record.
    ///
    /// An incomplete set is rejected before it reaches the store.
    pub async fn save(
        &self,
        owner_id: Uuid,
        request: GenerationRequest,
        templates: TemplateSet,
    ) -> Result<IssueTemplate, DomainError> {
        if !templates.is_complete() {
            return Err(DomainError::Validation(
                "template set must contain three non-empty documents".to_string(),
            ));
        }

        let template = IssueTemplate::new(owner_id, request, templates);
        let saved = self.repo.insert(&template).await?;

        tracing::info!("Saved templates for {} ({})", saved.project_name, saved.id);

        Ok(saved)
    }

    /// All template sets for an owner, newest first
    pub async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<IssueTemplate>, DomainError> {
        self.repo.list_by_owner(owner_id).await
    }

    /// Fetch one template set by ID
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<IssueTemplate>, DomainError> {
        self.repo.find_by_id(id).await
    }

    /// Delete a template set by ID
    pub async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let deleted = self.repo.delete(id).await?;
        if deleted {
            tracing::info!("Deleted templates: {}", id);
        }
        Ok(deleted)
    }
}
