//! Template Repository Port
//!
//! Abstract interface for IssueTemplate persistence operations.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{errors::DomainError, IssueTemplate};

/// Repository interface for saved template sets
#[async_trait]
pub trait TemplateRepository: Send + Sync {
    /// Insert a new template set
    async fn insert(&self, template: &IssueTemplate) -> Result<IssueTemplate, DomainError>;

    /// Find all template sets for an owner, newest first
    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<IssueTemplate>, DomainError>;

    /// Find a template set by ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<IssueTemplate>, DomainError>;

    /// Replace a saved template set. Present in the schema; the generation
    /// flow never drives it.
    async fn update(&self, template: &IssueTemplate) -> Result<IssueTemplate, DomainError>;

    /// Delete a template set by ID. Returns false when nothing was deleted.
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
