//! Profile Repository Port

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{errors::DomainError, Profile};

/// Repository interface for identity records
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Find a profile by ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Profile>, DomainError>;

    /// Insert or update a profile
    async fn upsert(&self, profile: &Profile) -> Result<Profile, DomainError>;
}
