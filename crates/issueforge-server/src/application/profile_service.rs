//! Profile Application Service (Use Case)

use std::sync::Arc;
use uuid::Uuid;

use issueforge::domain::{DomainError, Profile};
use issueforge::ports::ProfileRepository;

/// Application service for identity records
pub struct ProfileService<R: ProfileRepository> {
    repo: Arc<R>,
}

impl<R: ProfileRepository> ProfileService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Fetch a profile by ID
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Profile>, DomainError> {
        self.repo.find_by_id(id).await
    }

    /// Create or update a profile
    pub async fn upsert(
        &self,
        id: Uuid,
        email: String,
        full_name: Option<String>,
        avatar_url: Option<String>,
    ) -> Result<Profile, DomainError> {
        let mut profile = Profile::new(id, email, full_name);
        profile.avatar_url = avatar_url;

        let saved = self.repo.upsert(&profile).await?;

        tracing::info!("Upserted profile: {} ({})", saved.email, saved.id);

        Ok(saved)
    }
}
