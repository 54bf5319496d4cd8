//! Profile - Identity record owning saved templates

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User profile owning saved template sets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    pub email: String,
    pub full_name: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// Create a new Profile with generated timestamps
    pub fn new(id: Uuid, email: String, full_name: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            email,
            full_name,
            avatar_url: None,
            created_at: now,
            updated_at: now,
        }
    }
}
