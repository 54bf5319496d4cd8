//! Template DTOs - Generation and saved template sets

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use issueforge::domain::{GenerationRequest, IssueTemplate, ProjectType, TemplateSet};

/// Generate templates request
#[derive(Debug, Deserialize, ToSchema)]
pub struct GenerateTemplatesRequest {
    pub project_name: String,
    pub project_description: String,
    /// One of: library, web-app, cli-tool, api, mobile-app, desktop-app
    #[schema(value_type = String, example = "cli-tool")]
    pub project_type: ProjectType,
}

impl From<GenerateTemplatesRequest> for GenerationRequest {
    fn from(req: GenerateTemplatesRequest) -> Self {
        Self {
            project_name: req.project_name,
            project_description: req.project_description,
            project_type: req.project_type,
        }
    }
}

/// Generate templates response - the three YAML documents
#[derive(Debug, Serialize, ToSchema)]
pub struct GenerateTemplatesResponse {
    pub bug_template: String,
    pub feature_template: String,
    pub performance_template: String,
}

impl From<TemplateSet> for GenerateTemplatesResponse {
    fn from(set: TemplateSet) -> Self {
        Self {
            bug_template: set.bug_template,
            feature_template: set.feature_template,
            performance_template: set.performance_template,
        }
    }
}

/// Save templates request
#[derive(Debug, Deserialize, ToSchema)]
pub struct SaveTemplatesRequest {
    pub owner_id: Uuid,
    pub project_name: String,
    pub project_description: String,
    /// One of: library, web-app, cli-tool, api, mobile-app, desktop-app
    #[schema(value_type = String, example = "cli-tool")]
    pub project_type: ProjectType,
    pub bug_template: String,
    pub feature_template: String,
    pub performance_template: String,
}

impl SaveTemplatesRequest {
    pub fn into_parts(self) -> (Uuid, GenerationRequest, TemplateSet) {
        (
            self.owner_id,
            GenerationRequest {
                project_name: self.project_name,
                project_description: self.project_description,
                project_type: self.project_type,
            },
            TemplateSet {
                bug_template: self.bug_template,
                feature_template: self.feature_template,
                performance_template: self.performance_template,
            },
        )
    }
}

/// Saved template set response
#[derive(Debug, Serialize, ToSchema)]
pub struct TemplateResponse {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub project_name: String,
    pub project_description: String,
    /// One of: library, web-app, cli-tool, api, mobile-app, desktop-app
    #[schema(value_type = String, example = "cli-tool")]
    pub project_type: ProjectType,
    pub bug_template: String,
    pub feature_template: String,
    pub performance_template: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<IssueTemplate> for TemplateResponse {
    fn from(template: IssueTemplate) -> Self {
        Self {
            id: template.id,
            owner_id: template.owner_id,
            project_name: template.project_name,
            project_description: template.project_description,
            project_type: template.project_type,
            bug_template: template.bug_template,
            feature_template: template.feature_template,
            performance_template: template.performance_template,
            created_at: template.created_at,
            updated_at: template.updated_at,
        }
    }
}

/// Error body for failed requests
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
