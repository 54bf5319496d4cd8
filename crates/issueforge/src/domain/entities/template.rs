//! Template Entities - Generation input and output

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::ProjectType;

/// The three-field project description submitted for template generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub project_name: String,
    pub project_description: String,
    pub project_type: ProjectType,
}

/// The three YAML documents produced by one generation.
///
/// Serde uses the camelCase key names (`bugTemplate`, ...) because that is
/// the JSON contract the upstream model is instructed to emit. The content
/// of each field is opaque YAML text; it is never parsed further.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateSet {
    pub bug_template: String,
    pub feature_template: String,
    pub performance_template: String,
}

impl TemplateSet {
    /// True when all three documents are present and non-empty
    pub fn is_complete(&self) -> bool {
        !self.bug_template.trim().is_empty()
            && !self.feature_template.trim().is_empty()
            && !self.performance_template.trim().is_empty()
    }
}

/// A saved template set with ownership and originating request metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueTemplate {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub project_name: String,
    pub project_description: String,
    pub project_type: ProjectType,
    pub bug_template: String,
    pub feature_template: String,
    pub performance_template: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl IssueTemplate {
    /// Create a new IssueTemplate with generated ID and timestamps
    pub fn new(owner_id: Uuid, request: GenerationRequest, templates: TemplateSet) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            owner_id,
            project_name: request.project_name,
            project_description: request.project_description,
            project_type: request.project_type,
            bug_template: templates.bug_template,
            feature_template: templates.feature_template,
            performance_template: templates.performance_template,
            created_at: now,
            updated_at: now,
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> GenerationRequest {
        GenerationRequest {
            project_name: "Acme CLI".to_string(),
            project_description: "A CLI tool for X".to_string(),
            project_type: ProjectType::CliTool,
        }
    }

    #[test]
    fn test_new_issue_template_mirrors_input() {
        let owner = Uuid::new_v4();
        let set = TemplateSet {
            bug_template: "bug".to_string(),
            feature_template: "feature".to_string(),
            performance_template: "performance".to_string(),
        };

        let saved = IssueTemplate::new(owner, request(), set);

        assert_eq!(saved.owner_id, owner);
        assert_eq!(saved.project_name, "Acme CLI");
        assert_eq!(saved.project_description, "A CLI tool for X");
        assert_eq!(saved.project_type, ProjectType::CliTool);
        assert_eq!(saved.bug_template, "bug");
        assert_eq!(saved.feature_template, "feature");
        assert_eq!(saved.performance_template, "performance");
        assert_eq!(saved.created_at, saved.updated_at);
    }

    #[test]
    fn test_is_complete_rejects_blank_fields() {
        let set = TemplateSet {
            bug_template: "bug".to_string(),
            feature_template: "   ".to_string(),
            performance_template: "performance".to_string(),
        };
        assert!(!set.is_complete());
    }
}
