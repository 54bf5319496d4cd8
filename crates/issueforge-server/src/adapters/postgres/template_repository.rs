//! PostgreSQL implementation of TemplateRepository

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use issueforge::{DomainError, IssueTemplate, ProjectType, TemplateRepository};

/// PostgreSQL implementation of TemplateRepository
pub struct PgTemplateRepository {
    pool: PgPool,
}

impl PgTemplateRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct IssueTemplateRow {
    id: Uuid,
    owner_id: Uuid,
    project_name: String,
    project_description: String,
    project_type: String,
    bug_template: String,
    feature_template: String,
    performance_template: String,
    created_at: chrono::DateTime<chrono::Utc>,
    updated_at: chrono::DateTime<chrono::Utc>,
}

impl TryFrom<IssueTemplateRow> for IssueTemplate {
    type Error = DomainError;

    fn try_from(row: IssueTemplateRow) -> Result<Self, Self::Error> {
        let project_type: ProjectType = row
            .project_type
            .parse()
            .map_err(DomainError::Validation)?;

        Ok(Self {
            id: row.id,
            owner_id: row.owner_id,
            project_name: row.project_name,
            project_description: row.project_description,
            project_type,
            bug_template: row.bug_template,
            feature_template: row.feature_template,
            performance_template: row.performance_template,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl TemplateRepository for PgTemplateRepository {
    async fn insert(&self, template: &IssueTemplate) -> Result<IssueTemplate, DomainError> {
        let row = sqlx::query_as::<_, IssueTemplateRow>(
            r#"
            INSERT INTO issue_templates
                (id, owner_id, project_name, project_description, project_type,
                 bug_template, feature_template, performance_template)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(template.id)
        .bind(template.owner_id)
        .bind(&template.project_name)
        .bind(&template.project_description)
        .bind(template.project_type.as_str())
        .bind(&template.bug_template)
        .bind(&template.feature_template)
        .bind(&template.performance_template)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        row.try_into()
    }

    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<IssueTemplate>, DomainError> {
        let rows = sqlx::query_as::<_, IssueTemplateRow>(
            "SELECT * FROM issue_templates WHERE owner_id = $1 ORDER BY created_at DESC",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<IssueTemplate>, DomainError> {
        let row = sqlx::query_as::<_, IssueTemplateRow>(
            "SELECT * FROM issue_templates WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        row.map(TryInto::try_into).transpose()
    }

    async fn update(&self, template: &IssueTemplate) -> Result<IssueTemplate, DomainError> {
        let row = sqlx::query_as::<_, IssueTemplateRow>(
            r#"
            UPDATE issue_templates
            SET project_name = $2, project_description = $3, project_type = $4,
                bug_template = $5, feature_template = $6, performance_template = $7,
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(template.id)
        .bind(&template.project_name)
        .bind(&template.project_description)
        .bind(template.project_type.as_str())
        .bind(&template.bug_template)
        .bind(&template.feature_template)
        .bind(&template.performance_template)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        row.try_into()
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM issue_templates WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}
