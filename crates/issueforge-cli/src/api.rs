//! Issueforge API Client

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use issueforge::domain::{GenerationRequest, TemplateSet};

/// API Client for Issueforge
pub struct IssueforgeClient {
    client: Client,
    base_url: String,
    api_key: String,
}

// ============================================
// API Request/Response Types
// ============================================

#[derive(Debug, Serialize)]
struct GenerateTemplatesRequest<'a> {
    project_name: &'a str,
    project_description: &'a str,
    project_type: &'a str,
}

/// The three generated documents as the server returns them
#[derive(Debug, Deserialize)]
pub struct GeneratedTemplates {
    pub bug_template: String,
    pub feature_template: String,
    pub performance_template: String,
}

impl From<TemplateSet> for GeneratedTemplates {
    fn from(set: TemplateSet) -> Self {
        Self {
            bug_template: set.bug_template,
            feature_template: set.feature_template,
            performance_template: set.performance_template,
        }
    }
}

#[derive(Debug, Serialize)]
struct SaveTemplatesRequest<'a> {
    owner_id: Uuid,
    project_name: &'a str,
    project_description: &'a str,
    project_type: &'a str,
    bug_template: &'a str,
    feature_template: &'a str,
    performance_template: &'a str,
}

/// A saved template set
#[derive(Debug, Deserialize)]
pub struct SavedTemplates {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub project_name: String,
    pub project_description: String,
    pub project_type: String,
    pub bug_template: String,
    pub feature_template: String,
    pub performance_template: String,
    pub created_at: DateTime<Utc>,
}

impl IssueforgeClient {
    /// Create a new API client
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Test connection with health check
    pub async fn health(&self) -> Result<bool> {
        let url = format!("{}/health", self.base_url);
        let resp = self.client.get(&url).send().await?;
        Ok(resp.status().is_success())
    }

    /// Generate templates for a project description
    pub async fn generate(&self, request: &GenerationRequest) -> Result<GeneratedTemplates> {
        let url = format!("{}/issueforge/generate", self.base_url);

        let body = GenerateTemplatesRequest {
            project_name: &request.project_name,
            project_description: &request.project_description,
            project_type: request.project_type.as_str(),
        };

        let resp = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await
            .context("Failed to connect to Issueforge API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("API error ({}): {}", status, body);
        }

        let templates: GeneratedTemplates =
            resp.json().await.context("Failed to parse response")?;

        Ok(templates)
    }

    /// Save a template set for the signed-in owner
    pub async fn save_templates(
        &self,
        owner_id: Uuid,
        request: &GenerationRequest,
        templates: &GeneratedTemplates,
    ) -> Result<SavedTemplates> {
        let url = format!("{}/issueforge/templates", self.base_url);

        let body = SaveTemplatesRequest {
            owner_id,
            project_name: &request.project_name,
            project_description: &request.project_description,
            project_type: request.project_type.as_str(),
            bug_template: &templates.bug_template,
            feature_template: &templates.feature_template,
            performance_template: &templates.performance_template,
        };

        let resp = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await
            .context("Failed to connect to Issueforge API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("API error ({}): {}", status, body);
        }

        let saved: SavedTemplates = resp.json().await.context("Failed to parse response")?;

        Ok(saved)
    }

    /// List the owner's saved template sets, newest first
    pub async fn list_templates(&self, owner_id: Uuid) -> Result<Vec<SavedTemplates>> {
        let url = format!(
            "{}/issueforge/templates?owner_id={}",
            self.base_url, owner_id
        );

        let resp = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send()
            .await
            .context("Failed to connect to Issueforge API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("API error ({}): {}", status, body);
        }

        let templates: Vec<SavedTemplates> =
            resp.json().await.context("Failed to parse response")?;

        Ok(templates)
    }

    /// Get a saved template set; None when the id is unknown
    pub async fn get_template(&self, id: Uuid) -> Result<Option<SavedTemplates>> {
        let url = format!("{}/issueforge/templates/{}", self.base_url, id);

        let resp = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send()
            .await
            .context("Failed to connect to Issueforge API")?;

        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("API error ({}): {}", status, body);
        }

        let template: SavedTemplates = resp.json().await.context("Failed to parse response")?;

        Ok(Some(template))
    }

    /// Delete a saved template set; false when the id is unknown
    pub async fn delete_template(&self, id: Uuid) -> Result<bool> {
        let url = format!("{}/issueforge/templates/{}", self.base_url, id);

        let resp = self
            .client
            .delete(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send()
            .await
            .context("Failed to connect to Issueforge API")?;

        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(false);
        }

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("API error ({}): {}", status, body);
        }

        Ok(true)
    }
}
