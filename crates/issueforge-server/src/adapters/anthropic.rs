//! Anthropic Provider
//!
//! LlmProvider implementation against the Anthropic messages API.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use issueforge::domain::GenerationError;
use issueforge::ports::{
    CompletionRequest, CompletionResponse, ContentBlock, LlmProvider, TokenUsage,
};

const MESSAGES_URL: &str = "https://api.anthropic.com/v1/messages";
const API_VERSION: &str = "2023-06-01";
const DEFAULT_MODEL: &str = "claude-3-5-sonnet-20241022";

/// Anthropic Claude API client
#[derive(Clone)]
pub struct AnthropicProvider {
    client: Client,
    api_key: String,
    model: String,
}

impl AnthropicProvider {
    /// Create a new provider with the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Overrides the model id if needed
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

// ============================================
// Wire Types
// ============================================

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<Message<'a>>,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
    model: String,
    #[serde(default)]
    usage: TokenUsage,
}

#[async_trait]
impl LlmProvider for AnthropicProvider {
    async fn complete(
        &self,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse, GenerationError> {
        let body = MessagesRequest {
            model: &self.model,
            max_tokens: request.max_tokens,
            messages: vec![Message {
                role: "user",
                content: &request.prompt,
            }],
        };

        let response = self
            .client
            .post(MESSAGES_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| GenerationError::Service(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            return Err(map_http_error(status, body));
        }

        let payload: MessagesResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::InvalidResponse(e.to_string()))?;

        Ok(CompletionResponse {
            content: payload.content,
            model: payload.model,
            usage: payload.usage,
        })
    }

    fn provider_name(&self) -> &str {
        "anthropic"
    }

    fn model_id(&self) -> &str {
        &self.model
    }
}

fn map_http_error(status: StatusCode, body: String) -> GenerationError {
    let message = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|json| {
            json.get("error")
                .and_then(|err| err.get("message"))
                .and_then(|msg| msg.as_str())
                .map(|msg| msg.to_string())
        })
        .unwrap_or(body);

    GenerationError::Service(format!("Anthropic API error ({}): {}", status, message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_provider_uses_default_model() {
        let provider = AnthropicProvider::new("test-key");
        assert_eq!(provider.model_id(), DEFAULT_MODEL);
        assert_eq!(provider.provider_name(), "anthropic");
    }

    #[test]
    fn test_with_model_overrides() {
        let provider = AnthropicProvider::new("test-key").with_model("claude-3-opus");
        assert_eq!(provider.model_id(), "claude-3-opus");
    }

    #[test]
    fn test_map_http_error_extracts_message() {
        let body = r#"{"error": {"message": "invalid x-api-key"}}"#.to_string();
        let err = map_http_error(StatusCode::UNAUTHORIZED, body);
        assert!(err.to_string().contains("invalid x-api-key"));
    }

    #[test]
    fn test_map_http_error_falls_back_to_body() {
        let err = map_http_error(StatusCode::BAD_GATEWAY, "upstream down".to_string());
        assert!(err.to_string().contains("upstream down"));
    }

    #[test]
    fn test_wire_content_block_deserializes_text() {
        let json = r#"{"type": "text", "text": "hello"}"#;
        let block: ContentBlock = serde_json::from_str(json).unwrap();
        assert_eq!(block.as_text(), Some("hello"));
    }

    #[test]
    fn test_wire_content_block_tolerates_unknown_kinds() {
        let json = r#"{"type": "tool_use"}"#;
        let block: ContentBlock = serde_json::from_str(json).unwrap();
        assert!(block.as_text().is_none());
    }
}
