//! LLM Provider Port
//!
//! Abstract interface for the one outbound text-generation call. Responses
//! keep the provider's content-block structure so the decode step can tell
//! a textual completion apart from anything else.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::errors::GenerationError;

/// A single-prompt completion request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// User-role prompt text
    pub prompt: String,
    /// Output-token ceiling for the completion
    pub max_tokens: u32,
}

impl CompletionRequest {
    pub fn new(prompt: impl Into<String>, max_tokens: u32) -> Self {
        Self {
            prompt: prompt.into(),
            max_tokens,
        }
    }
}

/// One block of completion content
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    /// Plain text content
    Text { text: String },
    /// Any non-textual block kind (tool use, images, ...)
    #[serde(other)]
    Other,
}

impl ContentBlock {
    /// The text of this block, if it is textual
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ContentBlock::Text { text } => Some(text),
            ContentBlock::Other => None,
        }
    }
}

/// Response from one completion call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionResponse {
    /// Content blocks in provider order
    pub content: Vec<ContentBlock>,
    /// Model that generated the response
    pub model: String,
    /// Token usage statistics
    #[serde(default)]
    pub usage: TokenUsage,
}

/// Token usage statistics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenUsage {
    #[serde(default)]
    pub input_tokens: u32,
    #[serde(default)]
    pub output_tokens: u32,
}

/// LLM provider interface
///
/// One configured client per provider, constructed at process
/// initialization and reused across requests.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Dispatch one completion request. No retry, no streaming.
    async fn complete(
        &self,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse, GenerationError>;

    /// Get the provider name (e.g., "anthropic")
    fn provider_name(&self) -> &str;

    /// Get the model ID being used
    fn model_id(&self) -> &str;
}
