//! Generation Application Service (Use Case)
//!
//! The template request handler: builds the prompt, makes the one provider
//! call, and decodes the completion into a complete template set.

use std::sync::Arc;

use issueforge::domain::{GenerationError, GenerationRequest, TemplateSet};
use issueforge::generation::{build_prompt, decode_template_set, MAX_OUTPUT_TOKENS};
use issueforge::ports::{CompletionRequest, LlmProvider};

/// Application service for template generation
pub struct GenerationService<P: LlmProvider> {
    provider: Arc<P>,
}

impl<P: LlmProvider> GenerationService<P> {
    pub fn new(provider: Arc<P>) -> Self {
        Self { provider }
    }

    /// Generate a template set for one request.
    ///
    /// Returns a complete three-document set or fails; a partially
    /// populated set is never produced.
    pub async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<TemplateSet, GenerationError> {
        let prompt = build_prompt(request);

        tracing::info!(
            "Generating templates for {} ({}) via {}",
            request.project_name,
            request.project_type,
            self.provider.model_id()
        );

        let completion = self
            .provider
            .complete(&CompletionRequest::new(prompt, MAX_OUTPUT_TOKENS))
            .await?;

        let templates = decode_template_set(&completion)?;

        tracing::info!(
            "Templates generated for {} ({} output tokens)",
            request.project_name,
            completion.usage.output_tokens
        );

        Ok(templates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use issueforge::ports::{CompletionResponse, ContentBlock, TokenUsage};

    /// Provider stub returning a canned completion
    struct StubProvider {
        reply: String,
    }

    #[async_trait]
    impl LlmProvider for StubProvider {
        async fn complete(
            &self,
            _request: &CompletionRequest,
        ) -> Result<CompletionResponse, GenerationError> {
            Ok(CompletionResponse {
                content: vec![ContentBlock::Text {
                    text: self.reply.clone(),
                }],
                model: "stub".to_string(),
                usage: TokenUsage::default(),
            })
        }

        fn provider_name(&self) -> &str {
            "stub"
        }

        fn model_id(&self) -> &str {
            "stub"
        }
    }

    /// Provider stub that always fails at the service level
    struct FailingProvider;

    #[async_trait]
    impl LlmProvider for FailingProvider {
        async fn complete(
            &self,
            _request: &CompletionRequest,
        ) -> Result<CompletionResponse, GenerationError> {
            Err(GenerationError::Service("connection refused".to_string()))
        }

        fn provider_name(&self) -> &str {
            "stub"
        }

        fn model_id(&self) -> &str {
            "stub"
        }
    }

    fn request() -> GenerationRequest {
        GenerationRequest {
            project_name: "Acme CLI".to_string(),
            project_description: "A CLI tool for X".to_string(),
            project_type: issueforge::ProjectType::CliTool,
        }
    }

    #[tokio::test]
    async fn test_generate_decodes_valid_completion() {
        let service = GenerationService::new(Arc::new(StubProvider {
            reply: r#"{"bugTemplate": "a", "featureTemplate": "b", "performanceTemplate": "c"}"#
                .to_string(),
        }));

        let set = service.generate(&request()).await.unwrap();
        assert_eq!(set.bug_template, "a");
        assert_eq!(set.feature_template, "b");
        assert_eq!(set.performance_template, "c");
    }

    #[tokio::test]
    async fn test_generate_fails_on_prose_completion() {
        let service = GenerationService::new(Arc::new(StubProvider {
            reply: "Sure! Here are your templates:".to_string(),
        }));

        let err = service.generate(&request()).await.unwrap_err();
        assert!(matches!(err, GenerationError::Parse(_)));
    }

    #[tokio::test]
    async fn test_generate_propagates_service_failure() {
        let service = GenerationService::new(Arc::new(FailingProvider));

        let err = service.generate(&request()).await.unwrap_err();
        assert!(matches!(err, GenerationError::Service(_)));
    }
}
