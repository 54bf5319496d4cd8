//! Typed decoding of the untrusted completion payload

use crate::domain::{GenerationError, TemplateSet};
use crate::ports::CompletionResponse;

/// Convert a completion into a complete template set, or fail.
///
/// Takes the first content block, requires it to be textual, and decodes it
/// as a JSON object with the three camelCase template keys. A set with any
/// missing or blank field is rejected; a partial set is never returned.
pub fn decode_template_set(response: &CompletionResponse) -> Result<TemplateSet, GenerationError> {
    let first = response.content.first().ok_or_else(|| {
        GenerationError::InvalidResponse("completion contained no content blocks".to_string())
    })?;

    let text = first.as_text().ok_or_else(|| {
        GenerationError::InvalidResponse("first content block is not textual".to_string())
    })?;

    let templates: TemplateSet =
        serde_json::from_str(text).map_err(|e| GenerationError::Parse(e.to_string()))?;

    if !templates.is_complete() {
        return Err(GenerationError::Parse(
            "template set is missing one or more documents".to_string(),
        ));
    }

    Ok(templates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{ContentBlock, TokenUsage};

    fn response_with(blocks: Vec<ContentBlock>) -> CompletionResponse {
        CompletionResponse {
            content: blocks,
            model: "test-model".to_string(),
            usage: TokenUsage::default(),
        }
    }

    fn text_response(text: &str) -> CompletionResponse {
        response_with(vec![ContentBlock::Text {
            text: text.to_string(),
        }])
    }

    #[test]
    fn test_decodes_valid_fixture() {
        let fixture = r#"{
            "bugTemplate": "name: Bug Report",
            "featureTemplate": "name: Feature Request",
            "performanceTemplate": "name: Performance Issue"
        }"#;

        let set = decode_template_set(&text_response(fixture)).unwrap();

        assert_eq!(set.bug_template, "name: Bug Report");
        assert_eq!(set.feature_template, "name: Feature Request");
        assert_eq!(set.performance_template, "name: Performance Issue");
    }

    #[test]
    fn test_rejects_non_json_text() {
        let err = decode_template_set(&text_response("Here are your templates:")).unwrap_err();
        assert!(matches!(err, GenerationError::Parse(_)));
    }

    #[test]
    fn test_rejects_missing_key() {
        let fixture = r#"{"bugTemplate": "a", "featureTemplate": "b"}"#;
        let err = decode_template_set(&text_response(fixture)).unwrap_err();
        assert!(matches!(err, GenerationError::Parse(_)));
    }

    #[test]
    fn test_rejects_blank_field() {
        let fixture = r#"{"bugTemplate": "a", "featureTemplate": "", "performanceTemplate": "c"}"#;
        let err = decode_template_set(&text_response(fixture)).unwrap_err();
        assert!(matches!(err, GenerationError::Parse(_)));
    }

    #[test]
    fn test_rejects_non_textual_first_block() {
        let err = decode_template_set(&response_with(vec![ContentBlock::Other])).unwrap_err();
        assert!(matches!(err, GenerationError::InvalidResponse(_)));
    }

    #[test]
    fn test_rejects_empty_content() {
        let err = decode_template_set(&response_with(vec![])).unwrap_err();
        assert!(matches!(err, GenerationError::InvalidResponse(_)));
    }

    #[test]
    fn test_only_first_block_is_considered() {
        let good = r#"{"bugTemplate": "a", "featureTemplate": "b", "performanceTemplate": "c"}"#;
        let response = response_with(vec![
            ContentBlock::Other,
            ContentBlock::Text {
                text: good.to_string(),
            },
        ]);
        let err = decode_template_set(&response).unwrap_err();
        assert!(matches!(err, GenerationError::InvalidResponse(_)));
    }
}
