//! Prompt construction for template generation

use crate::domain::GenerationRequest;

/// Output-token ceiling for one generation call
pub const MAX_OUTPUT_TOKENS: u32 = 4000;

/// Build the single instruction sent to the text-generation service.
///
/// The three request fields are embedded verbatim. The instruction demands
/// exactly one JSON object with the keys `bugTemplate`, `featureTemplate`
/// and `performanceTemplate`, each holding YAML text, with no surrounding
/// prose or markdown fencing.
pub fn build_prompt(request: &GenerationRequest) -> String {
    format!(
        r#"You are an expert in GitHub issue templates and developer experience. Generate 3 professional GitHub issue templates in YAML format for the following project:

**Project Name:** {name}
**Description:** {description}
**Type:** {project_type}

Please generate these 3 templates:

1. **Bug Report Template** - Should include fields for bug description, reproduction steps, expected behavior, environment details, and be optimized for quick bug triage.

2. **Feature Request Template** - Should include fields for feature description, use case, proposed solution, alternatives considered, and encourage detailed feature specifications.

3. **Performance Issue Template** - Should include fields for performance issue description, current performance metrics, expected performance, system information, and profiling data.

**Requirements:**
- Use proper GitHub issue template YAML format
- Include SEO-friendly titles and descriptions
- Add relevant labels for each template type
- Include helpful placeholder text and validation
- Make templates professional and easy to use
- Optimize for developer productivity and issue quality

**IMPORTANT:** Return ONLY a valid JSON object with this exact structure:
{{
  "bugTemplate": "YAML content here",
  "featureTemplate": "YAML content here",
  "performanceTemplate": "YAML content here"
}}

Do not include any markdown formatting, explanations, or additional text. Just the JSON object."#,
        name = request.project_name,
        description = request.project_description,
        project_type = request.project_type,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ProjectType;

    #[test]
    fn test_embeds_request_fields_verbatim() {
        let request = GenerationRequest {
            project_name: "Acme CLI".to_string(),
            project_description: "A CLI tool for X".to_string(),
            project_type: ProjectType::CliTool,
        };

        let prompt = build_prompt(&request);

        assert!(prompt.contains("**Project Name:** Acme CLI"));
        assert!(prompt.contains("**Description:** A CLI tool for X"));
        assert!(prompt.contains("**Type:** cli-tool"));
    }

    #[test]
    fn test_demands_the_three_json_keys() {
        let request = GenerationRequest {
            project_name: "x".to_string(),
            project_description: "y".to_string(),
            project_type: ProjectType::Library,
        };

        let prompt = build_prompt(&request);

        assert!(prompt.contains("\"bugTemplate\""));
        assert!(prompt.contains("\"featureTemplate\""));
        assert!(prompt.contains("\"performanceTemplate\""));
        assert!(prompt.contains("Return ONLY a valid JSON object"));
    }
}
