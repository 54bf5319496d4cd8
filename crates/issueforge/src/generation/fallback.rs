//! Deterministic fallback templates
//!
//! Synthesized locally by the orchestrator when generation fails, so the
//! flow always reaches a displayable result. Only the project name is
//! interpolated into fixed YAML skeletons.

use crate::domain::TemplateSet;

/// Build the three placeholder templates for a project
pub fn fallback_templates(project_name: &str) -> TemplateSet {
    TemplateSet {
        bug_template: format!(
            r#"name: 🐛 Bug Report
description: Report a bug in {project_name}
title: "[BUG] "
labels: ["bug", "triage"]
body:
  - type: markdown
    attributes:
      value: |
        Thanks for taking the time to fill out this bug report for {project_name}!

  - type: textarea
    id: bug-description
    attributes:
      label: Bug Description
      description: A clear description of what the bug is
      placeholder: Describe the bug...
    validations:
      required: true"#
        ),
        feature_template: format!(
            r#"name: ✨ Feature Request
description: Suggest a feature for {project_name}
title: "[FEATURE] "
labels: ["enhancement"]
body:
  - type: markdown
    attributes:
      value: |
        Thank you for suggesting a feature for {project_name}!"#
        ),
        performance_template: format!(
            r#"name: ⚡ Performance Issue
description: Report a performance issue in {project_name}
title: "[PERFORMANCE] "
labels: ["performance", "bug"]
body:
  - type: markdown
    attributes:
      value: |
        Performance issues help us make {project_name} faster for everyone!"#
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_three_skeletons_name_the_project() {
        let set = fallback_templates("Acme CLI");

        assert!(set.bug_template.contains("Acme CLI"));
        assert!(set.feature_template.contains("Acme CLI"));
        assert!(set.performance_template.contains("Acme CLI"));
    }

    #[test]
    fn test_fallback_set_is_complete() {
        assert!(fallback_templates("x").is_complete());
    }

    #[test]
    fn test_skeletons_are_distinct_template_kinds() {
        let set = fallback_templates("proj");

        assert!(set.bug_template.contains("Bug Report"));
        assert!(set.feature_template.contains("Feature Request"));
        assert!(set.performance_template.contains("Performance Issue"));
    }
}
