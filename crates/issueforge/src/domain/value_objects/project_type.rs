//! ProjectType - Closed set of supported project kinds

use serde::{Deserialize, Serialize};

/// Kind of project templates are generated for
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectType {
    Library,
    WebApp,
    CliTool,
    Api,
    MobileApp,
    DesktopApp,
}

impl ProjectType {
    /// All supported project types, in form-display order
    pub const ALL: [ProjectType; 6] = [
        ProjectType::Library,
        ProjectType::WebApp,
        ProjectType::CliTool,
        ProjectType::Api,
        ProjectType::MobileApp,
        ProjectType::DesktopApp,
    ];

    /// Wire/storage name of the variant
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::Library => "library",
            ProjectType::WebApp => "web-app",
            ProjectType::CliTool => "cli-tool",
            ProjectType::Api => "api",
            ProjectType::MobileApp => "mobile-app",
            ProjectType::DesktopApp => "desktop-app",
        }
    }

    /// Human-readable label for selection prompts
    pub fn label(&self) -> &'static str {
        match self {
            ProjectType::Library => "Library",
            ProjectType::WebApp => "Web Application",
            ProjectType::CliTool => "CLI Tool",
            ProjectType::Api => "API/Backend",
            ProjectType::MobileApp => "Mobile App",
            ProjectType::DesktopApp => "Desktop App",
        }
    }
}

impl std::fmt::Display for ProjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ProjectType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "library" => Ok(ProjectType::Library),
            "web-app" => Ok(ProjectType::WebApp),
            "cli-tool" => Ok(ProjectType::CliTool),
            "api" => Ok(ProjectType::Api),
            "mobile-app" => Ok(ProjectType::MobileApp),
            "desktop-app" => Ok(ProjectType::DesktopApp),
            _ => Err(format!("Unknown project type: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_round_trips_all_names() {
        for pt in ProjectType::ALL {
            assert_eq!(ProjectType::from_str(pt.as_str()).unwrap(), pt);
        }
    }

    #[test]
    fn test_rejects_unknown_name() {
        assert!(ProjectType::from_str("game").is_err());
        assert!(ProjectType::from_str("").is_err());
    }

    #[test]
    fn test_serde_uses_kebab_case() {
        let json = serde_json::to_string(&ProjectType::CliTool).unwrap();
        assert_eq!(json, "\"cli-tool\"");

        let parsed: ProjectType = serde_json::from_str("\"web-app\"").unwrap();
        assert_eq!(parsed, ProjectType::WebApp);
    }
}
