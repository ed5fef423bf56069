//! The resolved project configuration record

use super::options::{
    CssFramework, Framework, Language, PackageManager, ProjectType, StateManagement,
};
use crate::error::{IgniteError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A project name made only of letters, digits, dashes and underscores
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProjectName(String);

impl ProjectName {
    pub fn parse(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        match Self::check(&name) {
            Ok(()) => Ok(Self(name)),
            Err(reason) => Err(IgniteError::InvalidProjectName { name, reason }),
        }
    }

    /// Validation used both here and by the interactive name prompt
    pub fn check(name: &str) -> std::result::Result<(), &'static str> {
        if name.is_empty() {
            return Err("Project name is required");
        }
        if !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(
                "Project name can only contain letters, numbers, dashes, and underscores",
            );
        }
        Ok(())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ProjectName {
    type Error = IgniteError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(value)
    }
}

impl From<ProjectName> for String {
    fn from(name: ProjectName) -> Self {
        name.0
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Everything the user decided, in the flat shape that is persisted
///
/// Consumers receive it by reference; changing a field means building a new
/// record (see [`ProjectConfiguration::with_project_name`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfiguration {
    pub project_name: ProjectName,
    pub project_type: ProjectType,
    pub framework: Framework,
    pub language: Language,
    pub css_framework: CssFramework,
    pub state_management: StateManagement,
    pub install_router: bool,
    pub install_icons: bool,
    pub install_axios: bool,
    pub package_manager: PackageManager,
    pub git_init: bool,
    #[serde(rename = "installESLint")]
    pub install_eslint: bool,
    pub install_prettier: bool,
}

impl ProjectConfiguration {
    /// Copy of this configuration for a different project
    pub fn with_project_name(&self, project_name: ProjectName) -> Self {
        Self {
            project_name,
            ..self.clone()
        }
    }

    pub fn is_typescript(&self) -> bool {
        self.language == Language::TypeScript
    }

    pub fn is_backend(&self) -> bool {
        self.project_type == ProjectType::Backend
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ProjectConfiguration {
        ProjectConfiguration {
            project_name: ProjectName::parse("my-app").unwrap(),
            project_type: ProjectType::Frontend,
            framework: Framework::React,
            language: Language::TypeScript,
            css_framework: CssFramework::Tailwind,
            state_management: StateManagement::Redux,
            install_router: true,
            install_icons: false,
            install_axios: true,
            package_manager: PackageManager::Pnpm,
            git_init: true,
            install_eslint: true,
            install_prettier: false,
        }
    }

    #[test]
    fn test_project_name_accepts_identifiers() {
        for name in ["app", "my-app", "my_app_2", "A-b_C"] {
            assert!(ProjectName::parse(name).is_ok(), "{name} should be valid");
        }
    }

    #[test]
    fn test_project_name_rejects_invalid() {
        for name in ["", "my app", "app!", "../escape", "naïve"] {
            let err = ProjectName::parse(name).unwrap_err();
            assert!(err.is_validation(), "{name} should be rejected");
        }
    }

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["projectName"], "my-app");
        assert_eq!(json["cssFramework"], "tailwind");
        assert_eq!(json["stateManagement"], "redux");
        assert_eq!(json["installESLint"], true);
        assert_eq!(json["language"], "ts");
        assert_eq!(json["packageManager"], "pnpm");
    }

    #[test]
    fn test_deserialize_rejects_bad_name() {
        let mut json = serde_json::to_value(sample()).unwrap();
        json["projectName"] = "bad name".into();
        assert!(serde_json::from_value::<ProjectConfiguration>(json).is_err());
    }

    #[test]
    fn test_with_project_name_keeps_other_fields() {
        let original = sample();
        let renamed = original.with_project_name(ProjectName::parse("other").unwrap());
        assert_eq!(renamed.project_name.as_str(), "other");
        assert_eq!(original.project_name.as_str(), "my-app");
        assert_eq!(
            ProjectConfiguration {
                project_name: original.project_name.clone(),
                ..renamed
            },
            original
        );
    }
}
