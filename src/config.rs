//! Configuration for audit behavior

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Main configuration for the audit process
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditConfig {
    /// Dependency rule names to leave out of the report
    pub ignored_dependencies: HashSet<String>,
    /// Probe the conventional src/public directory layout
    pub check_structure: bool,
    /// Run content heuristics on config files that exist
    pub check_content: bool,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            ignored_dependencies: HashSet::new(),
            check_structure: true,
            check_content: true,
        }
    }
}

impl AuditConfig {
    /// Create a new builder for AuditConfig
    pub fn builder() -> AuditConfigBuilder {
        AuditConfigBuilder::default()
    }
}

/// Builder for AuditConfig
#[derive(Default)]
pub struct AuditConfigBuilder {
    ignored_dependencies: HashSet<String>,
    check_structure: Option<bool>,
    check_content: Option<bool>,
}

impl AuditConfigBuilder {
    pub fn ignore_dependency(mut self, name: String) -> Self {
        self.ignored_dependencies.insert(name);
        self
    }

    pub fn check_structure(mut self, enabled: bool) -> Self {
        self.check_structure = Some(enabled);
        self
    }

    pub fn check_content(mut self, enabled: bool) -> Self {
        self.check_content = Some(enabled);
        self
    }

    pub fn build(self) -> AuditConfig {
        let defaults = AuditConfig::default();
        AuditConfig {
            ignored_dependencies: self.ignored_dependencies,
            check_structure: self.check_structure.unwrap_or(defaults.check_structure),
            check_content: self.check_content.unwrap_or(defaults.check_content),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_enable_everything() {
        let config = AuditConfig::default();
        assert!(config.check_structure);
        assert!(config.check_content);
        assert!(config.ignored_dependencies.is_empty());
    }

    #[test]
    fn test_builder() {
        let config = AuditConfig::builder()
            .ignore_dependency("postcss".to_string())
            .check_structure(false)
            .build();
        assert!(config.ignored_dependencies.contains("postcss"));
        assert!(!config.check_structure);
        assert!(config.check_content);
    }

    #[test]
    fn test_toml_round_trip_with_partial_fields() {
        let config: AuditConfig = toml::from_str(
            r#"
            ignored_dependencies = ["eslint"]
            check_structure = false
            "#,
        )
        .unwrap();
        assert!(config.ignored_dependencies.contains("eslint"));
        assert!(!config.check_structure);
        assert!(config.check_content);
    }
}
