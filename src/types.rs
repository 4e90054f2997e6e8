//! Core data types for frontend audit reporting

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Complete audit report for a frontend project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditReport {
    /// Name of the audited project (from the manifest, if declared)
    pub project_name: String,
    /// Path to the audited project
    pub project_path: String,
    /// Timestamp when audit was performed
    pub timestamp: DateTime<Utc>,
    /// One finding per baseline dependency rule
    pub dependency_findings: Vec<DependencyFinding>,
    /// One finding per config-file group
    pub config_findings: Vec<ConfigGroupFinding>,
    /// One finding per expected project directory
    pub structure_findings: Vec<StructureFinding>,
    /// Content-heuristic results, one entry per readable target file
    pub content_reports: Vec<FileContentReport>,
    /// Non-fatal problems encountered during the audit (unreadable files etc.)
    pub diagnostics: Vec<String>,
    /// Derived remediation actions
    pub actions: Vec<RemediationAction>,
    /// Summary statistics
    pub summary: AuditSummary,
}

/// Summary statistics for an audit report
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuditSummary {
    pub total_dependencies: usize,
    pub present_dependencies: usize,
    pub missing_required_deps: usize,
    pub missing_advisory_deps: usize,
    pub satisfied_config_groups: usize,
    pub unsatisfied_config_groups: usize,
    pub failed_required_checks: usize,
    pub failed_advisory_checks: usize,
    pub missing_directories: usize,
}

/// Semantic category of a baseline dependency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DependencyCategory {
    /// Core runtime libraries (react, react-dom, typescript)
    Essential,
    /// Build and development tooling
    BuildTool,
    /// CSS and styling stack
    Styling,
    /// Linting and formatting
    Linting,
    /// Test frameworks and utilities
    Testing,
    /// Type definition packages
    TypeDefs,
}

impl std::fmt::Display for DependencyCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Essential => write!(f, "Essential"),
            Self::BuildTool => write!(f, "Build tool"),
            Self::Styling => write!(f, "Styling"),
            Self::Linting => write!(f, "Linting"),
            Self::Testing => write!(f, "Testing"),
            Self::TypeDefs => write!(f, "Type definitions"),
        }
    }
}

/// How a negative finding should be reported.
///
/// Carried explicitly per rule: the baseline mixes required and recommended
/// entries within the same category (type definitions are tracked for the
/// install command but reported as warnings), so severity is data, not
/// something derived from the category name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// A miss is an error in the report
    Required,
    /// A miss is a suggestion, not an error
    Advisory,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Required => write!(f, "required"),
            Self::Advisory => write!(f, "advisory"),
        }
    }
}

/// One entry of the baseline dependency rule table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DependencyRule {
    /// Package name as declared in the manifest
    pub name: String,
    /// Semantic category
    pub category: DependencyCategory,
    /// How to report an absence
    pub severity: Severity,
    /// Human-readable purpose of the package
    pub description: String,
}

/// Presence result for a single dependency rule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DependencyFinding {
    pub rule: DependencyRule,
    pub present: bool,
}

/// One entry of the baseline config-file rule table.
///
/// Files sharing a `group_key` are interchangeable satisfiers of the same
/// requirement (e.g. `vite.config.ts` and `vite.config.js`). Singleton
/// groups use the file name itself as the key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigFileRule {
    pub file_name: String,
    pub group_key: String,
    pub description: String,
}

/// Satisfaction result for one config-file group
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigGroupFinding {
    pub group_key: String,
    /// First member file found, in rule-table order; `None` if unsatisfied
    pub satisfied_by: Option<String>,
    pub description: String,
}

impl ConfigGroupFinding {
    pub fn is_satisfied(&self) -> bool {
        self.satisfied_by.is_some()
    }
}

/// One entry of the expected-directory table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryRule {
    pub dir_name: String,
    pub description: String,
}

/// Presence result for one expected directory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructureFinding {
    pub rule: DirectoryRule,
    pub present: bool,
}

/// Result of one content heuristic evaluated against a config file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentFinding {
    pub check_name: String,
    pub matched: bool,
    pub severity: Severity,
}

/// All content findings for one target file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileContentReport {
    pub file_name: String,
    pub findings: Vec<ContentFinding>,
}

/// A remediation instruction derived from the aggregate findings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum RemediationAction {
    /// Install all missing packages with a single batched command
    InstallPackages { packages: Vec<String> },
    /// Create a config file from its canonical template
    CreateFile { file_name: String, contents: String },
    /// Free-form advice, independent of any single finding
    GenericAdvice { advice: String },
}

impl AuditReport {
    /// Create a new, empty audit report
    pub fn new(project_name: String, project_path: String) -> Self {
        Self {
            project_name,
            project_path,
            timestamp: Utc::now(),
            dependency_findings: Vec::new(),
            config_findings: Vec::new(),
            structure_findings: Vec::new(),
            content_reports: Vec::new(),
            diagnostics: Vec::new(),
            actions: Vec::new(),
            summary: AuditSummary::default(),
        }
    }

    /// Compute summary statistics from the collected findings
    pub fn compute_summary(&mut self) {
        let mut summary = AuditSummary {
            total_dependencies: self.dependency_findings.len(),
            ..AuditSummary::default()
        };

        for finding in &self.dependency_findings {
            if finding.present {
                summary.present_dependencies += 1;
            } else {
                match finding.rule.severity {
                    Severity::Required => summary.missing_required_deps += 1,
                    Severity::Advisory => summary.missing_advisory_deps += 1,
                }
            }
        }

        for finding in &self.config_findings {
            if finding.is_satisfied() {
                summary.satisfied_config_groups += 1;
            } else {
                summary.unsatisfied_config_groups += 1;
            }
        }

        for report in &self.content_reports {
            for finding in &report.findings {
                if !finding.matched {
                    match finding.severity {
                        Severity::Required => summary.failed_required_checks += 1,
                        Severity::Advisory => summary.failed_advisory_checks += 1,
                    }
                }
            }
        }

        summary.missing_directories = self
            .structure_findings
            .iter()
            .filter(|f| !f.present)
            .count();

        self.summary = summary;
    }
}

impl AuditSummary {
    /// True when nothing required is missing or failing
    pub fn is_clean(&self) -> bool {
        self.missing_required_deps == 0
            && self.unsatisfied_config_groups == 0
            && self.failed_required_checks == 0
    }
}
