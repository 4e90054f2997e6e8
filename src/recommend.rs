//! Recommendation generator: turns aggregate findings into remediation actions
//!
//! Pure derivation; writing files and printing install commands is left to
//! the writer and the CLI.

use crate::templates::template_for_group;
use crate::types::{
    ConfigGroupFinding, DependencyFinding, FileContentReport, RemediationAction, Severity,
};

/// Static advice appended to every action list, independent of findings
pub const GENERAL_ADVICE: &[&str] = &[
    "Consider adding a testing setup with Vitest and React Testing Library",
    "Set up a CI/CD pipeline for automated testing and deployment",
    "Add a pre-commit hook for linting and formatting",
    "Consider adding Storybook for component documentation",
    "Implement error boundaries for better error handling",
    "Add environment variable handling for different environments",
];

/// Derive remediation actions from the three analyzers' findings.
///
/// Missing packages collapse into a single batched `InstallPackages` action.
/// Each unsatisfied group with a canonical template yields one `CreateFile`.
/// Failed required content checks surface as targeted advice, and the fixed
/// general-advice list always closes the sequence.
pub fn recommend(
    dep_findings: &[DependencyFinding],
    config_findings: &[ConfigGroupFinding],
    content_reports: &[FileContentReport],
) -> Vec<RemediationAction> {
    let mut actions = Vec::new();

    let missing: Vec<String> = dep_findings
        .iter()
        .filter(|f| !f.present)
        .map(|f| f.rule.name.clone())
        .collect();
    if !missing.is_empty() {
        actions.push(RemediationAction::InstallPackages { packages: missing });
    }

    for finding in config_findings {
        if finding.is_satisfied() {
            continue;
        }
        if let Some((file_name, contents)) = template_for_group(&finding.group_key) {
            actions.push(RemediationAction::CreateFile {
                file_name: file_name.to_string(),
                contents: contents.to_string(),
            });
        }
    }

    for report in content_reports {
        for finding in &report.findings {
            if !finding.matched && finding.severity == Severity::Required {
                actions.push(RemediationAction::GenericAdvice {
                    advice: format!(
                        "Review {}: check \"{}\" did not match",
                        report.file_name, finding.check_name
                    ),
                });
            }
        }
    }

    for advice in GENERAL_ADVICE {
        actions.push(RemediationAction::GenericAdvice {
            advice: advice.to_string(),
        });
    }

    actions
}
