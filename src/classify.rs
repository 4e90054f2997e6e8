//! Dependency classifier: declared package names against the baseline rules

use crate::types::{DependencyFinding, DependencyRule};
use std::collections::BTreeSet;

/// Check every rule against the declared dependency set.
///
/// Emits exactly one finding per rule, in rule-table order. Pure function:
/// an empty declared set is the normal "fresh project" input and simply
/// reports every rule absent.
pub fn classify(declared: &BTreeSet<String>, rules: &[DependencyRule]) -> Vec<DependencyFinding> {
    rules
        .iter()
        .map(|rule| DependencyFinding {
            rule: rule.clone(),
            present: declared.contains(&rule.name),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::dependency_rules;
    use crate::types::{DependencyCategory, Severity};

    fn declared(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_one_finding_per_rule() {
        let rules = dependency_rules();
        let findings = classify(&declared(&[]), rules);
        assert_eq!(findings.len(), rules.len());
        assert!(findings.iter().all(|f| !f.present));
    }

    #[test]
    fn test_present_iff_declared() {
        // Manifest declares react + react-dom, devDependencies typescript;
        // vite is nowhere.
        let declared = declared(&["react", "react-dom", "typescript"]);
        let findings = classify(&declared, dependency_rules());

        let presence = |name: &str| {
            findings
                .iter()
                .find(|f| f.rule.name == name)
                .map(|f| f.present)
                .unwrap()
        };
        assert!(presence("react"));
        assert!(presence("react-dom"));
        assert!(presence("typescript"));
        assert!(!presence("vite"));
    }

    #[test]
    fn test_table_order_preserved() {
        let findings = classify(&declared(&["react"]), dependency_rules());
        for (finding, rule) in findings.iter().zip(dependency_rules().iter()) {
            assert_eq!(finding.rule.name, rule.name);
        }
    }

    #[test]
    fn test_idempotent() {
        let declared = declared(&["react", "vite", "@types/node"]);
        let first = classify(&declared, dependency_rules());
        let second = classify(&declared, dependency_rules());
        let presence = |fs: &[DependencyFinding]| -> Vec<bool> {
            fs.iter().map(|f| f.present).collect()
        };
        assert_eq!(presence(&first), presence(&second));
    }

    #[test]
    fn test_severity_travels_with_the_rule() {
        let findings = classify(&declared(&[]), dependency_rules());
        let types_node = findings
            .iter()
            .find(|f| f.rule.name == "@types/node")
            .unwrap();
        assert_eq!(types_node.rule.category, DependencyCategory::TypeDefs);
        assert_eq!(types_node.rule.severity, Severity::Advisory);
    }
}
