//! Config probe: existence checks with alias grouping
//!
//! Files sharing a group key are mutually substitutable satisfiers of one
//! requirement. Content is never read here, only existence.

use crate::types::{ConfigFileRule, ConfigGroupFinding, DirectoryRule, StructureFinding};
use std::collections::BTreeSet;
use std::collections::HashMap;

/// Resolve group satisfaction against the set of existing file names.
///
/// One finding per distinct group key, ordered by first occurrence in the
/// rule table. `satisfied_by` records the first member present in table
/// order. Pure function.
pub fn probe(existing: &BTreeSet<String>, rules: &[ConfigFileRule]) -> Vec<ConfigGroupFinding> {
    let mut findings: Vec<ConfigGroupFinding> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for rule in rules {
        let present = existing.contains(&rule.file_name);

        match index.get(rule.group_key.as_str()) {
            Some(&i) => {
                let finding = &mut findings[i];
                if finding.satisfied_by.is_none() && present {
                    finding.satisfied_by = Some(rule.file_name.clone());
                }
            }
            None => {
                index.insert(rule.group_key.as_str(), findings.len());
                findings.push(ConfigGroupFinding {
                    group_key: rule.group_key.clone(),
                    satisfied_by: present.then(|| rule.file_name.clone()),
                    description: rule.description.clone(),
                });
            }
        }
    }

    findings
}

/// Check the expected directories of a conventional project layout
pub fn probe_structure(
    has_dir: impl Fn(&str) -> bool,
    rules: &[DirectoryRule],
) -> Vec<StructureFinding> {
    rules
        .iter()
        .map(|rule| StructureFinding {
            present: has_dir(&rule.dir_name),
            rule: rule.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{config_file_rules, directory_rules};

    fn existing(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_one_finding_per_group() {
        let findings = probe(&existing(&[]), config_file_rules());
        let mut keys: Vec<_> = findings.iter().map(|f| f.group_key.as_str()).collect();
        let total = keys.len();
        keys.dedup();
        assert_eq!(keys.len(), total, "duplicate group keys");
        // 9 rules collapse to 6 groups (vite x2, eslint x3)
        assert_eq!(total, 6);
    }

    #[test]
    fn test_alias_satisfied_by_second_member() {
        // Only the JavaScript variant exists; the group is still satisfied.
        let findings = probe(&existing(&["vite.config.js"]), config_file_rules());
        let vite = findings.iter().find(|f| f.group_key == "vite").unwrap();
        assert!(vite.is_satisfied());
        assert_eq!(vite.satisfied_by.as_deref(), Some("vite.config.js"));
    }

    #[test]
    fn test_alias_prefers_first_member_in_table_order() {
        let findings = probe(
            &existing(&["vite.config.js", "vite.config.ts"]),
            config_file_rules(),
        );
        let vite = findings.iter().find(|f| f.group_key == "vite").unwrap();
        assert_eq!(vite.satisfied_by.as_deref(), Some("vite.config.ts"));
    }

    #[test]
    fn test_empty_filesystem_leaves_groups_unsatisfied() {
        let findings = probe(&existing(&[]), config_file_rules());
        assert!(findings.iter().all(|f| !f.is_satisfied()));
        assert!(findings.iter().all(|f| f.satisfied_by.is_none()));
    }

    #[test]
    fn test_singleton_group_uses_file_name_as_key() {
        let findings = probe(&existing(&["tsconfig.json"]), config_file_rules());
        let ts = findings
            .iter()
            .find(|f| f.group_key == "tsconfig.json")
            .unwrap();
        assert_eq!(ts.satisfied_by.as_deref(), Some("tsconfig.json"));
    }

    #[test]
    fn test_group_order_follows_first_occurrence() {
        let findings = probe(&existing(&[]), config_file_rules());
        let keys: Vec<_> = findings.iter().map(|f| f.group_key.as_str()).collect();
        assert_eq!(
            keys,
            vec![
                "vite",
                "tsconfig.json",
                "tailwind.config.js",
                "postcss.config.js",
                "eslint",
                "components.json"
            ]
        );
    }

    #[test]
    fn test_idempotent() {
        let files = existing(&["tsconfig.json", ".eslintrc.json"]);
        let first = probe(&files, config_file_rules());
        let second = probe(&files, config_file_rules());
        let flat = |fs: &[ConfigGroupFinding]| -> Vec<(String, Option<String>)> {
            fs.iter()
                .map(|f| (f.group_key.clone(), f.satisfied_by.clone()))
                .collect()
        };
        assert_eq!(flat(&first), flat(&second));
    }

    #[test]
    fn test_structure_probe() {
        let findings = probe_structure(|d| d == "src" || d == "public", directory_rules());
        assert_eq!(findings.len(), directory_rules().len());
        let present = |name: &str| {
            findings
                .iter()
                .find(|f| f.rule.dir_name == name)
                .map(|f| f.present)
                .unwrap()
        };
        assert!(present("src"));
        assert!(present("public"));
        assert!(!present("src/components"));
        assert!(!present("src/pages"));
    }
}
