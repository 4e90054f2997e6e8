//! Content Heuristic Engine
//!
//! Applies named pattern checks to the raw text of a config file. The checks
//! are lexical, not syntactic: a pattern appearing in a comment still counts,
//! and equivalent code phrased differently is missed. That trade-off is the
//! point — the engine approximates intent without parsing JavaScript or JSON.

use crate::types::{ContentFinding, Severity};
use regex::Regex;

/// A single named pattern check against a file's full text
#[derive(Debug, Clone)]
pub struct ContentCheckRule {
    pub check_name: String,
    pub severity: Severity,
    pattern: Regex,
}

impl ContentCheckRule {
    /// Build a rule from a pattern literal.
    ///
    /// Panics on an invalid pattern; the baseline tables are the only source
    /// of patterns and are covered by tests.
    pub fn new(check_name: &str, severity: Severity, pattern: &str) -> Self {
        Self {
            check_name: check_name.to_string(),
            severity,
            pattern: Regex::new(pattern).expect("baseline content pattern must be valid"),
        }
    }

    /// Evaluate the pattern against the full file text
    pub fn matches(&self, content: &str) -> bool {
        self.pattern.is_match(content)
    }
}

/// The checks for one config group, with its candidate file names in
/// preference order (first existing candidate is analyzed)
#[derive(Debug, Clone)]
pub struct ContentRuleSet {
    pub group_key: String,
    pub candidates: Vec<String>,
    pub checks: Vec<ContentCheckRule>,
}

impl ContentRuleSet {
    pub fn new(group_key: &str, candidates: &[&str], checks: Vec<ContentCheckRule>) -> Self {
        Self {
            group_key: group_key.to_string(),
            candidates: candidates.iter().map(|c| c.to_string()).collect(),
            checks,
        }
    }
}

/// Evaluate every check against the file content, in rule order.
///
/// Pure function; reading the file (and reporting a file that cannot be
/// read) is the caller's job.
pub fn analyze(content: &str, checks: &[ContentCheckRule]) -> Vec<ContentFinding> {
    checks
        .iter()
        .map(|check| ContentFinding {
            check_name: check.check_name.clone(),
            matched: check.matches(content),
            severity: check.severity,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::content_rule_sets;

    fn checks_for(group: &str) -> &'static [ContentCheckRule] {
        &content_rule_sets()
            .iter()
            .find(|s| s.group_key == group)
            .unwrap()
            .checks
    }

    #[test]
    fn test_strict_mode_true_matches() {
        let content = r#"{"compilerOptions": {"strict": true}}"#;
        let findings = analyze(content, checks_for("tsconfig.json"));
        let strict = findings.iter().find(|f| f.check_name == "strict mode enabled").unwrap();
        assert!(strict.matched);
    }

    #[test]
    fn test_strict_mode_false_does_not_match() {
        let content = r#"{"compilerOptions": {"strict": false}}"#;
        let findings = analyze(content, checks_for("tsconfig.json"));
        let strict = findings.iter().find(|f| f.check_name == "strict mode enabled").unwrap();
        assert!(!strict.matched);
    }

    #[test]
    fn test_strict_mode_tolerates_whitespace() {
        let content = "{\n  \"compilerOptions\": {\n    \"strict\" : true\n  }\n}";
        let findings = analyze(content, checks_for("tsconfig.json"));
        assert!(findings.iter().any(|f| f.check_name == "strict mode enabled" && f.matched));
    }

    #[test]
    fn test_vite_plugin_check_spans_lines() {
        let content = "import { defineConfig } from 'vite'\n\
                       import react from '@vitejs/plugin-react'\n\
                       export default defineConfig({\n\
                         plugins: [react()],\n\
                         resolve: {\n\
                           alias: { '@': '/src' },\n\
                         },\n\
                       })\n";
        let findings = analyze(content, checks_for("vite"));
        assert!(findings.iter().any(|f| f.check_name == "has UI-framework plugin" && f.matched));
        assert!(findings.iter().any(|f| f.check_name == "has path aliases" && f.matched));
        assert!(findings.iter().any(|f| f.check_name == "has build optimizations" && !f.matched));
    }

    #[test]
    fn test_tailwind_checks() {
        let content = "module.exports = {\n\
                       \x20 content: ['./src/**/*.{ts,tsx}'],\n\
                       \x20 theme: {\n\
                       \x20   extend: {},\n\
                       \x20 },\n\
                       \x20 plugins: [],\n\
                       }\n";
        let findings = analyze(content, checks_for("tailwind.config.js"));
        assert!(findings.iter().all(|f| f.matched));
    }

    #[test]
    fn test_matches_are_monotone_under_appended_text() {
        let base = "import react from '@vitejs/plugin-react'\n\
                    export default { plugins: [react()], resolve: { alias: {} } }\n";
        let before = analyze(base, checks_for("vite"));

        let mut extended = base.to_string();
        extended.push_str("\n// trailing commentary that mentions nothing relevant\n");
        let after = analyze(&extended, checks_for("vite"));

        for (b, a) in before.iter().zip(after.iter()) {
            if b.matched {
                assert!(a.matched, "{} lost its match after append", b.check_name);
            }
        }
    }

    #[test]
    fn test_finding_count_and_order_follow_rules() {
        let checks = checks_for("tailwind.config.js");
        let findings = analyze("", checks);
        assert_eq!(findings.len(), checks.len());
        for (finding, check) in findings.iter().zip(checks.iter()) {
            assert_eq!(finding.check_name, check.check_name);
            assert_eq!(finding.severity, check.severity);
            assert!(!finding.matched);
        }
    }

    #[test]
    fn test_pattern_in_comment_still_counts() {
        // Lexical by design: commented-out config satisfies the check.
        let content = "// plugins: [react()] via @vitejs/plugin-react someday\n";
        let findings = analyze(content, checks_for("vite"));
        assert!(findings.iter().any(|f| f.check_name == "has UI-framework plugin" && f.matched));
    }
}
