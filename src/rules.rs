//! Baseline rule tables: dependencies, config-file groups, content checks,
//! and expected project directories.
//!
//! The tables are fixed at process start and shared by every audit run. Rule
//! order is meaningful: findings preserve table order, and group aliasing
//! resolves to the first member present.

use crate::heuristics::{ContentCheckRule, ContentRuleSet};
use crate::types::{ConfigFileRule, DependencyCategory, DependencyRule, DirectoryRule, Severity};
use once_cell::sync::Lazy;

fn dep(
    name: &str,
    category: DependencyCategory,
    severity: Severity,
    description: &str,
) -> DependencyRule {
    DependencyRule {
        name: name.to_string(),
        category,
        severity,
        description: description.to_string(),
    }
}

fn config(file_name: &str, group_key: &str, description: &str) -> ConfigFileRule {
    ConfigFileRule {
        file_name: file_name.to_string(),
        group_key: group_key.to_string(),
        description: description.to_string(),
    }
}

/// Baseline dependency rules, in report order.
pub fn dependency_rules() -> &'static [DependencyRule] {
    static RULES: Lazy<Vec<DependencyRule>> = Lazy::new(|| {
        use DependencyCategory::*;
        use Severity::*;
        vec![
            dep("react", Essential, Required, "Core React library"),
            dep("react-dom", Essential, Required, "React DOM manipulation"),
            dep("typescript", Essential, Required, "TypeScript language support"),
            dep("vite", BuildTool, Required, "Build tool"),
            dep("@vitejs/plugin-react", BuildTool, Required, "React plugin for Vite"),
            dep("tailwindcss", Styling, Required, "Utility-first CSS framework"),
            dep("postcss", Styling, Required, "CSS transformation tool"),
            dep(
                "autoprefixer",
                Styling,
                Required,
                "PostCSS plugin to parse CSS and add vendor prefixes",
            ),
            dep("eslint", Linting, Required, "Linting utility"),
            dep("typescript-eslint", Linting, Required, "TypeScript ESLint"),
            dep("vitest", Testing, Advisory, "Vite-native testing framework"),
            dep(
                "@testing-library/react",
                Testing,
                Advisory,
                "React testing utilities",
            ),
            dep(
                "@testing-library/jest-dom",
                Testing,
                Advisory,
                "Custom jest matchers for DOM testing",
            ),
            dep("@types/react", TypeDefs, Advisory, "React type definitions"),
            dep(
                "@types/react-dom",
                TypeDefs,
                Advisory,
                "React DOM type definitions",
            ),
            dep("@types/node", TypeDefs, Advisory, "Node.js type definitions"),
        ]
    });
    &RULES
}

/// Baseline config-file rules. Files sharing a group key are aliases.
pub fn config_file_rules() -> &'static [ConfigFileRule] {
    static RULES: Lazy<Vec<ConfigFileRule>> = Lazy::new(|| {
        vec![
            config("vite.config.ts", "vite", "Vite configuration"),
            config("vite.config.js", "vite", "Vite configuration (JavaScript)"),
            config("tsconfig.json", "tsconfig.json", "TypeScript configuration"),
            config(
                "tailwind.config.js",
                "tailwind.config.js",
                "Tailwind CSS configuration",
            ),
            config(
                "postcss.config.js",
                "postcss.config.js",
                "PostCSS configuration",
            ),
            config("eslint.config.js", "eslint", "ESLint configuration"),
            config(".eslintrc.js", "eslint", "ESLint configuration (legacy)"),
            config(
                ".eslintrc.json",
                "eslint",
                "ESLint configuration (legacy JSON)",
            ),
            config(
                "components.json",
                "components.json",
                "shadcn/ui components configuration",
            ),
        ]
    });
    &RULES
}

/// Expected directories for a conventional React/TypeScript layout.
pub fn directory_rules() -> &'static [DirectoryRule] {
    static RULES: Lazy<Vec<DirectoryRule>> = Lazy::new(|| {
        let dir = |dir_name: &str, description: &str| DirectoryRule {
            dir_name: dir_name.to_string(),
            description: description.to_string(),
        };
        vec![
            dir("src", "Source code directory"),
            dir("src/components", "React components"),
            dir("src/pages", "Page components"),
            dir("public", "Static assets"),
        ]
    });
    &RULES
}

/// Language-version identifiers accepted by the tsconfig "modern target" check.
pub const MODERN_TS_TARGETS: &[&str] = &["ES2020", "ES2021", "ES2022"];

/// Baseline content-check rule sets, one per analyzable config group.
///
/// Patterns are lexical approximations of intent, evaluated against the full
/// file text. Checks that span properties use `(?s)` so `.` crosses lines.
pub fn content_rule_sets() -> &'static [ContentRuleSet] {
    static SETS: Lazy<Vec<ContentRuleSet>> = Lazy::new(|| {
        vec![
            ContentRuleSet::new(
                "vite",
                &["vite.config.ts", "vite.config.js"],
                vec![
                    ContentCheckRule::new(
                        "has UI-framework plugin",
                        Severity::Required,
                        r"@vitejs/plugin-react",
                    ),
                    ContentCheckRule::new(
                        "has path aliases",
                        Severity::Advisory,
                        r"(?s)resolve.*alias",
                    ),
                    ContentCheckRule::new(
                        "has build optimizations",
                        Severity::Advisory,
                        r"(?s)build.*rollupOptions",
                    ),
                ],
            ),
            ContentRuleSet::new(
                "tsconfig.json",
                &["tsconfig.json"],
                vec![
                    ContentCheckRule::new(
                        "strict mode enabled",
                        Severity::Advisory,
                        r#""strict"\s*:\s*true"#,
                    ),
                    ContentCheckRule::new(
                        "has path aliases",
                        Severity::Advisory,
                        r#""paths""#,
                    ),
                    ContentCheckRule::new(
                        "target is modern",
                        Severity::Advisory,
                        r#""target"\s*:\s*"(ES2020|ES2021|ES2022)""#,
                    ),
                ],
            ),
            ContentRuleSet::new(
                "tailwind.config.js",
                &["tailwind.config.js"],
                vec![
                    ContentCheckRule::new(
                        "has content-path configuration",
                        Severity::Required,
                        r"(?s)content.*\[.*\]",
                    ),
                    ContentCheckRule::new(
                        "has theme customization",
                        Severity::Advisory,
                        r"(?s)theme.*extend",
                    ),
                    ContentCheckRule::new(
                        "has plugins list",
                        Severity::Advisory,
                        r"(?s)plugins.*\[",
                    ),
                ],
            ),
        ]
    });
    &SETS
}
