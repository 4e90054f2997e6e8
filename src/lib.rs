//! # frontend_audit
//!
//! Audit a React/TypeScript project directory against a known-good baseline:
//! - **Dependency classification**: which essential, build, styling, linting,
//!   testing, and type-definition packages the manifest declares
//! - **Config probing**: whether expected configuration files exist, with
//!   equivalent variants (TypeScript vs JavaScript configs) treated as one
//! - **Content heuristics**: lexical pattern checks on key config files
//! - **Remediation**: a batched install command, file templates, and advice
//!
//! ## Quick Start
//!
//! ```no_run
//! use frontend_audit::{audit_project, AuditConfig};
//! use std::path::Path;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = AuditConfig::default();
//! let report = audit_project(Path::new("."), &config)?;
//!
//! for finding in &report.dependency_findings {
//!     println!("{}: present = {}", finding.rule.name, finding.present);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! The analyzers are pure functions over one immutable filesystem snapshot;
//! only a missing or unparsable `package.json` aborts an audit. Content
//! checks are pattern heuristics by design and can both false-positive and
//! false-negative — they approximate intent without parsing source.

mod audit;
mod classify;
mod config;
mod error;
mod heuristics;
mod manifest;
mod probe;
mod recommend;
mod rules;
mod snapshot;
mod templates;
mod types;
mod writer;

// Re-export public API
pub use audit::audit_project;
pub use classify::classify;
pub use config::{AuditConfig, AuditConfigBuilder};
pub use error::{AuditError, Result};
pub use heuristics::{analyze, ContentCheckRule, ContentRuleSet};
pub use manifest::PackageManifest;
pub use probe::{probe, probe_structure};
pub use recommend::{recommend, GENERAL_ADVICE};
pub use rules::{
    config_file_rules, content_rule_sets, dependency_rules, directory_rules, MODERN_TS_TARGETS,
};
pub use snapshot::ProjectSnapshot;
pub use templates::template_for_group;
pub use types::{
    AuditReport, AuditSummary, ConfigFileRule, ConfigGroupFinding, ContentFinding,
    DependencyCategory, DependencyFinding, DependencyRule, DirectoryRule, FileContentReport,
    RemediationAction, Severity, StructureFinding,
};
pub use writer::{apply_actions, write_env_files, WriteOutcome};
