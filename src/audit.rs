//! Main audit orchestration logic

use crate::classify::classify;
use crate::config::AuditConfig;
use crate::error::Result;
use crate::heuristics::analyze;
use crate::manifest::PackageManifest;
use crate::probe::{probe, probe_structure};
use crate::recommend::recommend;
use crate::rules::{config_file_rules, content_rule_sets, dependency_rules, directory_rules};
use crate::snapshot::ProjectSnapshot;
use crate::types::{AuditReport, FileContentReport};
use std::path::Path;
use tracing::{debug, info};

/// Audit a frontend project and produce a complete report.
///
/// The manifest is loaded first (its absence is the only fatal error), then
/// a single filesystem snapshot feeds the three analyzers. Every other
/// problem lands in the report as a finding or diagnostic.
pub fn audit_project(project_path: &Path, config: &AuditConfig) -> Result<AuditReport> {
    info!("Starting audit of project at: {}", project_path.display());

    let manifest = PackageManifest::load(project_path)?;
    let declared = manifest.declared_dependencies();

    let content_targets: Vec<&str> = content_rule_sets()
        .iter()
        .flat_map(|set| set.candidates.iter().map(String::as_str))
        .collect();
    let probe_dirs: Vec<&str> = directory_rules()
        .iter()
        .map(|r| r.dir_name.as_str())
        .collect();
    let snapshot = ProjectSnapshot::capture(project_path, &content_targets, &probe_dirs);

    let mut report = AuditReport::new(
        manifest.project_name(),
        project_path.display().to_string(),
    );
    report.diagnostics = snapshot.diagnostics().to_vec();

    let active_rules: Vec<_> = dependency_rules()
        .iter()
        .filter(|r| !config.ignored_dependencies.contains(&r.name))
        .cloned()
        .collect();
    report.dependency_findings = classify(&declared, &active_rules);

    report.config_findings = probe(snapshot.existing_files(), config_file_rules());

    if config.check_structure {
        report.structure_findings = probe_structure(|d| snapshot.has_dir(d), directory_rules());
    }

    if config.check_content {
        for set in content_rule_sets() {
            // First existing candidate wins; a group with no file on disk is
            // already reported unsatisfied by the config probe.
            let Some(target) = set.candidates.iter().find(|c| snapshot.has_file(c)) else {
                debug!("No candidate file for content group '{}'", set.group_key);
                continue;
            };
            // An existing-but-unreadable target was already recorded as a
            // snapshot diagnostic; the engine yields no findings for it.
            let Some(content) = snapshot.content(target) else {
                continue;
            };
            report.content_reports.push(FileContentReport {
                file_name: target.clone(),
                findings: analyze(content, &set.checks),
            });
        }
    }

    report.actions = recommend(
        &report.dependency_findings,
        &report.config_findings,
        &report.content_reports,
    );
    report.compute_summary();

    info!(
        "Audit complete: {}/{} dependencies present, {}/{} config groups satisfied",
        report.summary.present_dependencies,
        report.summary.total_dependencies,
        report.summary.satisfied_config_groups,
        report.summary.satisfied_config_groups + report.summary.unsatisfied_config_groups,
    );

    Ok(report)
}
