//! CLI tool for auditing frontend projects

use clap::{Parser, Subcommand};
use colored::*;
use frontend_audit::{
    apply_actions, audit_project, write_env_files, AuditConfig, AuditReport, RemediationAction,
    Severity,
};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "frontend-audit")]
#[command(about = "Audit a React/TypeScript project for missing dependencies and configuration", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the frontend project to audit
    #[arg(short = 'p', long, default_value = ".")]
    project_path: PathBuf,

    /// Path to custom configuration file (TOML)
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Dependencies to ignore (can be specified multiple times)
    #[arg(long = "ignore")]
    ignore_dependencies: Vec<String>,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run full audit and display findings
    Scan {
        /// Display every finding, not just the problems
        #[arg(long)]
        detailed: bool,
    },

    /// Generate detailed audit report
    Report {
        /// Output format
        #[arg(short = 'f', long, default_value = "markdown")]
        format: ReportFormat,

        /// Output file (default: stdout)
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
    },

    /// Audit, then create missing config templates and env files
    Setup {
        /// Skip environment-file creation
        #[arg(long)]
        skip_env: bool,

        /// Show what would be created without writing anything
        #[arg(long)]
        dry_run: bool,
    },
}

#[derive(Clone, Debug)]
enum ReportFormat {
    Json,
    Markdown,
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ReportFormat::Json),
            "markdown" | "md" => Ok(ReportFormat::Markdown),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let mut config = if let Some(config_path) = &cli.config {
        match load_config(config_path) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{} Failed to load config: {}", "Error:".red().bold(), e);
                process::exit(1);
            }
        }
    } else {
        AuditConfig::default()
    };

    for dep in &cli.ignore_dependencies {
        config.ignored_dependencies.insert(dep.clone());
    }

    let spinner = indicatif::ProgressBar::new_spinner();
    spinner.set_style(
        indicatif::ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    spinner.set_message("Auditing project...");
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));

    let result = audit_project(&cli.project_path, &config);

    spinner.finish_and_clear();

    // Only a missing or unparsable manifest is fatal; everything else is a
    // finding inside a successful report.
    let report = match result {
        Ok(report) => report,
        Err(e) => {
            eprintln!("{} Audit failed: {}", "Error:".red().bold(), e);
            process::exit(1);
        }
    };

    match cli.command {
        Commands::Scan { detailed } => {
            display_findings(&report, detailed);
            display_actions(&report);
            display_summary(&report);
        }

        Commands::Report { format, output } => {
            let content = match format {
                ReportFormat::Json => generate_json_report(&report),
                ReportFormat::Markdown => generate_markdown_report(&report),
            };

            if let Some(output_path) = output {
                match std::fs::write(&output_path, content) {
                    Ok(_) => println!("Report written to: {}", output_path.display()),
                    Err(e) => {
                        eprintln!("{} Failed to write report: {}", "Error:".red().bold(), e);
                        process::exit(1);
                    }
                }
            } else {
                println!("{}", content);
            }
        }

        Commands::Setup { skip_env, dry_run } => {
            run_setup(&cli.project_path, &report, skip_env, dry_run);
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn load_config(path: &PathBuf) -> anyhow::Result<AuditConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: AuditConfig = toml::from_str(&content)?;
    Ok(config)
}

fn print_header(message: &str) {
    println!("\n{}", "=".repeat(60).magenta().bold());
    println!("{}", format!("{:^60}", message).magenta().bold());
    println!("{}", "=".repeat(60).magenta().bold());
}

fn print_found(message: &str) {
    println!("{} {}", "✓".green(), message.green());
}

fn print_missing(message: &str, severity: Severity) {
    match severity {
        Severity::Required => println!("{} {}", "✗".red(), message.red()),
        Severity::Advisory => println!("{} {}", "⚠".yellow(), message.yellow()),
    }
}

fn display_findings(report: &AuditReport, detailed: bool) {
    print_header(&format!("Auditing {}", report.project_name));

    print_header("Dependencies");
    for finding in &report.dependency_findings {
        let label = format!(
            "{} ({}, {})",
            finding.rule.name, finding.rule.category, finding.rule.description
        );
        if finding.present {
            if detailed {
                print_found(&format!("Found {}", label));
            }
        } else {
            print_missing(&format!("Missing {}", label), finding.rule.severity);
        }
    }

    print_header("Configuration Files");
    for finding in &report.config_findings {
        match &finding.satisfied_by {
            Some(file) => {
                if detailed {
                    print_found(&format!("Found {} ({})", file, finding.description));
                }
            }
            None => print_missing(
                &format!("Missing {} ({})", finding.group_key, finding.description),
                Severity::Required,
            ),
        }
    }

    if !report.structure_findings.is_empty() {
        print_header("Project Structure");
        for finding in &report.structure_findings {
            let label = format!("{}/ ({})", finding.rule.dir_name, finding.rule.description);
            if finding.present {
                if detailed {
                    print_found(&format!("Found {}", label));
                }
            } else {
                print_missing(&format!("Missing {}", label), Severity::Advisory);
            }
        }
    }

    if !report.content_reports.is_empty() {
        print_header("Configuration Analysis");
        for file_report in &report.content_reports {
            println!("\n{}", file_report.file_name.bold());
            for finding in &file_report.findings {
                if finding.matched {
                    if detailed {
                        print_found(finding.check_name.as_str());
                    }
                } else {
                    print_missing(&finding.check_name, finding.severity);
                }
            }
        }
    }

    if !report.diagnostics.is_empty() {
        print_header("Diagnostics");
        for diagnostic in &report.diagnostics {
            print_missing(diagnostic, Severity::Advisory);
        }
    }
}

fn display_actions(report: &AuditReport) {
    print_header("Recommendations");

    for action in &report.actions {
        match action {
            RemediationAction::InstallPackages { packages } => {
                println!("{}", "Install missing dependencies:".blue());
                println!("\n    npm install {}\n", packages.join(" "));
            }
            RemediationAction::CreateFile { file_name, .. } => {
                println!(
                    "{}",
                    format!("Create {} (run `setup` to write the template)", file_name).blue()
                );
            }
            RemediationAction::GenericAdvice { advice } => {
                println!("  - {}", advice);
            }
        }
    }
}

fn display_summary(report: &AuditReport) {
    print_header("Audit Summary");

    let s = &report.summary;
    println!(
        "Dependencies: {}/{} present",
        s.present_dependencies, s.total_dependencies
    );
    println!(
        "Config groups: {}/{} satisfied",
        s.satisfied_config_groups,
        s.satisfied_config_groups + s.unsatisfied_config_groups
    );
    if s.failed_required_checks + s.failed_advisory_checks > 0 {
        println!(
            "Content checks failing: {} required, {} advisory",
            s.failed_required_checks, s.failed_advisory_checks
        );
    }
    if s.missing_directories > 0 {
        println!("Missing directories: {}", s.missing_directories);
    }
    println!();

    if s.is_clean() {
        print_found("All required dependencies and configuration files are present!");
    } else {
        println!(
            "{} {}",
            "⚠".yellow(),
            "Some dependencies or configuration files are missing. See recommendations above."
                .yellow()
        );
    }
}

fn run_setup(project_path: &PathBuf, report: &AuditReport, skip_env: bool, dry_run: bool) {
    print_header("Setup");

    let verb = if dry_run { "Would create" } else { "Created" };

    match apply_actions(project_path, &report.actions, dry_run) {
        Ok(outcome) => {
            for name in &outcome.created {
                print_found(&format!("{} {}", verb, name));
            }
            for name in &outcome.skipped {
                println!("{} {} already exists, skipped", "ℹ".blue(), name);
            }
        }
        Err(e) => {
            eprintln!("{} Failed to write templates: {}", "Error:".red().bold(), e);
            process::exit(1);
        }
    }

    if !skip_env {
        match write_env_files(project_path, dry_run) {
            Ok(outcome) => {
                for name in &outcome.created {
                    print_found(&format!("{} {}", verb, name));
                }
                for name in &outcome.skipped {
                    println!("{} {} already exists, skipped", "ℹ".blue(), name);
                }
            }
            Err(e) => {
                eprintln!("{} Failed to write env files: {}", "Error:".red().bold(), e);
                process::exit(1);
            }
        }
    }

    print_header("Next Steps");
    println!("1. Review the audit output for remaining warnings");
    println!("2. Install any missing dependencies listed above");
    println!("3. Customize the environment variables for your project");
    println!("4. Run your project with `npm run dev` or `yarn dev`");
}

fn generate_json_report(report: &AuditReport) -> String {
    serde_json::to_string_pretty(report).unwrap_or_else(|e| {
        eprintln!("Failed to serialize report: {}", e);
        process::exit(1);
    })
}

fn generate_markdown_report(report: &AuditReport) -> String {
    let mut md = String::new();

    md.push_str(&format!("# Frontend Audit Report: {}\n\n", report.project_name));
    md.push_str(&format!("**Generated:** {}\n\n", report.timestamp));

    md.push_str("## Summary\n\n");
    let s = &report.summary;
    md.push_str(&format!(
        "- Dependencies present: {}/{}\n",
        s.present_dependencies, s.total_dependencies
    ));
    md.push_str(&format!(
        "- Missing (required): {}\n",
        s.missing_required_deps
    ));
    md.push_str(&format!(
        "- Missing (advisory): {}\n",
        s.missing_advisory_deps
    ));
    md.push_str(&format!(
        "- Config groups satisfied: {}/{}\n",
        s.satisfied_config_groups,
        s.satisfied_config_groups + s.unsatisfied_config_groups
    ));
    md.push_str(&format!(
        "- Content checks failing: {} required, {} advisory\n\n",
        s.failed_required_checks, s.failed_advisory_checks
    ));

    md.push_str("## Dependencies\n\n");
    md.push_str("| Package | Category | Severity | Present |\n");
    md.push_str("|---------|----------|----------|--------|\n");
    for finding in &report.dependency_findings {
        md.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            finding.rule.name,
            finding.rule.category,
            finding.rule.severity,
            if finding.present { "yes" } else { "no" }
        ));
    }

    md.push_str("\n## Configuration Files\n\n");
    md.push_str("| Group | Satisfied by | Description |\n");
    md.push_str("|-------|--------------|-------------|\n");
    for finding in &report.config_findings {
        md.push_str(&format!(
            "| {} | {} | {} |\n",
            finding.group_key,
            finding.satisfied_by.as_deref().unwrap_or("—"),
            finding.description
        ));
    }

    if !report.content_reports.is_empty() {
        md.push_str("\n## Content Checks\n\n");
        for file_report in &report.content_reports {
            md.push_str(&format!("### {}\n\n", file_report.file_name));
            for finding in &file_report.findings {
                md.push_str(&format!(
                    "- {}: {} ({})\n",
                    finding.check_name,
                    if finding.matched { "ok" } else { "not found" },
                    finding.severity
                ));
            }
            md.push('\n');
        }
    }

    if !report.diagnostics.is_empty() {
        md.push_str("\n## Diagnostics\n\n");
        for diagnostic in &report.diagnostics {
            md.push_str(&format!("- {}\n", diagnostic));
        }
    }

    md
}
