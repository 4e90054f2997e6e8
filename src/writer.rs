//! File writer: materializes remediation actions on disk.
//!
//! Existing files are never overwritten; every path that was skipped or
//! created is reported back so the CLI can say what happened.

use crate::error::Result;
use crate::templates::{env_templates, GITIGNORE_ENV_BLOCK};
use crate::types::RemediationAction;
use std::path::Path;
use tracing::{debug, info};

/// What a write pass did (or would do, under dry-run)
#[derive(Debug, Default)]
pub struct WriteOutcome {
    pub created: Vec<String>,
    pub skipped: Vec<String>,
}

impl WriteOutcome {
    fn create(&mut self, root: &Path, name: &str, contents: &str, dry_run: bool) -> Result<()> {
        if dry_run {
            debug!("Dry run: would create {}", name);
        } else {
            std::fs::write(root.join(name), contents)?;
            info!("Created {}", name);
        }
        self.created.push(name.to_string());
        Ok(())
    }

    fn skip(&mut self, name: &str) {
        debug!("{} already exists, skipping", name);
        self.skipped.push(name.to_string());
    }
}

/// Write the config templates carried by `CreateFile` actions.
///
/// Install commands and advice are not actionable here and pass through
/// untouched.
pub fn apply_actions(
    root: &Path,
    actions: &[RemediationAction],
    dry_run: bool,
) -> Result<WriteOutcome> {
    let mut outcome = WriteOutcome::default();

    for action in actions {
        let RemediationAction::CreateFile { file_name, contents } = action else {
            continue;
        };
        if root.join(file_name).exists() {
            outcome.skip(file_name);
        } else {
            outcome.create(root, file_name, contents, dry_run)?;
        }
    }

    Ok(outcome)
}

/// Create missing environment files and make sure `.gitignore` excludes them
pub fn write_env_files(root: &Path, dry_run: bool) -> Result<WriteOutcome> {
    let mut outcome = WriteOutcome::default();

    for (name, contents) in env_templates() {
        if root.join(name).is_file() {
            outcome.skip(name);
        } else {
            outcome.create(root, name, contents, dry_run)?;
        }
    }

    ensure_gitignore_env(root, dry_run, &mut outcome)?;

    Ok(outcome)
}

fn ensure_gitignore_env(root: &Path, dry_run: bool, outcome: &mut WriteOutcome) -> Result<()> {
    let gitignore = root.join(".gitignore");

    if !gitignore.is_file() {
        outcome.create(root, ".gitignore", GITIGNORE_ENV_BLOCK, dry_run)?;
        return Ok(());
    }

    let existing = std::fs::read_to_string(&gitignore)?;
    if existing.contains(".env") {
        outcome.skip(".gitignore");
        return Ok(());
    }

    if dry_run {
        debug!("Dry run: would append env block to .gitignore");
    } else {
        let mut updated = existing;
        if !updated.ends_with('\n') {
            updated.push('\n');
        }
        updated.push('\n');
        updated.push_str(GITIGNORE_ENV_BLOCK);
        std::fs::write(&gitignore, updated)?;
        info!("Updated .gitignore to exclude env files");
    }
    outcome.created.push(".gitignore".to_string());
    Ok(())
}
