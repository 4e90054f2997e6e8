//! Manifest source: loading and shaping `package.json`
//!
//! The manifest is the one input whose absence is fatal; everything else the
//! audit looks at degrades to a finding.

use crate::error::{AuditError, Result};
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use tracing::debug;

/// Relevant subset of a `package.json` manifest.
///
/// Absent `dependencies`/`devDependencies` fields deserialize to empty maps;
/// an empty manifest object is valid and simply declares nothing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageManifest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub dependencies: BTreeMap<String, String>,
    #[serde(default)]
    pub dev_dependencies: BTreeMap<String, String>,
}

impl PackageManifest {
    /// Load and parse `package.json` from the project root.
    ///
    /// A missing file or malformed JSON is the audit's only fatal condition.
    pub fn load(project_dir: &Path) -> Result<Self> {
        let manifest_path = project_dir.join("package.json");

        if !manifest_path.is_file() {
            return Err(AuditError::ManifestNotFound(manifest_path));
        }

        let raw = std::fs::read_to_string(&manifest_path)?;
        let manifest: PackageManifest = serde_json::from_str(&raw)
            .map_err(|e| AuditError::manifest_parse(&manifest_path, e.to_string()))?;

        debug!(
            "Loaded manifest: {} runtime deps, {} dev deps",
            manifest.dependencies.len(),
            manifest.dev_dependencies.len()
        );

        Ok(manifest)
    }

    /// Union of runtime and development dependency names
    pub fn declared_dependencies(&self) -> BTreeSet<String> {
        self.dependencies
            .keys()
            .chain(self.dev_dependencies.keys())
            .cloned()
            .collect()
    }

    /// Project name, falling back to a placeholder when undeclared
    pub fn project_name(&self) -> String {
        self.name.clone().unwrap_or_else(|| "(unnamed)".to_string())
    }
}
