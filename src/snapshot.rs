//! Filesystem prober: one immutable snapshot of the project root.
//!
//! Everything the analyzers look at (top-level file names, expected-directory
//! existence, contents of content-check targets) is captured up front, so no
//! stage races a later re-read against an earlier existence probe. Read
//! failures become diagnostics, never aborts.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Immutable view of a project directory, taken once per audit
#[derive(Debug, Clone)]
pub struct ProjectSnapshot {
    root: PathBuf,
    files: BTreeSet<String>,
    dirs: BTreeSet<String>,
    contents: BTreeMap<String, String>,
    diagnostics: Vec<String>,
}

impl ProjectSnapshot {
    /// Capture the project root.
    ///
    /// `content_targets` are file names whose text the content heuristics
    /// will need; `probe_dirs` are relative directory paths to test for
    /// existence. Only targets that exist get their contents read.
    pub fn capture(root: &Path, content_targets: &[&str], probe_dirs: &[&str]) -> Self {
        let mut files = BTreeSet::new();
        let mut diagnostics = Vec::new();

        match std::fs::read_dir(root) {
            Ok(entries) => {
                for entry in entries.flatten() {
                    if entry.path().is_file() {
                        files.insert(entry.file_name().to_string_lossy().into_owned());
                    }
                }
            }
            Err(e) => {
                warn!("Could not list {}: {}", root.display(), e);
                diagnostics.push(format!("Could not list {}: {}", root.display(), e));
            }
        }

        let dirs = probe_dirs
            .iter()
            .filter(|d| root.join(d).is_dir())
            .map(|d| d.to_string())
            .collect();

        let mut contents = BTreeMap::new();
        for target in content_targets {
            if !files.contains(*target) {
                continue;
            }
            match std::fs::read_to_string(root.join(target)) {
                Ok(text) => {
                    contents.insert(target.to_string(), text);
                }
                Err(e) => {
                    warn!("Could not read {}: {}", target, e);
                    diagnostics.push(format!("Could not read {}: {}", target, e));
                }
            }
        }

        debug!(
            "Snapshot of {}: {} files, {} content targets captured",
            root.display(),
            files.len(),
            contents.len()
        );

        Self {
            root: root.to_path_buf(),
            files,
            dirs,
            contents,
            diagnostics,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Top-level file names present at capture time
    pub fn existing_files(&self) -> &BTreeSet<String> {
        &self.files
    }

    pub fn has_file(&self, name: &str) -> bool {
        self.files.contains(name)
    }

    pub fn has_dir(&self, name: &str) -> bool {
        self.dirs.contains(name)
    }

    /// Captured text of a content target; `None` if absent or unreadable
    pub fn content(&self, name: &str) -> Option<&str> {
        self.contents.get(name).map(String::as_str)
    }

    /// Problems encountered while capturing (unreadable files etc.)
    pub fn diagnostics(&self) -> &[String] {
        &self.diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_capture_files_dirs_and_contents() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("package.json"), "{}").unwrap();
        fs::write(dir.path().join("tsconfig.json"), r#"{"strict": true}"#).unwrap();
        fs::create_dir_all(dir.path().join("src/components")).unwrap();

        let snapshot = ProjectSnapshot::capture(
            dir.path(),
            &["tsconfig.json", "vite.config.ts"],
            &["src", "src/components", "public"],
        );

        assert!(snapshot.has_file("package.json"));
        assert!(snapshot.has_file("tsconfig.json"));
        assert!(!snapshot.has_file("vite.config.ts"));
        assert!(snapshot.has_dir("src"));
        assert!(snapshot.has_dir("src/components"));
        assert!(!snapshot.has_dir("public"));
        assert_eq!(snapshot.content("tsconfig.json"), Some(r#"{"strict": true}"#));
        assert_eq!(snapshot.content("vite.config.ts"), None);
        assert!(snapshot.diagnostics().is_empty());
    }

    #[test]
    fn test_directories_are_not_files() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("src")).unwrap();

        let snapshot = ProjectSnapshot::capture(dir.path(), &[], &["src"]);
        assert!(!snapshot.has_file("src"));
        assert!(snapshot.has_dir("src"));
    }

    #[test]
    fn test_missing_root_degrades_to_diagnostic() {
        let dir = TempDir::new().unwrap();
        let gone = dir.path().join("nope");

        let snapshot = ProjectSnapshot::capture(&gone, &[], &[]);
        assert!(snapshot.existing_files().is_empty());
        assert_eq!(snapshot.diagnostics().len(), 1);
    }
}
