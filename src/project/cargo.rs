use crate::error::{GitFlowError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use toml_edit::{value, DocumentMut};

const DEPENDENCY_TABLES: [&str; 3] = ["dependencies", "dev-dependencies", "build-dependencies"];

/// Cargo project rooted at a directory containing `Cargo.toml`.
///
/// Version edits go through `toml_edit` so the rest of the manifest keeps
/// its formatting and comments.
pub struct CargoProject {
    root: PathBuf,
}

impl CargoProject {
    /// Create a project for the given worktree root
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        CargoProject {
            root: root.as_ref().to_path_buf(),
        }
    }

    fn manifest_path(&self) -> PathBuf {
        self.root.join("Cargo.toml")
    }

    fn read_manifest(&self) -> Result<DocumentMut> {
        let path = self.manifest_path();
        let content = fs::read_to_string(&path).map_err(|e| {
            GitFlowError::project(format!("Cannot read {}: {}", path.display(), e))
        })?;

        content.parse::<DocumentMut>().map_err(|e| {
            GitFlowError::project(format!("Cannot parse {}: {}", path.display(), e))
        })
    }
}

impl super::Project for CargoProject {
    fn current_version(&self) -> Result<String> {
        let doc = self.read_manifest()?;

        doc.get("package")
            .and_then(|p| p.get("version"))
            .and_then(|v| v.as_str())
            .map(|v| v.to_string())
            .ok_or_else(|| {
                GitFlowError::project(format!(
                    "No package.version in {}",
                    self.manifest_path().display()
                ))
            })
    }

    fn set_version(&self, version: &str) -> Result<()> {
        let mut doc = self.read_manifest()?;

        let package = doc
            .get_mut("package")
            .and_then(|p| p.as_table_mut())
            .ok_or_else(|| {
                GitFlowError::project(format!(
                    "No [package] table in {}",
                    self.manifest_path().display()
                ))
            })?;

        package["version"] = value(version);

        fs::write(self.manifest_path(), doc.to_string()).map_err(|e| {
            GitFlowError::project(format!(
                "Cannot write {}: {}",
                self.manifest_path().display(),
                e
            ))
        })?;

        Ok(())
    }

    fn snapshot_dependencies(&self, qualifier: &str) -> Result<Vec<String>> {
        let doc = self.read_manifest()?;
        let marker = format!("-{}", qualifier);

        let mut found = Vec::new();
        for table_name in DEPENDENCY_TABLES {
            let table = match doc.get(table_name).and_then(|t| t.as_table()) {
                Some(table) => table,
                None => continue,
            };

            for (name, item) in table.iter() {
                // Either `dep = "1.2.3-SNAPSHOT"` or `dep = { version = "...", ... }`
                let requirement = item
                    .as_str()
                    .or_else(|| item.get("version").and_then(|v| v.as_str()));

                if let Some(requirement) = requirement {
                    if requirement.contains(&marker) {
                        found.push(name.to_string());
                    }
                }
            }
        }

        Ok(found)
    }

    fn build(&self) -> Result<()> {
        let output = Command::new("cargo")
            .arg("build")
            .current_dir(&self.root)
            .output()
            .map_err(|e| GitFlowError::project(format!("Failed to run cargo build: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(GitFlowError::project(format!(
                "cargo build failed with exit code {}\n{}",
                output.status.code().unwrap_or(-1),
                stderr
            )));
        }

        Ok(())
    }
}
