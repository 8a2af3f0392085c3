use crate::error::{GitFlowError, Result};
use crate::project::Project;
use std::cell::RefCell;

/// Mock project for testing without touching a manifest or running a build.
///
/// Records every version written through the trait and how many times the
/// build was invoked.
pub struct MockProject {
    version: RefCell<String>,
    version_history: RefCell<Vec<String>>,
    snapshot_deps: Vec<String>,
    build_count: RefCell<u32>,
    fail_build: bool,
    missing_version: bool,
}

impl MockProject {
    /// Create a mock project with the given current version
    pub fn new(version: impl Into<String>) -> Self {
        MockProject {
            version: RefCell::new(version.into()),
            version_history: RefCell::new(Vec::new()),
            snapshot_deps: Vec::new(),
            build_count: RefCell::new(0),
            fail_build: false,
            missing_version: false,
        }
    }

    /// Declare dependencies that carry the development qualifier
    pub fn with_snapshot_dependencies(mut self, deps: Vec<String>) -> Self {
        self.snapshot_deps = deps;
        self
    }

    /// Make build() fail
    pub fn with_failing_build(mut self) -> Self {
        self.fail_build = true;
        self
    }

    /// Make current_version() fail, as for a manifest without a version
    pub fn with_missing_version(mut self) -> Self {
        self.missing_version = true;
        self
    }

    /// Versions written through set_version, in order
    pub fn version_history(&self) -> Vec<String> {
        self.version_history.borrow().clone()
    }

    /// Number of times build() was invoked
    pub fn build_count(&self) -> u32 {
        *self.build_count.borrow()
    }
}

impl Project for MockProject {
    fn current_version(&self) -> Result<String> {
        if self.missing_version {
            return Err(GitFlowError::project("No package.version in manifest"));
        }
        Ok(self.version.borrow().clone())
    }

    fn set_version(&self, version: &str) -> Result<()> {
        *self.version.borrow_mut() = version.to_string();
        self.version_history.borrow_mut().push(version.to_string());
        Ok(())
    }

    fn snapshot_dependencies(&self, _qualifier: &str) -> Result<Vec<String>> {
        Ok(self.snapshot_deps.clone())
    }

    fn build(&self) -> Result<()> {
        if self.fail_build {
            return Err(GitFlowError::project("cargo build failed"));
        }
        *self.build_count.borrow_mut() += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_project_versions() {
        let project = MockProject::new("1.0.0-SNAPSHOT");
        assert_eq!(project.current_version().unwrap(), "1.0.0-SNAPSHOT");

        project.set_version("1.0.0").unwrap();
        assert_eq!(project.current_version().unwrap(), "1.0.0");
        assert_eq!(project.version_history(), vec!["1.0.0"]);
    }

    #[test]
    fn test_mock_project_build() {
        let project = MockProject::new("1.0.0");
        project.build().unwrap();
        assert_eq!(project.build_count(), 1);

        let failing = MockProject::new("1.0.0").with_failing_build();
        assert!(failing.build().is_err());
    }

    #[test]
    fn test_mock_project_snapshot_dependencies() {
        let project = MockProject::new("1.0.0")
            .with_snapshot_dependencies(vec!["dep-a".to_string()]);
        assert_eq!(
            project.snapshot_dependencies("SNAPSHOT").unwrap(),
            vec!["dep-a"]
        );
    }

    #[test]
    fn test_mock_project_missing_version() {
        let project = MockProject::new("ignored").with_missing_version();
        assert!(project.current_version().is_err());
    }
}
