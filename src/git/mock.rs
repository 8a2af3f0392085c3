use crate::error::{GitFlowError, Result};
use crate::git::Repository;
use std::cell::RefCell;
use std::collections::HashMap;

/// Mock repository for testing without actual git operations.
///
/// Records checkouts, branch creations, commits and config writes so tests
/// can assert on the sequence of state transitions the workflow performs.
pub struct MockRepository {
    clean: bool,
    fetch_error: Option<String>,
    branches: RefCell<Vec<String>>,
    head: RefCell<String>,
    commits: RefCell<Vec<(String, String)>>,
    config: RefCell<HashMap<String, String>>,
}

impl MockRepository {
    /// Create a mock repository with the standard git-flow branches,
    /// currently on the production branch
    pub fn new() -> Self {
        MockRepository {
            clean: true,
            fetch_error: None,
            branches: RefCell::new(vec!["master".to_string(), "develop".to_string()]),
            head: RefCell::new("master".to_string()),
            commits: RefCell::new(Vec::new()),
            config: RefCell::new(HashMap::new()),
        }
    }

    /// Mark the worktree as dirty
    pub fn set_dirty(&mut self) {
        self.clean = false;
    }

    /// Make fetch_and_compare fail with the given message
    pub fn set_fetch_error(&mut self, message: impl Into<String>) {
        self.fetch_error = Some(message.into());
    }

    /// Add a local branch
    pub fn add_branch(&mut self, name: impl Into<String>) {
        self.branches.borrow_mut().push(name.into());
    }

    /// The branch currently checked out
    pub fn current_branch(&self) -> String {
        self.head.borrow().clone()
    }

    /// Whether a local branch exists
    pub fn branch_exists(&self, name: &str) -> bool {
        self.branches.borrow().iter().any(|b| b == name)
    }

    /// Commits recorded as (branch, message) pairs, in order
    pub fn commits(&self) -> Vec<(String, String)> {
        self.commits.borrow().clone()
    }

    /// A git config value written through the trait
    pub fn config_value(&self, key: &str) -> Option<String> {
        self.config.borrow().get(key).cloned()
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn set_config_value(&self, key: &str, value: &str) -> Result<()> {
        self.config
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn is_clean(&self) -> Result<bool> {
        Ok(self.clean)
    }

    fn local_branches_with_prefix(&self, prefix: &str) -> Result<Vec<String>> {
        Ok(self
            .branches
            .borrow()
            .iter()
            .filter(|b| b.starts_with(prefix))
            .cloned()
            .collect())
    }

    fn checkout(&self, branch: &str) -> Result<()> {
        if !self.branch_exists(branch) {
            return Err(GitFlowError::branch(format!(
                "Cannot find branch '{}'",
                branch
            )));
        }
        *self.head.borrow_mut() = branch.to_string();
        Ok(())
    }

    fn create_and_checkout(&self, branch: &str, start_point: &str) -> Result<()> {
        if !self.branch_exists(start_point) {
            return Err(GitFlowError::branch(format!(
                "Cannot find branch '{}'",
                start_point
            )));
        }
        if self.branch_exists(branch) {
            return Err(GitFlowError::branch(format!(
                "Branch '{}' already exists",
                branch
            )));
        }
        self.branches.borrow_mut().push(branch.to_string());
        *self.head.borrow_mut() = branch.to_string();
        Ok(())
    }

    fn commit_all(&self, message: &str) -> Result<()> {
        let branch = self.head.borrow().clone();
        self.commits
            .borrow_mut()
            .push((branch, message.to_string()));
        Ok(())
    }

    fn fetch_and_compare(&self, _remote: &str, _branch: &str) -> Result<()> {
        match &self.fetch_error {
            Some(message) => Err(GitFlowError::remote(message.clone())),
            None => Ok(()),
        }
    }
}
