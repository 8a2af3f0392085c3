//! Git operations abstraction layer
//!
//! The release workflow only talks to the [Repository] trait, which keeps
//! version-control execution behind a seam. Concrete implementations:
//!
//! - [repository::Git2Repository]: real implementation using the `git2` crate
//! - [mock::MockRepository]: in-memory implementation for testing

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;

/// Version-control operations required by the release-start workflow.
///
/// All methods return [crate::error::Result<T>]. Implementations should map
/// underlying errors (like `git2::Error`) to the appropriate
/// [crate::error::GitFlowError] variants.
pub trait Repository {
    /// Write a git config value in the repository (used for the `gitflow.*` keys)
    fn set_config_value(&self, key: &str, value: &str) -> Result<()>;

    /// Whether the worktree and index have no uncommitted changes.
    /// Untracked files count as dirty; ignored files do not.
    fn is_clean(&self) -> Result<bool>;

    /// List local branch names starting with the given prefix
    fn local_branches_with_prefix(&self, prefix: &str) -> Result<Vec<String>>;

    /// Check out an existing local branch
    fn checkout(&self, branch: &str) -> Result<()>;

    /// Create a new branch from `start_point` and check it out
    fn create_and_checkout(&self, branch: &str, start_point: &str) -> Result<()>;

    /// Stage all changes and commit them with the given message
    fn commit_all(&self, message: &str) -> Result<()>;

    /// Fetch `branch` from `remote` and fail if the remote counterpart is
    /// ahead of the local branch. A missing remote branch is not an error.
    fn fetch_and_compare(&self, remote: &str, branch: &str) -> Result<()>;
}
