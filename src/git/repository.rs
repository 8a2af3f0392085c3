use crate::error::{GitFlowError, Result};
use git2::{BranchType, Repository as Git2Repo};
use std::path::{Path, PathBuf};

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }

    /// The repository worktree root. Fails on bare repositories.
    pub fn workdir(&self) -> Result<PathBuf> {
        self.repo
            .workdir()
            .map(|p| p.to_path_buf())
            .ok_or_else(|| GitFlowError::branch("Repository has no worktree (bare repository)"))
    }

    fn branch_commit(&self, branch_name: &str) -> Result<git2::Commit<'_>> {
        let branch = self
            .repo
            .find_branch(branch_name, BranchType::Local)
            .map_err(|e| {
                GitFlowError::Branch(format!("Cannot find branch '{}': {}", branch_name, e))
            })?;

        let commit = branch.into_reference().peel_to_commit()?;
        Ok(commit)
    }
}

impl super::Repository for Git2Repository {
    fn set_config_value(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repo.config()?;
        config.set_str(key, value)?;
        Ok(())
    }

    fn is_clean(&self) -> Result<bool> {
        let mut options = git2::StatusOptions::new();
        options.include_untracked(true).include_ignored(false);

        let statuses = self.repo.statuses(Some(&mut options))?;
        Ok(statuses.is_empty())
    }

    fn local_branches_with_prefix(&self, prefix: &str) -> Result<Vec<String>> {
        let branches = self.repo.branches(Some(BranchType::Local))?;

        let mut matching = Vec::new();
        for branch in branches {
            let (branch, _) = branch?;
            if let Some(name) = branch.name()? {
                if name.starts_with(prefix) {
                    matching.push(name.to_string());
                }
            }
        }

        Ok(matching)
    }

    fn checkout(&self, branch: &str) -> Result<()> {
        let refname = format!("refs/heads/{}", branch);
        let object = self.repo.revparse_single(&refname).map_err(|e| {
            GitFlowError::Branch(format!("Cannot find branch '{}': {}", branch, e))
        })?;

        self.repo.checkout_tree(&object, None)?;
        self.repo.set_head(&refname)?;

        Ok(())
    }

    fn create_and_checkout(&self, branch: &str, start_point: &str) -> Result<()> {
        let start_commit = self.branch_commit(start_point)?;

        self.repo.branch(branch, &start_commit, false).map_err(|e| {
            GitFlowError::Branch(format!("Cannot create branch '{}': {}", branch, e))
        })?;

        self.checkout(branch)
    }

    fn commit_all(&self, message: &str) -> Result<()> {
        let mut index = self.repo.index()?;
        index.add_all(["*"].iter(), git2::IndexAddOption::DEFAULT, None)?;
        index.write()?;

        let tree_id = index.write_tree()?;
        let tree = self.repo.find_tree(tree_id)?;

        let signature = self.repo.signature()?;
        let head = self.repo.head()?.peel_to_commit()?;

        self.repo.commit(
            Some("HEAD"),
            &signature,
            &signature,
            message,
            &tree,
            &[&head],
        )?;

        Ok(())
    }

    fn fetch_and_compare(&self, remote_name: &str, branch: &str) -> Result<()> {
        let mut remote = self
            .repo
            .find_remote(remote_name)
            .map_err(|_| GitFlowError::remote(format!("Remote '{}' not found", remote_name)))?;

        let mut fetch_options = git2::FetchOptions::new();

        // Set credentials callback for authentication
        let mut callbacks = git2::RemoteCallbacks::new();
        callbacks.credentials(|_url, username_from_url, allowed_types| {
            // SSH key authentication
            if allowed_types.contains(git2::CredentialType::SSH_KEY) {
                let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
                let key_paths = vec![
                    format!("{}/.ssh/id_ed25519", home),
                    format!("{}/.ssh/id_rsa", home),
                    format!("{}/.ssh/id_ecdsa", home),
                ];

                for key_path in key_paths {
                    let path = std::path::Path::new(&key_path);
                    if path.exists() {
                        if let Ok(cred) = git2::Cred::ssh_key(
                            username_from_url.unwrap_or("git"),
                            None,
                            path,
                            None,
                        ) {
                            return Ok(cred);
                        }
                    }
                }

                // Try SSH agent as fallback
                if let Ok(cred) = git2::Cred::ssh_key_from_agent(username_from_url.unwrap_or("git"))
                {
                    return Ok(cred);
                }
            }

            // Fall back to default credentials
            git2::Cred::default()
        });

        fetch_options.remote_callbacks(callbacks);

        let refspec = format!("+refs/heads/{}:refs/remotes/{}/{}", branch, remote_name, branch);
        remote
            .fetch(&[refspec.as_str()], Some(&mut fetch_options), None)
            .map_err(|e| {
                GitFlowError::remote(format!(
                    "Failed to fetch from remote '{}': {}",
                    remote_name, e
                ))
            })?;

        // Remote branch may not exist yet; nothing to compare then
        let remote_ref = match self
            .repo
            .find_reference(&format!("refs/remotes/{}/{}", remote_name, branch))
        {
            Ok(r) => r,
            Err(_) => return Ok(()),
        };

        let remote_oid = remote_ref.target().ok_or_else(|| {
            GitFlowError::remote(format!(
                "Remote branch {}/{} reference is invalid",
                remote_name, branch
            ))
        })?;

        let local_oid = self.branch_commit(branch)?.id();

        let (_, behind) = self.repo.graph_ahead_behind(local_oid, remote_oid)?;
        if behind > 0 {
            return Err(GitFlowError::remote(format!(
                "Remote branch '{}/{}' is ahead of the local branch. Pull before starting a release.",
                remote_name, branch
            )));
        }

        Ok(())
    }
}
