//! Release-start workflow orchestration
//!
//! Drives the full git-flow "release start" sequence over the
//! [Repository](crate::git::Repository), [Project](crate::project::Project)
//! and [Prompter](crate::ui::Prompter) seams: precondition checks, version
//! computation, release branch creation, version-bump commits on both
//! branches and the optional build.

use crate::config::Config;
use crate::domain::{self, DevVersion};
use crate::error::{GitFlowError, Result};
use crate::git::Repository;
use crate::project::Project;
use crate::ui::{self, Prompter};

/// Switches for the release-start workflow
///
/// Mirrors the CLI flags but in a format suitable for orchestration logic,
/// so the workflow can be called programmatically without depending on clap.
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseStartOptions {
    /// Release version to use in non-interactive mode (blank means default)
    pub release_version: Option<String>,

    /// Cut a release candidate: commit the RC version on the development
    /// branch before creating the release branch
    pub release_candidate: bool,

    /// Prompt for the release version instead of taking the default
    pub interactive: bool,

    /// Skip the snapshot-dependency check
    pub allow_snapshots: bool,

    /// Fetch the development branch and compare with its remote counterpart
    pub fetch_remote: bool,

    /// Use the bare release prefix as the branch name for every release
    pub same_branch_name: bool,

    /// Build the project after the branches are in place
    pub install_project: bool,

    /// Use the current project version as the release default without
    /// stripping the development qualifier
    pub keep_current_version: bool,
}

impl Default for ReleaseStartOptions {
    fn default() -> Self {
        ReleaseStartOptions {
            release_version: None,
            release_candidate: false,
            interactive: false,
            allow_snapshots: false,
            fetch_remote: false,
            same_branch_name: false,
            install_project: false,
            keep_current_version: false,
        }
    }
}

/// Result of a successful release start
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseStartOutcome {
    /// The release branch that was created and checked out
    pub release_branch: String,

    /// The version found on the development branch before any bumps
    pub previous_version: String,

    /// The release version selected for the branch
    pub release_version: String,

    /// The next development version committed on the development branch,
    /// or None when it could not be computed
    pub next_development_version: Option<String>,

    /// Whether the project build ran
    pub built: bool,
}

/// Runs the release-start workflow.
///
/// Sequence:
/// 1. Record the git-flow branch layout in git config
/// 2. Fail on uncommitted changes
/// 3. Fail on snapshot dependencies (unless allowed)
/// 4. Fail if a release branch already exists
/// 5. Fetch and compare the development branch (optional)
/// 6. Check out the development branch and read the project version
/// 7. Compute the default release version and select the final one
/// 8. Commit the RC version on the development branch (RC mode only)
/// 9. Create the release branch from the development branch
/// 10. Commit the release version on the release branch (when it changed)
/// 11. Commit the next development version on the development branch
/// 12. Build the project (optional)
pub fn run_release_start(
    repo: &dyn Repository,
    project: &dyn Project,
    prompter: &dyn Prompter,
    config: &Config,
    opts: &ReleaseStartOptions,
) -> Result<ReleaseStartOutcome> {
    init_flow_config(repo, config)?;

    if !repo.is_clean()? {
        return Err(GitFlowError::precondition(
            "You have some uncommitted files. Commit or discard them before proceeding.",
        ));
    }

    if !opts.allow_snapshots {
        let deps = project.snapshot_dependencies(&config.version.development_qualifier)?;
        if !deps.is_empty() {
            return Err(GitFlowError::precondition(format!(
                "Dependencies with development versions found: {}. Change them or allow snapshots.",
                deps.join(", ")
            )));
        }
    }

    let existing = repo.local_branches_with_prefix(&config.branches.release_prefix)?;
    if !existing.is_empty() {
        return Err(GitFlowError::precondition(
            "Release branch already exists. Cannot start release.",
        ));
    }

    if opts.fetch_remote {
        repo.fetch_and_compare(&config.branches.remote, &config.branches.development)?;
    }

    // The project version must be read on the development branch
    repo.checkout(&config.branches.development)?;
    let current_version = project.current_version()?;

    let parsed = DevVersion::parse(&current_version, &config.version.development_qualifier);

    let default_version = if opts.keep_current_version {
        current_version.clone()
    } else {
        match &parsed {
            Ok(v) => v.release_version(),
            Err(_) => {
                return Err(GitFlowError::version("Cannot get default project version."));
            }
        }
    };

    let candidate_version = if opts.release_candidate && !opts.keep_current_version {
        match &parsed {
            Ok(v) => Some(v.candidate_version(&config.version.candidate_qualifier)?),
            Err(_) => None,
        }
    } else {
        None
    };

    let version = select_version(prompter, opts, &default_version)?;

    // Validate the final branch name before any commits are made
    let release_branch = domain::release_branch_name(
        &config.branches.release_prefix,
        &version,
        opts.same_branch_name,
    )?;

    if let Some(rc_version) = &candidate_version {
        project.set_version(rc_version)?;
        repo.commit_all(&config.messages.release_candidate)?;
    }

    repo.create_and_checkout(&release_branch, &config.branches.development)?;

    if version != current_version && candidate_version.is_none() {
        project.set_version(&version)?;
        repo.commit_all(&config.messages.release_start)?;
    }

    repo.checkout(&config.branches.development)?;

    let next_development_version = match &parsed {
        Ok(v) => {
            let next = v.next_development_version()?;
            project.set_version(&next)?;
            repo.commit_all(&config.messages.next_development)?;
            Some(next)
        }
        Err(_) => {
            ui::display_status(
                "Cannot compute next development version; development branch left unchanged.",
            );
            None
        }
    };

    let built = if opts.install_project {
        project.build()?;
        true
    } else {
        false
    };

    Ok(ReleaseStartOutcome {
        release_branch,
        previous_version: current_version,
        release_version: version,
        next_development_version,
        built,
    })
}

/// Records the configured branch layout under the `gitflow.*` git config keys
fn init_flow_config(repo: &dyn Repository, config: &Config) -> Result<()> {
    repo.set_config_value("gitflow.branch.production", &config.branches.production)?;
    repo.set_config_value("gitflow.branch.development", &config.branches.development)?;
    repo.set_config_value("gitflow.prefix.release", &config.branches.release_prefix)?;
    Ok(())
}

/// Selects the release version.
///
/// Interactive mode prompts with the default and re-prompts while the answer
/// is a non-empty string that is not a valid branch name. A blank answer, in
/// either mode, resolves to the default.
fn select_version(
    prompter: &dyn Prompter,
    opts: &ReleaseStartOptions,
    default_version: &str,
) -> Result<String> {
    let answer = if opts.interactive {
        loop {
            let answer =
                prompter.prompt(&format!("What is release version? [{}]", default_version))?;

            if answer.is_empty() || domain::is_valid_branch_name(&answer) {
                break answer;
            }

            ui::display_status("The name of the branch is not valid.");
        }
    } else {
        opts.release_version.clone().unwrap_or_default()
    };

    if answer.trim().is_empty() {
        Ok(default_version.to_string())
    } else {
        Ok(answer)
    }
}
