use std::fs;
use std::path::Path;

use gitflow_release::config::Config;
use gitflow_release::git::{Git2Repository, Repository};
use gitflow_release::project::CargoProject;
use gitflow_release::ui::Prompter;
use gitflow_release::workflow::{run_release_start, ReleaseStartOptions};
use gitflow_release::Result;
use tempfile::TempDir;

struct NoPrompter;

impl Prompter for NoPrompter {
    fn prompt(&self, _question: &str) -> Result<String> {
        Ok(String::new())
    }
}

/// Initialize a git repository with a committed Cargo.toml and a develop branch
fn init_project_repo(dir: &Path) {
    let repo = git2::Repository::init(dir).unwrap();

    let mut config = repo.config().unwrap();
    config.set_str("user.name", "Tester").unwrap();
    config.set_str("user.email", "tester@example.com").unwrap();

    fs::write(
        dir.join("Cargo.toml"),
        "[package]\nname = \"demo\"\nversion = \"1.2.3-SNAPSHOT\"\n\n[dependencies]\nserde = \"1.0\"\n",
    )
    .unwrap();

    let mut index = repo.index().unwrap();
    index
        .add_all(["*"].iter(), git2::IndexAddOption::DEFAULT, None)
        .unwrap();
    index.write().unwrap();
    let tree_id = index.write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();
    let signature = repo.signature().unwrap();
    repo.commit(Some("HEAD"), &signature, &signature, "initial", &tree, &[])
        .unwrap();

    let head = repo.head().unwrap().peel_to_commit().unwrap();
    repo.branch("develop", &head, false).unwrap();
}

fn manifest_version(dir: &Path) -> String {
    let manifest = fs::read_to_string(dir.join("Cargo.toml")).unwrap();
    manifest
        .lines()
        .find(|l| l.starts_with("version = "))
        .unwrap()
        .trim_start_matches("version = ")
        .trim_matches('"')
        .to_string()
}

#[test]
fn test_release_start_on_real_repository() {
    let dir = TempDir::new().unwrap();
    init_project_repo(dir.path());

    let repo = Git2Repository::open(dir.path()).unwrap();
    let project = CargoProject::new(dir.path());
    let config = Config::default();
    let opts = ReleaseStartOptions::default();

    let outcome = run_release_start(&repo, &project, &NoPrompter, &config, &opts).unwrap();

    assert_eq!(outcome.release_branch, "release/1.2.3");
    assert_eq!(outcome.release_version, "1.2.3");
    assert_eq!(
        outcome.next_development_version,
        Some("1.2.4-SNAPSHOT".to_string())
    );

    // Workflow ends on develop with the next development version committed
    assert!(repo.is_clean().unwrap());
    assert_eq!(manifest_version(dir.path()), "1.2.4-SNAPSHOT");

    let raw = git2::Repository::open(dir.path()).unwrap();
    assert_eq!(raw.head().unwrap().shorthand().unwrap(), "develop");
    assert_eq!(
        raw.head().unwrap().peel_to_commit().unwrap().message().unwrap(),
        "update versions for next development iteration"
    );

    // The release branch carries the release version commit
    repo.checkout("release/1.2.3").unwrap();
    assert_eq!(manifest_version(dir.path()), "1.2.3");
    let raw = git2::Repository::open(dir.path()).unwrap();
    assert_eq!(
        raw.head().unwrap().peel_to_commit().unwrap().message().unwrap(),
        "update versions for release"
    );

    // The gitflow layout was recorded in git config
    let config_snapshot = raw.config().unwrap().snapshot().unwrap();
    assert_eq!(
        config_snapshot.get_string("gitflow.prefix.release").unwrap(),
        "release/"
    );
}

#[test]
fn test_release_start_on_real_repository_rejects_dirty_worktree() {
    let dir = TempDir::new().unwrap();
    init_project_repo(dir.path());
    fs::write(dir.path().join("scratch.txt"), "wip").unwrap();

    let repo = Git2Repository::open(dir.path()).unwrap();
    let project = CargoProject::new(dir.path());
    let config = Config::default();

    let err = run_release_start(
        &repo,
        &project,
        &NoPrompter,
        &config,
        &ReleaseStartOptions::default(),
    )
    .unwrap_err();

    assert!(err.to_string().contains("uncommitted"));
}

#[test]
fn test_second_release_start_fails_while_branch_exists() {
    let dir = TempDir::new().unwrap();
    init_project_repo(dir.path());

    let repo = Git2Repository::open(dir.path()).unwrap();
    let project = CargoProject::new(dir.path());
    let config = Config::default();
    let opts = ReleaseStartOptions::default();

    run_release_start(&repo, &project, &NoPrompter, &config, &opts).unwrap();

    let err = run_release_start(&repo, &project, &NoPrompter, &config, &opts).unwrap_err();
    assert!(err.to_string().contains("Release branch already exists"));
}
