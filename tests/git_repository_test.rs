use std::fs;
use std::path::Path;

use gitflow_release::git::{Git2Repository, Repository};
use tempfile::TempDir;

/// Initialize a git repository with an initial commit and a develop branch
fn init_repo(dir: &Path) -> git2::Repository {
    let repo = git2::Repository::init(dir).unwrap();

    let mut config = repo.config().unwrap();
    config.set_str("user.name", "Tester").unwrap();
    config.set_str("user.email", "tester@example.com").unwrap();

    fs::write(
        dir.join("Cargo.toml"),
        "[package]\nname = \"demo\"\nversion = \"0.1.0-SNAPSHOT\"\n",
    )
    .unwrap();

    {
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
    }

    {
        let head = repo.head().unwrap().peel_to_commit().unwrap();
        repo.branch("develop", &head, false).unwrap();
    }

    repo
}

fn current_branch(dir: &Path) -> String {
    let repo = git2::Repository::open(dir).unwrap();
    let name = repo.head().unwrap().shorthand().unwrap().to_string();
    name
}

#[test]
fn test_open_and_workdir() {
    let dir = TempDir::new().unwrap();
    init_repo(dir.path());

    let repo = Git2Repository::open(dir.path()).unwrap();
    let workdir = repo.workdir().unwrap();
    assert_eq!(
        workdir.canonicalize().unwrap(),
        dir.path().canonicalize().unwrap()
    );
}

#[test]
fn test_open_outside_repository_fails() {
    let dir = TempDir::new().unwrap();
    assert!(Git2Repository::open(dir.path()).is_err());
}

#[test]
fn test_is_clean_detects_untracked_and_modified_files() {
    let dir = TempDir::new().unwrap();
    init_repo(dir.path());
    let repo = Git2Repository::open(dir.path()).unwrap();

    assert!(repo.is_clean().unwrap());

    fs::write(dir.path().join("notes.txt"), "untracked").unwrap();
    assert!(!repo.is_clean().unwrap());

    fs::remove_file(dir.path().join("notes.txt")).unwrap();
    assert!(repo.is_clean().unwrap());

    fs::write(
        dir.path().join("Cargo.toml"),
        "[package]\nname = \"demo\"\nversion = \"0.1.0\"\n",
    )
    .unwrap();
    assert!(!repo.is_clean().unwrap());
}

#[test]
fn test_commit_all_stages_and_commits() {
    let dir = TempDir::new().unwrap();
    init_repo(dir.path());
    let repo = Git2Repository::open(dir.path()).unwrap();

    fs::write(
        dir.path().join("Cargo.toml"),
        "[package]\nname = \"demo\"\nversion = \"0.1.0\"\n",
    )
    .unwrap();
    repo.commit_all("update versions for release").unwrap();

    assert!(repo.is_clean().unwrap());

    let raw = git2::Repository::open(dir.path()).unwrap();
    let head = raw.head().unwrap().peel_to_commit().unwrap();
    assert_eq!(head.message().unwrap(), "update versions for release");
    assert_eq!(head.parent_count(), 1);
}

#[test]
fn test_create_and_checkout_release_branch() {
    let dir = TempDir::new().unwrap();
    init_repo(dir.path());
    let repo = Git2Repository::open(dir.path()).unwrap();

    repo.create_and_checkout("release/1.0.0", "develop").unwrap();
    assert_eq!(current_branch(dir.path()), "release/1.0.0");

    repo.checkout("develop").unwrap();
    assert_eq!(current_branch(dir.path()), "develop");
}

#[test]
fn test_create_and_checkout_missing_start_point_fails() {
    let dir = TempDir::new().unwrap();
    init_repo(dir.path());
    let repo = Git2Repository::open(dir.path()).unwrap();

    assert!(repo.create_and_checkout("release/1.0.0", "missing").is_err());
}

#[test]
fn test_checkout_missing_branch_fails() {
    let dir = TempDir::new().unwrap();
    init_repo(dir.path());
    let repo = Git2Repository::open(dir.path()).unwrap();

    let err = repo.checkout("no-such-branch").unwrap_err();
    assert!(err.to_string().contains("no-such-branch"));
}

#[test]
fn test_local_branches_with_prefix() {
    let dir = TempDir::new().unwrap();
    init_repo(dir.path());
    let repo = Git2Repository::open(dir.path()).unwrap();

    assert!(repo
        .local_branches_with_prefix("release/")
        .unwrap()
        .is_empty());

    repo.create_and_checkout("release/0.9.0", "develop").unwrap();

    let matching = repo.local_branches_with_prefix("release/").unwrap();
    assert_eq!(matching, vec!["release/0.9.0".to_string()]);
}

#[test]
fn test_set_config_value() {
    let dir = TempDir::new().unwrap();
    init_repo(dir.path());
    let repo = Git2Repository::open(dir.path()).unwrap();

    repo.set_config_value("gitflow.branch.development", "develop")
        .unwrap();
    repo.set_config_value("gitflow.prefix.release", "release/")
        .unwrap();

    let raw = git2::Repository::open(dir.path()).unwrap();
    let config = raw.config().unwrap().snapshot().unwrap();
    assert_eq!(
        config.get_string("gitflow.branch.development").unwrap(),
        "develop"
    );
    assert_eq!(
        config.get_string("gitflow.prefix.release").unwrap(),
        "release/"
    );
}

#[test]
fn test_fetch_and_compare_missing_remote_fails() {
    let dir = TempDir::new().unwrap();
    init_repo(dir.path());
    let repo = Git2Repository::open(dir.path()).unwrap();

    let err = repo.fetch_and_compare("origin", "develop").unwrap_err();
    assert!(err.to_string().contains("not found"));
}
