use anyhow::Result;
use clap::Parser;

use gitflow_release::git::Git2Repository;
use gitflow_release::project::CargoProject;
use gitflow_release::ui::{self, StdinPrompter};
use gitflow_release::workflow::{run_release_start, ReleaseStartOptions};
use gitflow_release::config;

#[derive(clap::Parser)]
#[command(
    name = "gitflow-release",
    about = "Start a git-flow release branch with automated version bumps"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Release version to use in non-interactive mode")]
    release_version: Option<String>,

    #[arg(long, help = "Cut a release candidate instead of a final release")]
    rc: bool,

    #[arg(long, help = "Use the bare release prefix as the branch name")]
    same_branch_name: bool,

    #[arg(long, help = "Allow dependencies with development versions")]
    allow_snapshots: bool,

    #[arg(long, help = "Skip fetching and comparing with the remote")]
    no_fetch: bool,

    #[arg(long, help = "Build the project after creating the branches")]
    install: bool,

    #[arg(
        long,
        help = "Keep the current project version as the release version default"
    )]
    keep_current_version: bool,

    #[arg(short = 'n', long, help = "Do not prompt; take defaults and flags")]
    non_interactive: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize git operations
    let repo = match Git2Repository::open(".") {
        Ok(repo) => repo,
        Err(e) => {
            ui::display_error(&format!("Git repository error: {}", e));
            std::process::exit(1);
        }
    };

    let workdir = match repo.workdir() {
        Ok(dir) => dir,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };
    let project = CargoProject::new(workdir);

    // CLI flags override the configured behavior
    let opts = ReleaseStartOptions {
        release_version: args.release_version,
        release_candidate: args.rc,
        interactive: !args.non_interactive,
        allow_snapshots: args.allow_snapshots || config.behavior.allow_snapshots,
        fetch_remote: !args.no_fetch && config.behavior.fetch_remote,
        same_branch_name: args.same_branch_name || config.behavior.same_branch_name,
        install_project: args.install || config.behavior.install_project,
        keep_current_version: args.keep_current_version || config.behavior.keep_current_version,
    };

    if opts.fetch_remote {
        ui::display_status(&format!(
            "Fetching '{}' from remote '{}'...",
            config.branches.development, config.branches.remote
        ));
    }

    let outcome = match run_release_start(&repo, &project, &StdinPrompter, &config, &opts) {
        Ok(outcome) => outcome,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    ui::display_version_plan(
        &outcome.previous_version,
        &outcome.release_version,
        outcome.next_development_version.as_deref(),
    );

    ui::display_success(&format!(
        "Created release branch: {}",
        outcome.release_branch
    ));
    ui::display_success(&format!(
        "Development branch '{}' moved to {}",
        config.branches.development,
        outcome
            .next_development_version
            .as_deref()
            .unwrap_or("(unchanged)")
    ));
    if outcome.built {
        ui::display_success("Project build finished");
    }

    println!(
        "\n{} Release {} started on branch {}\n",
        console::style("✓").green(),
        outcome.release_version,
        outcome.release_branch
    );

    Ok(())
}
