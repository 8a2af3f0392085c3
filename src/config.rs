use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Represents the complete configuration for gitflow-release.
///
/// Contains branch naming, version qualifiers, commit messages and behavior options.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub branches: BranchConfig,

    #[serde(default)]
    pub version: VersionConfig,

    #[serde(default)]
    pub messages: MessagesConfig,

    #[serde(default)]
    pub behavior: BehaviorConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            branches: BranchConfig::default(),
            version: VersionConfig::default(),
            messages: MessagesConfig::default(),
            behavior: BehaviorConfig::default(),
        }
    }
}

fn default_production_branch() -> String {
    "master".to_string()
}

fn default_development_branch() -> String {
    "develop".to_string()
}

fn default_release_prefix() -> String {
    "release/".to_string()
}

fn default_remote() -> String {
    "origin".to_string()
}

/// Branch naming configuration for the git-flow layout.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct BranchConfig {
    #[serde(default = "default_production_branch")]
    pub production: String,

    #[serde(default = "default_development_branch")]
    pub development: String,

    #[serde(default = "default_release_prefix")]
    pub release_prefix: String,

    #[serde(default = "default_remote")]
    pub remote: String,
}

impl Default for BranchConfig {
    fn default() -> Self {
        BranchConfig {
            production: default_production_branch(),
            development: default_development_branch(),
            release_prefix: default_release_prefix(),
            remote: default_remote(),
        }
    }
}

fn default_development_qualifier() -> String {
    "SNAPSHOT".to_string()
}

fn default_candidate_qualifier() -> String {
    "RC".to_string()
}

/// Version qualifier configuration.
///
/// The development qualifier marks in-progress versions (e.g. `1.2.3-SNAPSHOT`);
/// the candidate qualifier is appended in release-candidate mode (e.g. `1.2.3-RC`).
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct VersionConfig {
    #[serde(default = "default_development_qualifier")]
    pub development_qualifier: String,

    #[serde(default = "default_candidate_qualifier")]
    pub candidate_qualifier: String,
}

impl Default for VersionConfig {
    fn default() -> Self {
        VersionConfig {
            development_qualifier: default_development_qualifier(),
            candidate_qualifier: default_candidate_qualifier(),
        }
    }
}

fn default_release_start_message() -> String {
    "update versions for release".to_string()
}

fn default_release_candidate_message() -> String {
    "update versions for release candidate".to_string()
}

fn default_next_development_message() -> String {
    "update versions for next development iteration".to_string()
}

/// Commit messages used for the version-bump commits.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct MessagesConfig {
    #[serde(default = "default_release_start_message")]
    pub release_start: String,

    #[serde(default = "default_release_candidate_message")]
    pub release_candidate: String,

    #[serde(default = "default_next_development_message")]
    pub next_development: String,
}

impl Default for MessagesConfig {
    fn default() -> Self {
        MessagesConfig {
            release_start: default_release_start_message(),
            release_candidate: default_release_candidate_message(),
            next_development: default_next_development_message(),
        }
    }
}

fn default_fetch_remote() -> bool {
    true
}

/// Configuration for behavior customization.
///
/// These map onto workflow switches and can be overridden from the CLI.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct BehaviorConfig {
    #[serde(default = "default_fetch_remote")]
    pub fetch_remote: bool,

    #[serde(default)]
    pub allow_snapshots: bool,

    #[serde(default)]
    pub same_branch_name: bool,

    #[serde(default)]
    pub install_project: bool,

    #[serde(default)]
    pub keep_current_version: bool,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        BehaviorConfig {
            fetch_remote: default_fetch_remote(),
            allow_snapshots: false,
            same_branch_name: false,
            install_project: false,
            keep_current_version: false,
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `gitflow.toml` in current directory
/// 3. `.gitflow.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config, Box<dyn std::error::Error>> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./gitflow.toml").exists() {
        fs::read_to_string("./gitflow.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".gitflow.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)?;
    Ok(config)
}
