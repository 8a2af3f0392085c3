//! Project manifest and build abstraction layer
//!
//! The workflow reads and writes project versions and triggers builds only
//! through the [Project] trait. Concrete implementations:
//!
//! - [cargo::CargoProject]: Cargo manifest editing and `cargo build`
//! - [mock::MockProject]: in-memory implementation for testing

pub mod cargo;
pub mod mock;

pub use cargo::CargoProject;
pub use mock::MockProject;

use crate::error::Result;

/// Build-tool operations required by the release-start workflow
pub trait Project {
    /// The current project version as declared in the manifest
    fn current_version(&self) -> Result<String>;

    /// Rewrite the project version in the manifest
    fn set_version(&self, version: &str) -> Result<()>;

    /// Names of dependencies whose version requirement carries the
    /// development qualifier (e.g. `-SNAPSHOT`)
    fn snapshot_dependencies(&self, qualifier: &str) -> Result<Vec<String>>;

    /// Build the project
    fn build(&self) -> Result<()>;
}
