//! Domain logic - pure version and branch-name rules independent of git operations

pub mod branch;
pub mod version;

pub use branch::{is_valid_branch_name, release_branch_name};
pub use version::DevVersion;
