use crate::error::{GitFlowError, Result};
use semver::{Prerelease, Version};
use std::fmt;

/// A project version with development-qualifier semantics.
///
/// Development versions carry a qualifier as a semver pre-release
/// (e.g. `1.2.3-SNAPSHOT`). Stripping the qualifier yields the release
/// version; the next development version increments the patch component
/// and re-appends the qualifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DevVersion {
    version: Version,
    development_qualifier: String,
}

impl DevVersion {
    /// Parse a version string (e.g. "1.2.3-SNAPSHOT" or "1.2.3")
    pub fn parse(s: &str, development_qualifier: &str) -> Result<Self> {
        let version = Version::parse(s.trim())
            .map_err(|e| GitFlowError::version(format!("Invalid version '{}': {}", s, e)))?;

        Ok(DevVersion {
            version,
            development_qualifier: development_qualifier.to_string(),
        })
    }

    /// Whether this version carries the development qualifier
    pub fn is_development(&self) -> bool {
        self.version.pre.as_str() == self.development_qualifier
    }

    /// The release version string: the development qualifier stripped,
    /// any other pre-release left untouched
    pub fn release_version(&self) -> String {
        let mut version = self.version.clone();
        if self.is_development() {
            version.pre = Prerelease::EMPTY;
        }
        version.to_string()
    }

    /// The release-candidate version string: release version plus the
    /// candidate qualifier (e.g. "1.2.3-RC")
    pub fn candidate_version(&self, candidate_qualifier: &str) -> Result<String> {
        let mut version = self.version.clone();
        version.pre = Prerelease::new(candidate_qualifier).map_err(|e| {
            GitFlowError::version(format!(
                "Invalid candidate qualifier '{}': {}",
                candidate_qualifier, e
            ))
        })?;
        Ok(version.to_string())
    }

    /// The next development version string: patch component incremented,
    /// development qualifier appended (e.g. "1.2.3-SNAPSHOT" -> "1.2.4-SNAPSHOT")
    pub fn next_development_version(&self) -> Result<String> {
        let mut version = self.version.clone();
        version.patch += 1;
        version.pre = Prerelease::new(&self.development_qualifier).map_err(|e| {
            GitFlowError::version(format!(
                "Invalid development qualifier '{}': {}",
                self.development_qualifier, e
            ))
        })?;
        Ok(version.to_string())
    }
}

impl fmt::Display for DevVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.version)
    }
}
