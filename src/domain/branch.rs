use crate::error::{GitFlowError, Result};

/// Checks whether a string is a valid git branch name.
///
/// Implements the `git check-ref-format --allow-onelevel` rules that matter
/// for branch names assembled from a prefix and a version string.
pub fn is_valid_branch_name(name: &str) -> bool {
    if name.is_empty() {
        return false;
    }

    // Illegal anywhere: control chars, space and git's special characters
    if let Ok(re) = regex::Regex::new(r"[[:cntrl:] ~^:?*\[\\]") {
        if re.is_match(name) {
            return false;
        }
    }

    if name.starts_with('/') || name.ends_with('/') || name.contains("//") {
        return false;
    }

    if name.starts_with('.') || name.ends_with('.') || name.contains("..") {
        return false;
    }

    if name.ends_with(".lock") || name.contains("@{") {
        return false;
    }

    name != "@"
}

/// Assembles the release branch name from the configured prefix and the
/// selected version.
///
/// With `same_branch_name` the bare prefix is used for every release; the
/// default `release/` prefix is not a valid branch name by itself, so the
/// prefix must be reconfigured when that option is enabled.
pub fn release_branch_name(prefix: &str, version: &str, same_branch_name: bool) -> Result<String> {
    let name = if same_branch_name {
        prefix.to_string()
    } else {
        format!("{}{}", prefix, version)
    };

    if !is_valid_branch_name(&name) {
        return Err(GitFlowError::branch(format!(
            "'{}' is not a valid branch name",
            name
        )));
    }

    Ok(name)
}
