//! Pure formatting functions for UI output.
//!
//! All display logic lives here, separated from user interaction.

use console::style;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display the version transitions the release will perform.
///
/// # Arguments
/// * `current` - The version currently on the development branch
/// * `release` - The selected release version
/// * `next_development` - The next development version, if it could be computed
pub fn display_version_plan(current: &str, release: &str, next_development: Option<&str>) {
    println!("\n{}", style("Version plan:").bold());
    println!("  Current:          {}", style(current).cyan());
    println!("  Release:          {}", style(release).green());
    match next_development {
        Some(next) => println!("  Next development: {}", style(next).cyan()),
        None => println!("  Next development: {}", style("(unchanged)").dim()),
    }
}
