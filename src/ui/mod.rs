//! User interface module - interaction (prompts) and formatting.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - Interactive prompts and user input handling

use std::io::{self, Write};

use crate::error::Result;

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{display_error, display_status, display_success, display_version_plan};

/// User-prompting seam for the workflow.
///
/// The workflow never reads stdin directly; tests substitute a scripted
/// implementation.
pub trait Prompter {
    /// Ask a question and return the trimmed answer. An empty answer means
    /// "accept the default".
    fn prompt(&self, question: &str) -> Result<String>;
}

/// Prompter reading answers from stdin
pub struct StdinPrompter;

impl Prompter for StdinPrompter {
    fn prompt(&self, question: &str) -> Result<String> {
        print!("{}: ", question);
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        Ok(input.trim().to_string())
    }
}
