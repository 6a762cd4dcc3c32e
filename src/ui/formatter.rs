//! Pure formatting functions for UI output.
//!
//! This module contains all display/formatting logic for the terminal.
//! Functions here only print; they never read input.

use console::style;

use crate::domain::VersionTag;
use crate::warning::ChangelogWarning;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a non-fatal warning to the user.
///
/// Shows a yellow warning icon followed by the warning message.
///
/// # Arguments
/// * `warning` - The warning to display
pub fn display_warning(warning: &ChangelogWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// One line per section added to the changelog
pub fn format_section_summary(sections: &[VersionTag]) -> Vec<String> {
    sections
        .iter()
        .map(|tag| format!("  + {}", tag))
        .collect()
}

/// Display the sections written in this run.
///
/// # Arguments
/// * `sections` - Tags that received a section, newest first
pub fn display_sections(sections: &[VersionTag]) {
    if sections.is_empty() {
        return;
    }
    println!("\n{}", style("New changelog sections:").bold());
    for line in format_section_summary(sections) {
        println!("{}", style(line).green());
    }
}

/// Print the full document for `--dry-run`
pub fn display_preview(content: &str) {
    println!("{}", style("--- changelog preview ---").dim());
    print!("{}", content);
    println!("{}", style("--- end of preview ---").dim());
}
