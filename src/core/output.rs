//! Output helpers for messages that come from the tool itself rather than from the
//! simulated terminal.
//!
//! # Format
//! - Errors: `✕ Error: <message>` with the prefix in red
//! - Success: `✓ <message>` with the checkmark in green
//! - Section headers: `<header>:` surrounded by blank lines

use colored::*;

/// Formats and prints an error message with consistent styling
pub fn print_error(message: &str) {
    eprintln!("\n{} {}\n", "✕ Error:".red(), message.white());
}

pub fn print_success(message: &str) {
    println!("\n{} {}", "✓".green(), message.white());
}

pub fn print_info(message: &str) {
    println!("\n{}\n", message.white());
}

pub fn print_section_header(header: &str) {
    println!("\n{}:\n", header.white());
}

/// Turn ANSI colouring on or off for everything printed afterwards
pub fn configure_color(enabled: bool) {
    if enabled {
        colored::control::unset_override();
    } else {
        colored::control::set_override(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_helpers_do_not_panic() {
        print_error("Test error message");
        print_success("Operation completed");
        print_info("Information message");
        print_section_header("Lessons");
    }
}
