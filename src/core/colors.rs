//! Terminal colouring for command transcripts.
//!
//! The interpreter produces plain text. This module paints it the way a terminal running
//! real git would: staged files green, unstaged files red, the current branch green and
//! commit headers yellow. Failed commands are shown entirely in red.
//!
//! # Public API
//! - [`colorize_output`]: Paint one command's output
//! - [`format_prompt`]: Paint the `$ <command>` line
//! - [`format_history_entry`]: Prompt line plus painted output

use crate::core::state::CommandHistoryEntry;
use colored::*;

const STAGED_HEADING: &str = "Changes to be committed:";
const UNSTAGED_HEADING: &str = "Changes not staged for commit:";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    None,
    Staged,
    Unstaged,
}

/// Paint the `$ <command>` prompt line
pub fn format_prompt(command: &str) -> String {
    format!("{} {}", "$".blue().bold(), command.blue())
}

/// Paint the output of one command
pub fn colorize_output(output: &str, success: bool) -> String {
    if !success {
        return output.red().to_string();
    }

    let mut section = Section::None;
    output
        .split('\n')
        .map(|line| {
            match line {
                STAGED_HEADING => section = Section::Staged,
                UNSTAGED_HEADING => section = Section::Unstaged,
                _ => {}
            }
            colorize_line(line, section)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn colorize_line(line: &str, section: Section) -> String {
    if line.starts_with('\t') {
        return match section {
            Section::Staged => line.green().to_string(),
            Section::Unstaged => line.red().to_string(),
            Section::None => line.to_string(),
        };
    }

    if let Some(branch) = line.strip_prefix("* ") {
        return format!("* {}", branch.green());
    }

    if line.starts_with("commit ") {
        return line.yellow().to_string();
    }

    line.to_string()
}

/// Prompt line followed by the painted output; empty output adds no extra line
pub fn format_history_entry(entry: &CommandHistoryEntry) -> String {
    let prompt = format_prompt(&entry.command);
    if entry.output.is_empty() {
        prompt
    } else {
        format!(
            "{}\n{}",
            prompt,
            colorize_output(&entry.output, entry.success)
        )
    }
}
