//! `explain`: print the command reference.

use crate::core::{
    error::{PlaygroundError, Result},
    explainer::{self, Category, CommandExplanation, Difficulty},
};
use colored::*;
use std::io::Write;

pub enum ExplainAction {
    Command(String),
    Search(String),
    Category(Category),
    Difficulty(Difficulty),
    Tip,
    All,
}

pub fn execute_explain(action: ExplainAction) -> Result<()> {
    let stdout = std::io::stdout();
    write_explain(action, &mut stdout.lock())
}

pub fn write_explain<W: Write>(action: ExplainAction, out: &mut W) -> Result<()> {
    match action {
        ExplainAction::Command(command) => {
            let entry =
                explainer::explain(&command).ok_or_else(|| PlaygroundError::no_explanation(&command))?;
            writeln!(out, "{}", format_explanation(entry))?;
        }
        ExplainAction::Search(query) => {
            let hits = explainer::search(&query);
            if hits.is_empty() {
                writeln!(out, "No commands match '{query}'")?;
            } else {
                write!(out, "{}", format_listing(&hits))?;
            }
        }
        ExplainAction::Category(category) => {
            write!(out, "{}", format_listing(&explainer::by_category(category)))?;
        }
        ExplainAction::Difficulty(difficulty) => {
            write!(out, "{}", format_listing(&explainer::by_difficulty(difficulty)))?;
        }
        ExplainAction::Tip => {
            if let Some(entry) = explainer::random_tip(&mut rand::thread_rng()) {
                writeln!(out, "{} {}", "Tip:".yellow(), entry.command.bold())?;
                writeln!(out, "{}", entry.short_description)?;
                writeln!(out, "  {}", entry.example.blue())?;
            }
        }
        ExplainAction::All => {
            let all: Vec<_> = explainer::all().iter().collect();
            write!(out, "{}", format_listing(&all))?;
        }
    }

    Ok(())
}

/// Full multi-line explanation of one command
pub fn format_explanation(entry: &CommandExplanation) -> String {
    let mut text = format!(
        "{}  {}\n{}\n\n{}\n\n{} {}\n{} {}\n",
        entry.command.bold(),
        format!("[{} · {}]", entry.category, entry.difficulty).bright_black(),
        entry.short_description,
        entry.detailed_explanation,
        "Use case:".white(),
        entry.use_case,
        "Example: ".white(),
        entry.example.blue(),
    );

    if !entry.common_flags.is_empty() {
        text.push_str(&format!("\n{}\n", "Common flags:".white()));
        for flag in entry.common_flags {
            text.push_str(&format!("  {:<24} {}\n", flag.flag.green(), flag.description));
        }
    }

    if !entry.related_commands.is_empty() {
        text.push_str(&format!(
            "\n{} {}",
            "See also:".white(),
            entry.related_commands.join(", ")
        ));
    }

    text
}

/// One line per command: name and short description
pub fn format_listing(entries: &[&CommandExplanation]) -> String {
    entries
        .iter()
        .map(|entry| format!("  {:<18} {}\n", entry.command.green(), entry.short_description))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(action: ExplainAction) -> Result<String> {
        colored::control::set_override(false);
        let mut out = Vec::new();
        write_explain(action, &mut out)?;
        Ok(String::from_utf8_lossy(&out).into_owned())
    }

    #[test]
    fn test_explain_command() -> Result<()> {
        let text = render(ExplainAction::Command("git commit".to_string()))?;
        assert!(text.starts_with("git commit  [basic · beginner]"));
        assert!(text.contains("Save staged changes to the repository"));
        assert!(text.contains("-m <message>"));
        assert!(text.contains("See also: git add, git push, git log"));
        Ok(())
    }

    #[test]
    fn test_unknown_command_is_error() {
        let result = render(ExplainAction::Command("frobnicate".to_string()));
        assert!(matches!(
            result,
            Err(PlaygroundError::NoExplanation { command }) if command == "frobnicate"
        ));
    }

    #[test]
    fn test_listing_by_category() -> Result<()> {
        let text = render(ExplainAction::Category(Category::Remote))?;
        let commands: Vec<_> = text
            .lines()
            .filter_map(|line| line.split_whitespace().nth(1))
            .collect();
        assert_eq!(commands, ["remote", "push", "pull", "fetch"]);
        Ok(())
    }

    #[test]
    fn test_search_without_hits() -> Result<()> {
        let text = render(ExplainAction::Search("zebra".to_string()))?;
        assert_eq!(text, "No commands match 'zebra'\n");
        Ok(())
    }
}
