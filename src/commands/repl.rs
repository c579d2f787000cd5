//! Interactive terminal over stdin.
//!
//! Each line is handed to the session, except for a few terminal-level words that never
//! reach the interpreter: `exit`/`quit`, `history`, `state`, `help` and `explain <command>`.

use crate::commands::explain::{format_explanation, format_listing};
use crate::core::{
    colors::format_history_entry,
    config::PlaygroundConfig,
    error::Result,
    explainer,
    session::{Session, QUICK_COMMANDS},
};
use colored::*;
use std::io::{BufRead, Write};
use std::time::Duration;

const PROMPT: &str = "$ ";

enum MetaCommand {
    Exit,
    History,
    State,
    Help,
    Explain(String),
}

impl MetaCommand {
    fn parse(line: &str) -> Option<Self> {
        match line.trim() {
            "exit" | "quit" => Some(Self::Exit),
            "history" => Some(Self::History),
            "state" => Some(Self::State),
            "help" => Some(Self::Help),
            "explain" => Some(Self::Explain(String::new())),
            other => other
                .strip_prefix("explain ")
                .map(|command| Self::Explain(command.trim().to_string())),
        }
    }
}

pub fn execute_repl(config: &PlaygroundConfig) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_repl(config, stdin.lock(), &mut stdout.lock())
}

pub fn run_repl<R: BufRead, W: Write>(
    config: &PlaygroundConfig,
    input: R,
    out: &mut W,
) -> Result<()> {
    let mut session = Session::new(config);
    let delay = Duration::from_millis(config.response_delay_ms);

    writeln!(out, "{}", "Git Playground. Type 'help' for quick commands.".bright_black())?;
    for entry in session.history() {
        writeln!(out, "{}", format_history_entry(entry))?;
    }

    write!(out, "{PROMPT}")?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;

        match MetaCommand::parse(&line) {
            Some(MetaCommand::Exit) => break,
            Some(MetaCommand::History) => {
                for (n, entry) in session.history().iter().enumerate() {
                    writeln!(out, "{:>4}  {}", n + 1, entry.command)?;
                }
            }
            Some(MetaCommand::State) => {
                writeln!(out, "{}", serde_json::to_string_pretty(session.snapshot())?)?;
            }
            Some(MetaCommand::Help) => {
                writeln!(out, "{}", "Quick commands:".white())?;
                for command in QUICK_COMMANDS {
                    writeln!(out, "  {}", command.blue())?;
                }
                writeln!(
                    out,
                    "{}",
                    "Type 'explain <command>' to learn what a command does.".bright_black()
                )?;
            }
            Some(MetaCommand::Explain(command)) if command.is_empty() => {
                let all: Vec<_> = explainer::all().iter().collect();
                write!(out, "{}", format_listing(&all))?;
            }
            Some(MetaCommand::Explain(command)) => match explainer::explain(&command) {
                Some(entry) => writeln!(out, "{}", format_explanation(entry))?,
                None => writeln!(out, "{}", format!("No explanation for '{command}'").red())?,
            },
            None => {
                if !delay.is_zero() && !line.trim().is_empty() {
                    std::thread::sleep(delay);
                }
                if let Some(entry) = session.submit(&line) {
                    if !entry.output.is_empty() {
                        // Prompt and command are already on screen
                        let rendered = format_history_entry(entry);
                        if let Some((_, body)) = rendered.split_once('\n') {
                            writeln!(out, "{body}")?;
                        }
                    }
                }
            }
        }

        write!(out, "{PROMPT}")?;
        out.flush()?;
    }

    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(input: &str) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        run_repl(&PlaygroundConfig::default(), Cursor::new(input), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_prints_seeded_history() {
        let text = run("exit\n");
        assert!(text.contains("$ git init\nInitialized empty Git repository in /project/.git/"));
    }

    #[test]
    fn test_runs_commands_until_exit() {
        let text = run("git branch dev\ngit branch\nexit\ngit status\n");
        assert!(text.contains("Created branch 'dev'"));
        assert!(text.contains("* main\n  dev"));
        assert!(!text.contains("On branch"));
    }

    #[test]
    fn test_meta_commands_bypass_interpreter() {
        let text = run("git status\nhistory\nstate\n");
        assert!(text.contains("   1  git init"));
        assert!(text.contains("   2  git status"));
        assert!(text.contains("\"currentBranch\": \"main\""));
        assert!(!text.contains("bash: history"));
    }

    #[test]
    fn test_explain_word_shows_reference() {
        let text = run("explain git status\nexplain CHECKOUT\nexplain frobnicate\n");
        assert!(text.contains("Show the current state of your working directory and staging area."));
        assert!(text.contains("Switch between branches or restore files to a previous state."));
        assert!(text.contains("No explanation for 'frobnicate'"));
        assert!(!text.contains("bash: explain"));
    }

    #[test]
    fn test_bare_explain_lists_all_commands() {
        let text = run("explain\n");
        assert!(text.contains("git init"));
        assert!(text.contains("git gc"));
    }

    #[test]
    fn test_explain_does_not_enter_history() {
        let text = run("explain log\nhistory\n");
        assert!(text.contains("   1  git init"));
        assert!(!text.contains("   2  explain log"));
    }

    #[test]
    fn test_help_lists_quick_commands() {
        let text = run("help\n");
        for command in QUICK_COMMANDS {
            assert!(text.contains(command));
        }
    }
}
