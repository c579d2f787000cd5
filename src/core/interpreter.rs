//! The simulated git command interpreter.
//!
//! [`Interpreter::execute`] takes one typed line and the current [`RepositoryState`] and
//! returns the next state together with the terminal text and a success flag. The input
//! state is never touched: handlers build a new state only on their success path, so a
//! failed command always hands back an exact copy of what came in.
//!
//! # Public API
//! - [`Interpreter`]: Dispatches a command line to its handler
//! - [`Execution`]: Result of one command (next state, output, success)
//!
//! # Supported commands
//! `status`, `add <file>|.`, `commit [-m <message>]`, `branch [<name>]`,
//! `checkout <branch>`, `log`, `remote add <name> <url>`, `remote -v`.

use crate::core::{
    commit_id::{generator_for, CommitIdGenerator},
    commit_log::{Commit, CommitLog},
    config::{MissingArgumentPolicy, PlaygroundConfig},
    error::CommandError,
    state::RepositoryState,
    tokenizer::CommandLine,
};
use chrono::Local;

const ADD_USAGE: &str = "Nothing specified, nothing added.";
const CHECKOUT_USAGE: &str = "usage: git checkout <branch>";
const REMOTE_ADD_USAGE: &str = "usage: git remote add <name> <url>";
const REMOTE_USAGE: &str = "usage: git remote add <name> <url>\n   or: git remote -v";
const NO_REMOTES: &str = "No remotes configured";
const LOG_DATE_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Outcome of running one command line
#[derive(Debug, Clone, PartialEq)]
pub struct Execution {
    pub state: RepositoryState,
    pub output: String,
    pub success: bool,
}

/// What a handler produced on its success path. `None` means the state is unchanged.
struct Applied {
    state: Option<RepositoryState>,
    output: String,
}

impl Applied {
    fn unchanged(output: impl Into<String>) -> Self {
        Self {
            state: None,
            output: output.into(),
        }
    }

    fn changed(state: RepositoryState, output: impl Into<String>) -> Self {
        Self {
            state: Some(state),
            output: output.into(),
        }
    }
}

type HandlerResult = std::result::Result<Applied, CommandError>;

pub struct Interpreter {
    missing_arguments: MissingArgumentPolicy,
    ids: Box<dyn CommitIdGenerator>,
}

impl Interpreter {
    pub fn new(config: &PlaygroundConfig) -> Self {
        Self::with_generator(config.missing_arguments, generator_for(config.commit_ids))
    }

    pub fn with_generator(
        missing_arguments: MissingArgumentPolicy,
        ids: Box<dyn CommitIdGenerator>,
    ) -> Self {
        Self {
            missing_arguments,
            ids,
        }
    }

    /// Run `input` against `state`.
    ///
    /// Returns `None` for empty or whitespace-only input, which is not a command at all.
    pub fn execute(&mut self, input: &str, state: &RepositoryState) -> Option<Execution> {
        let line = CommandLine::parse(input)?;
        log::debug!("Executing '{}' ({} tokens)", line.raw(), line.token_count());

        let execution = match self.dispatch(&line, state) {
            Ok(applied) => Execution {
                state: applied.state.unwrap_or_else(|| state.clone()),
                output: applied.output,
                success: true,
            },
            Err(e) => {
                log::debug!("Command '{}' failed: {e:?}", line.raw());
                Execution {
                    state: state.clone(),
                    output: e.to_string(),
                    success: false,
                }
            }
        };

        Some(execution)
    }

    fn dispatch(&mut self, line: &CommandLine, state: &RepositoryState) -> HandlerResult {
        match line.subcommand() {
            Some("status") => Ok(Applied::unchanged(status_report(state))),
            Some("add") => self.add(line, state),
            Some("commit") => self.commit(line, state),
            Some("branch") => branch(line, state),
            Some("checkout") => self.checkout(line, state),
            Some("log") => Ok(Applied::unchanged(log_report(state))),
            Some("remote") => self.remote(line, state),
            _ if !line.starts_with_git() => Err(CommandError::command_not_found(line.raw())),
            Some(other) => Err(CommandError::unknown_subcommand(other)),
            None => Err(CommandError::MissingSubcommand),
        }
    }

    fn missing_argument(&self, usage: &'static str) -> HandlerResult {
        match self.missing_arguments {
            MissingArgumentPolicy::Strict => Err(CommandError::missing_argument(usage)),
            MissingArgumentPolicy::Silent => Ok(Applied::unchanged("")),
        }
    }

    fn add(&self, line: &CommandLine, state: &RepositoryState) -> HandlerResult {
        let Some(target) = line.arg(0) else {
            return self.missing_argument(ADD_USAGE);
        };

        if target == "." {
            let mut next = state.clone();
            next.stage_all();
            return Ok(Applied::changed(next, "Added all files to staging area"));
        }

        if !state.in_working_directory(target) {
            return Err(CommandError::pathspec_not_matched(target));
        }

        let mut next = state.clone();
        next.stage(target);
        Ok(Applied::changed(
            next,
            format!("Added {target} to staging area"),
        ))
    }

    fn commit(&mut self, line: &CommandLine, state: &RepositoryState) -> HandlerResult {
        if state.staging_area.is_empty() {
            return Err(CommandError::NothingToCommit);
        }

        let commit = Commit::new(self.ids.next_id(), line.message(), &state.current_branch);
        let output = format!("[{} {}] {}", commit.branch, commit.id, commit.message);

        let mut next = state.clone();
        next.commits.record(commit);
        next.staging_area.clear();
        Ok(Applied::changed(next, output))
    }

    fn checkout(&self, line: &CommandLine, state: &RepositoryState) -> HandlerResult {
        let Some(name) = line.arg(0) else {
            return self.missing_argument(CHECKOUT_USAGE);
        };

        if !state.has_branch(name) {
            return Err(CommandError::unknown_branch(name));
        }

        let mut next = state.clone();
        next.current_branch = name.to_string();
        Ok(Applied::changed(
            next,
            format!("Switched to branch '{name}'"),
        ))
    }

    fn remote(&self, line: &CommandLine, state: &RepositoryState) -> HandlerResult {
        match line.arg(0) {
            Some("add") => match (line.arg(1), line.arg(2)) {
                (Some(name), Some(url)) => {
                    let mut next = state.clone();
                    next.remotes.push(format!("{name} -> {url}"));
                    Ok(Applied::changed(next, format!("Added remote '{name}'")))
                }
                _ => self.missing_argument(REMOTE_ADD_USAGE),
            },
            Some("-v") if state.remotes.is_empty() => Ok(Applied::unchanged(NO_REMOTES)),
            Some("-v") => Ok(Applied::unchanged(state.remotes.join("\n"))),
            _ => self.missing_argument(REMOTE_USAGE),
        }
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new(&PlaygroundConfig::default())
    }
}

fn branch(line: &CommandLine, state: &RepositoryState) -> HandlerResult {
    let Some(name) = line.arg(0) else {
        let listing = state
            .branches
            .iter()
            .map(|b| {
                if *b == state.current_branch {
                    format!("* {b}")
                } else {
                    format!("  {b}")
                }
            })
            .collect::<Vec<_>>()
            .join("\n");
        return Ok(Applied::unchanged(listing));
    };

    if state.has_branch(name) {
        return Err(CommandError::branch_exists(name));
    }

    // Creating a branch never switches to it
    let mut next = state.clone();
    next.branches.push(name.to_string());
    Ok(Applied::changed(next, format!("Created branch '{name}'")))
}

fn status_report(state: &RepositoryState) -> String {
    let mut output = format!("On branch {}\n", state.current_branch);

    if !state.staging_area.is_empty() {
        output.push_str("\nChanges to be committed:\n");
        output.push_str("  (use \"git reset HEAD <file>...\" to unstage)\n\n");
        for file in &state.staging_area {
            output.push_str(&format!("\tmodified:   {file}\n"));
        }
    }

    let unstaged: Vec<_> = state.unstaged_files().collect();
    if !unstaged.is_empty() {
        output.push_str("\nChanges not staged for commit:\n");
        output.push_str("  (use \"git add <file>...\" to update what will be committed)\n\n");
        for file in &unstaged {
            output.push_str(&format!("\tmodified:   {file}\n"));
        }
    }

    if state.staging_area.is_empty() && unstaged.is_empty() {
        output.push_str("nothing to commit, working tree clean");
    }

    output
}

fn log_report(state: &RepositoryState) -> String {
    state
        .commits
        .on_branch(&state.current_branch)
        .into_iter()
        .rev()
        .map(|c| {
            format!(
                "commit {}\nAuthor: {}\nDate: {}\n\n    {}\n",
                c.id,
                c.author,
                c.timestamp.with_timezone(&Local).format(LOG_DATE_FORMAT),
                c.message
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
