//! Domain-specific error types for the playground.
//!
//! Two families live here:
//! - [`CommandError`]: failures of a simulated git command. The `Display` text of every
//!   variant is the exact message shown in the terminal, modelled after real git output.
//! - [`PlaygroundError`]: failures of the surrounding tool (configuration, progress files,
//!   I/O). These never reach the simulated terminal.
//!
//! # Public API
//! - [`CommandError`]: user-visible command failures
//! - [`PlaygroundError`]: tool-level failures
//! - [`Result<T>`]: Type alias for `std::result::Result<T, PlaygroundError>`

use std::path::PathBuf;
use thiserror::Error;

/// Failure of a single simulated command.
///
/// Rendering one of these is all the interpreter does on the failure path, so the messages
/// must stay byte-for-byte compatible with what learners see in the terminal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    // Dispatch failures
    #[error("git: '{subcommand}' is not a git command. See 'git --help'.")]
    UnknownSubcommand { subcommand: String },

    #[error("bash: {command}: command not found")]
    CommandNotFound { command: String },

    #[error("usage: git <command> [<args>]")]
    MissingSubcommand,

    // Precondition failures inside a recognized subcommand
    #[error("fatal: pathspec '{path}' did not match any files")]
    PathspecNotMatched { path: String },

    #[error("nothing to commit, working tree clean")]
    NothingToCommit,

    #[error("fatal: A branch named '{name}' already exists.")]
    BranchExists { name: String },

    #[error("error: pathspec '{name}' did not match any file(s) known to git")]
    UnknownBranch { name: String },

    #[error("{usage}")]
    MissingArgument { usage: &'static str },
}

impl CommandError {
    pub fn unknown_subcommand(subcommand: impl Into<String>) -> Self {
        Self::UnknownSubcommand {
            subcommand: subcommand.into(),
        }
    }

    pub fn command_not_found(command: impl Into<String>) -> Self {
        Self::CommandNotFound {
            command: command.into(),
        }
    }

    pub fn pathspec_not_matched(path: impl Into<String>) -> Self {
        Self::PathspecNotMatched { path: path.into() }
    }

    pub fn branch_exists(name: impl Into<String>) -> Self {
        Self::BranchExists { name: name.into() }
    }

    pub fn unknown_branch(name: impl Into<String>) -> Self {
        Self::UnknownBranch { name: name.into() }
    }

    /// Missing argument with the usage text to show
    pub fn missing_argument(usage: &'static str) -> Self {
        Self::MissingArgument { usage }
    }
}

/// Tool-level error types for git-playground
#[derive(Error, Debug)]
pub enum PlaygroundError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    // Directory errors
    #[error("Could not determine the {kind} directory")]
    DirectoryNotFound { kind: &'static str },

    // Configuration errors
    #[error("Failed to read config file '{path}': {source}")]
    ConfigReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ConfigParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    // Progress store errors
    #[error("Failed to read progress file '{path}': {source}")]
    ProgressReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse progress file '{path}': {source}")]
    ProgressParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to write '{path}': {source}")]
    WriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Quiz score must be between 0 and 100 (got {score})")]
    InvalidQuizScore { score: u32 },

    #[error("Unknown lesson '{id}'")]
    UnknownLesson { id: String },

    #[error("No explanation for '{command}'. Try 'explain --search <word>'")]
    NoExplanation { command: String },
}

/// Convenience type alias for Results using PlaygroundError
pub type Result<T> = std::result::Result<T, PlaygroundError>;

impl PlaygroundError {
    pub fn directory_not_found(kind: &'static str) -> Self {
        Self::DirectoryNotFound { kind }
    }

    pub fn config_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigReadFailed {
            path: path.into(),
            source,
        }
    }

    pub fn config_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::ConfigParseFailed {
            path: path.into(),
            source,
        }
    }

    pub fn progress_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ProgressReadFailed {
            path: path.into(),
            source,
        }
    }

    pub fn progress_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::ProgressParseFailed {
            path: path.into(),
            source,
        }
    }

    pub fn write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WriteFailed {
            path: path.into(),
            source,
        }
    }

    pub fn unknown_lesson(id: impl Into<String>) -> Self {
        Self::UnknownLesson { id: id.into() }
    }

    pub fn no_explanation(command: impl Into<String>) -> Self {
        Self::NoExplanation {
            command: command.into(),
        }
    }
}
