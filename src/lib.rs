//! Git Playground - an interactive terminal that simulates a small subset of git for teaching.
//!
//! This is not a version-control system. It keeps a simplified, in-memory model of a
//! repository (branches, a flat commit list, a staging area and a working directory) and
//! answers typed commands with text that imitates real git output.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module, which provides:
//! - The command interpreter and its repository state
//! - Sessions with terminal history
//! - Configuration and lesson progress storage
//! - Error handling and result types

pub mod commands;
pub mod core;

pub use core::{
    // Terminal formatting
    colorize_output,
    format_history_entry,
    // Repository model
    CommandHistoryEntry,
    // Error handling
    CommandError,
    Commit,
    CommitLog,
    // Configuration
    CommitIdStrategy,
    // Interpreter
    Execution,
    Interpreter,
    MissingArgumentPolicy,
    PlaygroundConfig,
    PlaygroundError,
    // Progress
    ProgressStore,
    RepositoryState,
    Result,
    Session,
    QUICK_COMMANDS,
};
