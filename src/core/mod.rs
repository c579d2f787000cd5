//! Core functionality for the git playground.
//!
//! This module provides the simulated repository model, the command interpreter that
//! drives it, a reference of command explanations, and the ambient pieces around them
//! (configuration, progress storage, terminal formatting).

pub mod colors;
pub mod commit_id;
pub mod commit_log;
pub mod config;
pub mod dirs;
pub mod error;
pub mod explainer;
pub mod interpreter;
pub mod output;
pub mod progress;
pub mod session;
pub mod state;
pub mod tokenizer;

// === Error handling ===
pub use error::{CommandError, PlaygroundError, Result};

// === Repository model ===
pub use commit_log::{Commit, CommitLog, FlatCommitLog};
pub use state::{CommandHistoryEntry, RepositoryState};

// === Command interpretation ===
pub use commit_id::{CommitIdGenerator, RandomIds, SequentialIds};
pub use interpreter::{Execution, Interpreter};
pub use session::{Session, QUICK_COMMANDS};
pub use tokenizer::CommandLine;

// === Configuration and persistence ===
pub use config::{CommitIdStrategy, MissingArgumentPolicy, PlaygroundConfig};
pub use progress::{Lesson, LessonProgress, ProgressStore, LESSONS};

// === Command reference ===
pub use explainer::{CommandExplanation, Category, Difficulty};

// === Terminal formatting ===
pub use colors::{colorize_output, format_history_entry, format_prompt};
pub use output::{configure_color, print_error, print_info, print_section_header, print_success};
