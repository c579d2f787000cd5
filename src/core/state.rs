//! Simulated repository state and the terminal history log.
//!
//! [`RepositoryState`] is a plain value: the interpreter takes one in and hands a new one
//! back, and nothing else holds on to it. Sets of names are kept as insertion-ordered
//! vectors so listings come out in the order things were created.
//!
//! # Public API
//! - [`RepositoryState`]: Branches, commits, working tree, staging area and remotes
//! - [`CommandHistoryEntry`]: One line of terminal history, for display only

use crate::core::commit_log::{Commit, CommitLog, FlatCommitLog};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_BRANCH: &str = "main";
pub const SEED_COMMIT_ID: &str = "a1b2c3d";
pub const SEED_COMMIT_MESSAGE: &str = "Initial commit";
pub const SEED_FILES: [&str; 2] = ["README.md", "index.html"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryState {
    pub current_branch: String,
    pub branches: Vec<String>,
    pub commits: FlatCommitLog,
    pub working_directory: Vec<String>,
    pub staging_area: Vec<String>,
    pub remotes: Vec<String>,
}

impl RepositoryState {
    /// State every session starts from: `main`, one seed commit, two untracked files.
    pub fn seeded() -> Self {
        let mut commits = FlatCommitLog::new();
        commits.record(Commit::new(
            SEED_COMMIT_ID,
            SEED_COMMIT_MESSAGE,
            DEFAULT_BRANCH,
        ));

        Self {
            current_branch: DEFAULT_BRANCH.to_string(),
            branches: vec![DEFAULT_BRANCH.to_string()],
            commits,
            working_directory: SEED_FILES.iter().map(|f| f.to_string()).collect(),
            staging_area: Vec::new(),
            remotes: Vec::new(),
        }
    }

    pub fn has_branch(&self, name: &str) -> bool {
        self.branches.iter().any(|b| b == name)
    }

    pub fn in_working_directory(&self, file: &str) -> bool {
        self.working_directory.iter().any(|f| f == file)
    }

    pub fn is_staged(&self, file: &str) -> bool {
        self.staging_area.iter().any(|f| f == file)
    }

    /// Stage a single file; staging the same file twice is a no-op
    pub fn stage(&mut self, file: &str) {
        if !self.is_staged(file) {
            self.staging_area.push(file.to_string());
        }
    }

    /// Replace the staging area with the full working directory
    pub fn stage_all(&mut self) {
        self.staging_area = self.working_directory.clone();
    }

    /// Working-directory files that are not staged, in working-directory order
    pub fn unstaged_files(&self) -> impl Iterator<Item = &String> {
        self.working_directory
            .iter()
            .filter(move |file| !self.is_staged(file))
    }
}

impl Default for RepositoryState {
    fn default() -> Self {
        Self::seeded()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandHistoryEntry {
    pub command: String,
    pub output: String,
    pub success: bool,
    pub timestamp: DateTime<Utc>,
}

impl CommandHistoryEntry {
    pub fn new(command: impl Into<String>, output: impl Into<String>, success: bool) -> Self {
        Self {
            command: command.into(),
            output: output.into(),
            success,
            timestamp: Utc::now(),
        }
    }
}
