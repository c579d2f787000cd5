//! Commit history storage.
//!
//! History is a flat, append-only list where each commit carries the name of the branch it
//! was made on. There are no parent pointers, so merges and rebases cannot be expressed.
//! The interpreter only talks to history through [`CommitLog`], which keeps the door open
//! for a parent-pointer graph later without touching command dispatch.
//!
//! # Public API
//! - [`Commit`]: A single immutable commit record
//! - [`CommitLog`]: Trait the interpreter uses to read and extend history
//! - [`FlatCommitLog`]: Branch-tagged list implementation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Author recorded on every simulated commit
pub const DEFAULT_AUTHOR: &str = "Developer";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    pub id: String,
    pub message: String,
    pub author: String,
    pub timestamp: DateTime<Utc>,
    pub branch: String,
}

impl Commit {
    pub fn new(id: impl Into<String>, message: impl Into<String>, branch: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            message: message.into(),
            author: DEFAULT_AUTHOR.to_string(),
            timestamp: Utc::now(),
            branch: branch.into(),
        }
    }
}

/// Read/append access to commit history
pub trait CommitLog {
    /// Append a commit. History never shrinks.
    fn record(&mut self, commit: Commit);

    /// All commits in creation order
    fn iter(&self) -> Box<dyn Iterator<Item = &Commit> + '_>;

    /// Commits made on `branch`, oldest first
    fn on_branch(&self, branch: &str) -> Vec<&Commit> {
        self.iter().filter(|commit| commit.branch == branch).collect()
    }

    fn len(&self) -> usize {
        self.iter().count()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlatCommitLog {
    commits: Vec<Commit>,
}

impl FlatCommitLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&Commit> {
        self.commits.last()
    }
}

impl CommitLog for FlatCommitLog {
    fn record(&mut self, commit: Commit) {
        log::debug!("Recording commit {} on '{}'", commit.id, commit.branch);
        self.commits.push(commit);
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &Commit> + '_> {
        Box::new(self.commits.iter())
    }
}

impl FromIterator<Commit> for FlatCommitLog {
    fn from_iter<I: IntoIterator<Item = Commit>>(iter: I) -> Self {
        Self {
            commits: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_uses_fixed_author() {
        let commit = Commit::new("abc1234", "Initial commit", "main");
        assert_eq!(commit.author, "Developer");
        assert_eq!(commit.branch, "main");
    }

    #[test]
    fn test_on_branch_filters_and_keeps_order() {
        let mut log = FlatCommitLog::new();
        log.record(Commit::new("0000001", "one", "main"));
        log.record(Commit::new("0000002", "two", "feature"));
        log.record(Commit::new("0000003", "three", "main"));

        let ids: Vec<_> = log.on_branch("main").iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["0000001", "0000003"]);
        assert!(log.on_branch("hotfix").is_empty());
    }

    #[test]
    fn test_len_tracks_records() {
        let mut log = FlatCommitLog::new();
        assert!(log.is_empty());
        log.record(Commit::new("0000001", "one", "main"));
        assert_eq!(log.len(), 1);
        assert_eq!(log.last().map(|c| c.id.as_str()), Some("0000001"));
    }

    #[test]
    fn test_iter_through_trait_object() {
        let log: FlatCommitLog = vec![
            Commit::new("0000001", "one", "main"),
            Commit::new("0000002", "two", "feature"),
        ]
        .into_iter()
        .collect();
        let history: &dyn CommitLog = &log;

        let messages: Vec<_> = history.iter().map(|c| c.message.as_str()).collect();
        assert_eq!(messages, vec!["one", "two"]);
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_serializes_as_plain_list() {
        let log: FlatCommitLog = vec![Commit::new("0000001", "one", "main")].into_iter().collect();
        let json = serde_json::to_value(&log).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["id"], "0000001");
    }
}
