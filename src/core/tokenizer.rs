//! Splitting a typed command line into tokens.
//!
//! The terminal does no shell-style quoting: the trimmed line is split on single spaces and
//! nothing else. Token 0 is the program (normally `git`, never checked), token 1 selects the
//! subcommand and the rest are its arguments. Commit messages are rebuilt by joining
//! everything from token 3 on and dropping quote characters from the joined text.
//!
//! # Public API
//! - [`CommandLine`]: Tokenized view over one trimmed input line

/// Message used when `git commit` is given no message tokens
pub const DEFAULT_COMMIT_MESSAGE: &str = "Commit message";

/// Index of the first commit message token (`git commit -m <message...>`)
const MESSAGE_START: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine<'a> {
    raw: &'a str,
    tokens: Vec<&'a str>,
}

impl<'a> CommandLine<'a> {
    /// Tokenize `input`. Returns `None` when the line is empty after trimming.
    pub fn parse(input: &'a str) -> Option<Self> {
        let raw = input.trim();
        if raw.is_empty() {
            return None;
        }

        Some(Self {
            raw,
            tokens: raw.split(' ').collect(),
        })
    }

    /// The whole trimmed line
    pub fn raw(&self) -> &'a str {
        self.raw
    }

    pub fn starts_with_git(&self) -> bool {
        self.raw.starts_with("git")
    }

    /// Token 1. May be an empty string when the line contains doubled spaces.
    pub fn subcommand(&self) -> Option<&'a str> {
        self.tokens.get(1).copied()
    }

    /// Argument `index` of the subcommand (token `index + 2`). Empty tokens count as absent.
    pub fn arg(&self, index: usize) -> Option<&'a str> {
        self.tokens
            .get(index + 2)
            .copied()
            .filter(|token| !token.is_empty())
    }

    /// Commit message built from tokens 3.. with quotes stripped
    pub fn message(&self) -> String {
        let joined = self
            .tokens
            .get(MESSAGE_START..)
            .map(|rest| rest.join(" "))
            .unwrap_or_default();

        let message = if joined.is_empty() {
            DEFAULT_COMMIT_MESSAGE
        } else {
            joined.as_str()
        };

        message.chars().filter(|c| !matches!(c, '\'' | '"')).collect()
    }

    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }
}
