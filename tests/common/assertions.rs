//! Predicates for checking transcript output.

#![allow(dead_code)]

use predicates::prelude::*;

/// The `$ <command>` line of a transcript
pub fn prompt(command: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("$ {command}\n"))
}

pub fn commit_line(branch: &str, id: &str, message: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("[{branch} {id}] {message}"))
}

pub fn on_branch(branch: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("On branch {branch}"))
}

pub fn not_a_git_command(subcommand: &str) -> impl Predicate<str> {
    predicates::str::contains(format!(
        "git: '{subcommand}' is not a git command. See 'git --help'."
    ))
}
