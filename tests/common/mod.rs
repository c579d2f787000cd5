//! Shared helpers for git-playground integration tests.

pub mod assertions;
pub mod fixtures;
