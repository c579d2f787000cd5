//! Builders for binaries and sessions in a predictable configuration.
//!
//! Every command gets an explicit `--config` pointing into a temporary directory so tests
//! never read or write the real user configuration.

#![allow(dead_code)]

use assert_cmd::Command;
use git_playground::core::commit_id::SequentialIds;
use git_playground::{Interpreter, MissingArgumentPolicy, Session};
use tempfile::TempDir;

/// Temporary home for config and progress files. Keep it alive for the whole test.
pub struct TestEnv {
    pub temp_dir: TempDir,
}

impl TestEnv {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            temp_dir: TempDir::new()?,
        })
    }

    pub fn config_path(&self) -> std::path::PathBuf {
        self.temp_dir.path().join("config.json")
    }

    pub fn progress_path(&self) -> std::path::PathBuf {
        self.temp_dir.path().join("progress.json")
    }

    /// The binary with colour off, sequential ids and an isolated config file
    pub fn playground(&self) -> anyhow::Result<Command> {
        let mut cmd = Command::cargo_bin("git-playground")?;
        cmd.arg("--config")
            .arg(self.config_path())
            .arg("--no-color")
            .arg("--sequential-ids");
        Ok(cmd)
    }
}

/// A session with sequential commit ids
pub fn session_with(policy: MissingArgumentPolicy) -> Session {
    Session::with_interpreter(Interpreter::with_generator(
        policy,
        Box::new(SequentialIds::default()),
    ))
}

pub fn strict_session() -> Session {
    session_with(MissingArgumentPolicy::Strict)
}

/// Submit each line and panic if any of them fails
pub fn run_all(session: &mut Session, lines: &[&str]) {
    for line in lines {
        let entry = session.submit(line).cloned();
        let entry = entry.unwrap_or_else(|| panic!("'{line}' produced no history entry"));
        assert!(entry.success, "'{line}' failed: {}", entry.output);
    }
}
