//! One learner's terminal session.
//!
//! A [`Session`] owns the repository state, the interpreter that advances it, and the
//! history shown in the terminal. The history is display-only; nothing reads it back to
//! make decisions.

use crate::core::{
    config::PlaygroundConfig,
    interpreter::Interpreter,
    state::{CommandHistoryEntry, RepositoryState},
};

/// Commands offered as one-click shortcuts in the terminal
pub const QUICK_COMMANDS: [&str; 8] = [
    "git status",
    "git add .",
    "git commit -m \"Update files\"",
    "git log",
    "git branch",
    "git branch feature",
    "git checkout feature",
    "git remote -v",
];

const INIT_COMMAND: &str = "git init";
const INIT_OUTPUT: &str = "Initialized empty Git repository in /project/.git/";

pub struct Session {
    state: RepositoryState,
    interpreter: Interpreter,
    history: Vec<CommandHistoryEntry>,
}

impl Session {
    pub fn new(config: &PlaygroundConfig) -> Self {
        Self::with_interpreter(Interpreter::new(config))
    }

    pub fn with_interpreter(interpreter: Interpreter) -> Self {
        Self {
            state: RepositoryState::seeded(),
            interpreter,
            history: vec![CommandHistoryEntry::new(INIT_COMMAND, INIT_OUTPUT, true)],
        }
    }

    /// Run one typed line. Blank input is ignored and returns `None`.
    pub fn submit(&mut self, input: &str) -> Option<&CommandHistoryEntry> {
        let execution = self.interpreter.execute(input, &self.state)?;

        if !execution.success {
            log::debug!("'{}' failed: {}", input.trim(), execution.output);
        }

        self.state = execution.state;
        self.history.push(CommandHistoryEntry::new(
            input.trim(),
            execution.output,
            execution.success,
        ));
        self.history.last()
    }

    /// Current repository state, for rendering or serialization
    pub fn snapshot(&self) -> &RepositoryState {
        &self.state
    }

    pub fn history(&self) -> &[CommandHistoryEntry] {
        &self.history
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(&PlaygroundConfig::default())
    }
}
