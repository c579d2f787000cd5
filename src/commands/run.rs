use crate::core::{
    colors::format_history_entry,
    config::PlaygroundConfig,
    error::Result,
    session::Session,
};
use std::io::Write;

/// Summary of a scripted run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub executed: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn all_succeeded(&self) -> bool {
        self.failed == 0
    }
}

/// Run each command line in a fresh session and print the transcript.
pub fn execute_run(
    config: &PlaygroundConfig,
    commands: &[String],
    show_state: bool,
) -> Result<RunSummary> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_script(config, commands, show_state, &mut out)
}

pub fn run_script<W: Write>(
    config: &PlaygroundConfig,
    commands: &[String],
    show_state: bool,
    out: &mut W,
) -> Result<RunSummary> {
    let mut session = Session::new(config);
    let mut summary = RunSummary {
        executed: 0,
        failed: 0,
    };

    for command in commands {
        let Some(entry) = session.submit(command) else {
            log::debug!("Skipping blank command");
            continue;
        };

        summary.executed += 1;
        if !entry.success {
            summary.failed += 1;
        }
        writeln!(out, "{}", format_history_entry(entry))?;
    }

    if show_state {
        writeln!(out, "{}", serde_json::to_string_pretty(session.snapshot())?)?;
    }

    log::debug!(
        "Ran {} commands, {} failed",
        summary.executed,
        summary.failed
    );
    Ok(summary)
}
