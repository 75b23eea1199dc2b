//! Scripted stand-ins for process execution.

use std::io;
use std::sync::Mutex;

use crate::util::process::{CommandSpec, ExitStatus, ProcessRunner};

/// A [`ProcessRunner`] that never launches anything: it records every
/// command it is handed and replays scripted outcomes in order.
///
/// When the script runs dry, further commands succeed with exit code
/// zero so simple tests only script the interesting outcome.
#[derive(Debug, Default)]
pub struct ScriptedRunner {
    outcomes: Mutex<Vec<io::Result<ExitStatus>>>,
    commands: Mutex<Vec<CommandSpec>>,
}

impl ScriptedRunner {
    /// Create a runner with an empty script (everything succeeds).
    pub fn new() -> ScriptedRunner {
        ScriptedRunner::default()
    }

    /// Append an outcome to the script.
    pub fn with_outcome(self, outcome: io::Result<ExitStatus>) -> ScriptedRunner {
        self.outcomes.lock().unwrap().push(outcome);
        self
    }

    /// A runner whose next command exits zero.
    pub fn succeeding() -> ScriptedRunner {
        ScriptedRunner::new().with_outcome(Ok(ExitStatus::from_code(0)))
    }

    /// A runner whose next command exits with `code`.
    pub fn exiting_with(code: i32) -> ScriptedRunner {
        ScriptedRunner::new().with_outcome(Ok(ExitStatus::from_code(code)))
    }

    /// A runner whose next command fails to launch at all.
    pub fn failing_to_spawn() -> ScriptedRunner {
        ScriptedRunner::new().with_outcome(Err(io::Error::from(io::ErrorKind::NotFound)))
    }

    /// Every command handed to this runner so far, in order.
    pub fn commands(&self) -> Vec<CommandSpec> {
        self.commands.lock().unwrap().clone()
    }
}

impl ProcessRunner for ScriptedRunner {
    fn status(&self, spec: &CommandSpec) -> io::Result<ExitStatus> {
        self.commands.lock().unwrap().push(spec.clone());

        let mut outcomes = self.outcomes.lock().unwrap();
        if outcomes.is_empty() {
            Ok(ExitStatus::from_code(0))
        } else {
            outcomes.remove(0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_commands_in_order() {
        let runner = ScriptedRunner::new();
        runner.status(&CommandSpec::new("first")).unwrap();
        runner.status(&CommandSpec::new("second")).unwrap();

        let commands = runner.commands();
        assert_eq!(commands.len(), 2);
        assert_eq!(commands[0].get_program().to_str(), Some("first"));
        assert_eq!(commands[1].get_program().to_str(), Some("second"));
    }

    #[test]
    fn test_replays_script_then_defaults_to_success() {
        let runner = ScriptedRunner::exiting_with(3);
        let first = runner.status(&CommandSpec::new("x")).unwrap();
        assert_eq!(first.code(), Some(3));

        let second = runner.status(&CommandSpec::new("x")).unwrap();
        assert!(second.success());
    }
}
