//! Error taxonomy for the bootstrap sequence.
//!
//! Each variant names the stage that failed and maps to a distinct
//! process exit status. Nothing here is retried or recovered; errors
//! propagate straight to the top level.

use std::io;

use thiserror::Error;

/// Exit code used when the build tool cannot be launched at all,
/// matching the shell convention for "command not found".
pub const SPAWN_FAILURE_CODE: i32 = 127;

/// Everything that can go wrong between process start and the build
/// tool's own exit code.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// The host environment is unusable before anything is launched.
    #[error("configuration error: {reason}")]
    Configuration { reason: String },

    /// The build tool could not be started.
    #[error("failed to launch `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    /// The build tool ran and reported failure.
    #[error("`{command}` exited with status {code}")]
    BuildFailure { command: String, code: i32 },
}

impl BootstrapError {
    /// Process exit status for this error.
    ///
    /// Build failures forward the child's own code; spawn failures use
    /// [`SPAWN_FAILURE_CODE`]; configuration errors use a plain 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            BootstrapError::Configuration { .. } => 1,
            BootstrapError::Spawn { .. } => SPAWN_FAILURE_CODE,
            BootstrapError::BuildFailure { code, .. } => *code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let config = BootstrapError::Configuration {
            reason: "no home".to_string(),
        };
        assert_eq!(config.exit_code(), 1);

        let spawn = BootstrapError::Spawn {
            command: "cargo".to_string(),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert_eq!(spawn.exit_code(), 127);

        let failure = BootstrapError::BuildFailure {
            command: "cargo".to_string(),
            code: 101,
        };
        assert_eq!(failure.exit_code(), 101);
    }

    #[test]
    fn test_messages_name_the_stage() {
        let spawn = BootstrapError::Spawn {
            command: "cargo".to_string(),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert!(spawn.to_string().contains("failed to launch `cargo`"));

        let failure = BootstrapError::BuildFailure {
            command: "cargo".to_string(),
            code: 2,
        };
        assert!(failure.to_string().contains("exited with status 2"));
    }
}
