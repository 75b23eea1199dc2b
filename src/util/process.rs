//! Subprocess execution utilities.
//!
//! Launching is behind the [`ProcessRunner`] capability trait so
//! operations can be exercised against a scripted stand-in; the one
//! production implementation inherits the parent's streams and waits
//! synchronously.

use std::ffi::{OsStr, OsString};
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

/// A command to execute, with program, arguments, environment
/// additions, and working directory.
///
/// Environment entries are set on top of the inherited environment of
/// the child; the parent process is never touched.
#[derive(Debug, Clone)]
pub struct CommandSpec {
    program: PathBuf,
    args: Vec<String>,
    env: Vec<(OsString, OsString)>,
    cwd: Option<PathBuf>,
}

impl CommandSpec {
    /// Create a new command spec for the given program.
    pub fn new(program: impl AsRef<Path>) -> Self {
        CommandSpec {
            program: program.as_ref().to_path_buf(),
            args: Vec::new(),
            env: Vec::new(),
            cwd: None,
        }
    }

    /// Add a single argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Add multiple arguments.
    pub fn args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.args.extend(args.into_iter().map(|a| a.into()));
        self
    }

    /// Set an environment variable for the child.
    pub fn env(mut self, key: impl AsRef<OsStr>, value: impl AsRef<OsStr>) -> Self {
        self.env
            .push((key.as_ref().to_os_string(), value.as_ref().to_os_string()));
        self
    }

    /// Set the working directory.
    pub fn cwd(mut self, cwd: impl AsRef<Path>) -> Self {
        self.cwd = Some(cwd.as_ref().to_path_buf());
        self
    }

    /// Get the program path.
    pub fn get_program(&self) -> &Path {
        &self.program
    }

    /// Get the arguments.
    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    /// Get the environment additions.
    pub fn get_env(&self) -> &[(OsString, OsString)] {
        &self.env
    }

    /// Get the working directory, if set.
    pub fn get_cwd(&self) -> Option<&Path> {
        self.cwd.as_deref()
    }

    /// Display the program and arguments for status lines and errors.
    pub fn display_command(&self) -> String {
        let mut parts = vec![self.program.display().to_string()];
        parts.extend(self.args.iter().cloned());
        parts.join(" ")
    }
}

/// Exit status of a completed subprocess.
///
/// `code` is `None` when the child was terminated without reporting a
/// code (killed by a signal on Unix). Unlike `std::process::ExitStatus`
/// this is constructible, so test doubles can fabricate outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitStatus {
    code: Option<i32>,
}

impl ExitStatus {
    /// Status for a child that exited with `code`.
    pub fn from_code(code: i32) -> ExitStatus {
        ExitStatus { code: Some(code) }
    }

    /// Status for a child terminated without an exit code.
    pub fn terminated() -> ExitStatus {
        ExitStatus { code: None }
    }

    /// Whether the child exited successfully.
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// The child's exit code, if it reported one.
    pub fn code(&self) -> Option<i32> {
        self.code
    }
}

impl From<std::process::ExitStatus> for ExitStatus {
    fn from(status: std::process::ExitStatus) -> ExitStatus {
        ExitStatus {
            code: status.code(),
        }
    }
}

/// Capability interface for launching subprocesses.
pub trait ProcessRunner {
    /// Launch the command, let its streams pass through, wait for
    /// completion, and return the exit status.
    fn status(&self, spec: &CommandSpec) -> io::Result<ExitStatus>;
}

/// Runner backed by `std::process::Command` with inherited stdio.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn status(&self, spec: &CommandSpec) -> io::Result<ExitStatus> {
        let mut cmd = Command::new(spec.get_program());
        cmd.args(spec.get_args());
        for (key, value) in spec.get_env() {
            cmd.env(key, value);
        }
        if let Some(cwd) = spec.get_cwd() {
            cmd.current_dir(cwd);
        }
        cmd.status().map(ExitStatus::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_command() {
        let spec = CommandSpec::new("cargo").args(["build", "--release", "--target", "aarch64-linux-android"]);

        assert_eq!(
            spec.display_command(),
            "cargo build --release --target aarch64-linux-android"
        );
    }

    #[test]
    fn test_spec_accumulates_env() {
        let spec = CommandSpec::new("cargo")
            .env("PATH", "/usr/bin")
            .env("RUST_LOG", "debug");

        assert_eq!(spec.get_env().len(), 2);
        assert_eq!(spec.get_env()[0].0, OsString::from("PATH"));
    }

    #[test]
    fn test_exit_status_success() {
        assert!(ExitStatus::from_code(0).success());
        assert!(!ExitStatus::from_code(1).success());
        assert!(!ExitStatus::terminated().success());
        assert_eq!(ExitStatus::terminated().code(), None);
    }

    #[cfg(unix)]
    #[test]
    fn test_system_runner_reports_exit_codes() {
        let runner = SystemRunner;

        let ok = runner.status(&CommandSpec::new("true")).unwrap();
        assert!(ok.success());

        let failed = runner.status(&CommandSpec::new("false")).unwrap();
        assert_eq!(failed.code(), Some(1));
    }

    #[test]
    fn test_system_runner_missing_program() {
        let runner = SystemRunner;
        let err = runner
            .status(&CommandSpec::new("slipway-no-such-program-for-tests"))
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
