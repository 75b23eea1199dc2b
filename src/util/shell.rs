//! Status output for the CLI.
//!
//! All human-facing lines go to stderr so the delegated build tool
//! keeps stdout to itself. Color is used only when stderr is a
//! terminal.

use std::fmt::Display;
use std::io::{self, IsTerminal};

/// Status types for output messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    // In-progress statuses (cyan)
    Locating,
    Building,

    // Success status (green)
    Finished,

    // Error status (red)
    Error,
}

impl Status {
    /// Get the display text for this status.
    fn as_str(&self) -> &'static str {
        match self {
            Status::Locating => "Locating",
            Status::Building => "Building",
            Status::Finished => "Finished",
            Status::Error => "error",
        }
    }

    /// Get the ANSI color code for this status.
    fn color_code(&self) -> &'static str {
        match self {
            Status::Locating | Status::Building => "\x1b[1;36m",
            Status::Finished => "\x1b[1;32m",
            Status::Error => "\x1b[1;31m",
        }
    }
}

/// Width status words are right-aligned to.
const STATUS_WIDTH: usize = 12;

/// Central shell for CLI output.
#[derive(Debug)]
pub struct Shell {
    use_color: bool,
}

impl Shell {
    /// Create a shell, detecting whether stderr supports color.
    pub fn new() -> Shell {
        Shell {
            use_color: io::stderr().is_terminal(),
        }
    }

    /// Print an aligned status line, cargo-style.
    pub fn status(&self, status: Status, message: impl Display) {
        if self.use_color {
            eprintln!(
                "{}{:>width$}\x1b[0m {}",
                status.color_code(),
                status.as_str(),
                message,
                width = STATUS_WIDTH
            );
        } else {
            eprintln!("{:>width$} {}", status.as_str(), message, width = STATUS_WIDTH);
        }
    }

    /// Print an error line.
    pub fn error(&self, message: impl Display) {
        if self.use_color {
            eprintln!("{}error\x1b[0m: {}", Status::Error.color_code(), message);
        } else {
            eprintln!("error: {}", message);
        }
    }
}

impl Default for Shell {
    fn default() -> Shell {
        Shell::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_words() {
        assert_eq!(Status::Building.as_str(), "Building");
        assert_eq!(Status::Finished.as_str(), "Finished");
        assert_eq!(Status::Error.as_str(), "error");
    }

    #[test]
    fn test_status_words_fit_alignment() {
        for status in [Status::Locating, Status::Building, Status::Finished, Status::Error] {
            assert!(status.as_str().len() <= STATUS_WIDTH);
        }
    }
}
