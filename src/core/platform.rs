//! Host platform identification.
//!
//! Classification is a total mapping: every OS-identifying signal
//! selects a profile, and unrecognized hosts deliberately fall through
//! to the Windows prebuilt directory. The fallback is policy, not an
//! error; nothing in this module can fail.

use std::fmt;

/// Operating-system family of the machine running the build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostOs {
    Linux,
    Darwin,
    Windows,
    Other,
}

impl HostOs {
    /// Classify an OS-identifying signal such as a `uname -s` string or
    /// the compiler's target OS name.
    ///
    /// Predicates are checked in a fixed order and match on
    /// case-insensitive substrings, so `"GNU/Linux"`, `"Darwin"`, and
    /// `"Windows_NT"` all land where expected. Anything unrecognized is
    /// `Other`.
    pub fn from_signal(signal: &str) -> HostOs {
        let signal = signal.to_lowercase();
        if signal.contains("linux") {
            HostOs::Linux
        } else if signal.contains("darwin") || signal.contains("macos") {
            HostOs::Darwin
        } else if signal.contains("windows")
            || signal.contains("mingw")
            || signal.contains("msys")
            || signal.contains("cygwin")
        {
            HostOs::Windows
        } else {
            HostOs::Other
        }
    }

    /// The OS this process is running on.
    pub fn current() -> HostOs {
        HostOs::from_signal(std::env::consts::OS)
    }

    /// Get the OS family name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            HostOs::Linux => "linux",
            HostOs::Darwin => "darwin",
            HostOs::Windows => "windows",
            HostOs::Other => "other",
        }
    }
}

impl fmt::Display for HostOs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The platform selection made once at startup: which OS family was
/// seen and which NDK prebuilt directory serves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformProfile {
    os: HostOs,
    prebuilt: &'static str,
}

impl PlatformProfile {
    /// Select the profile for an OS family.
    ///
    /// `Windows` and `Other` share the final arm: an unrecognized host
    /// gets the Windows toolchain rather than an error.
    pub fn select(os: HostOs) -> PlatformProfile {
        let prebuilt = match os {
            HostOs::Linux => "linux-x86_64",
            HostOs::Darwin => "darwin-x86_64",
            HostOs::Windows | HostOs::Other => "windows-x86_64",
        };
        PlatformProfile { os, prebuilt }
    }

    /// Profile for the machine this process is running on.
    pub fn detect() -> PlatformProfile {
        PlatformProfile::select(HostOs::current())
    }

    /// Profile for an arbitrary OS signal (see [`HostOs::from_signal`]).
    pub fn from_signal(signal: &str) -> PlatformProfile {
        PlatformProfile::select(HostOs::from_signal(signal))
    }

    /// The OS family this profile was selected for.
    pub fn os(&self) -> HostOs {
        self.os
    }

    /// NDK `prebuilt` directory name for this host.
    pub fn prebuilt_dir(&self) -> &'static str {
        self.prebuilt
    }
}
