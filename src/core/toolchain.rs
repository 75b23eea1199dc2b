//! Android NDK toolchain location.
//!
//! The toolchain `bin` directory is computed, never verified: a missing
//! or wrongly-versioned NDK surfaces later as a launch failure when the
//! build tool cannot be found on the augmented search path.

use std::env;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use crate::core::platform::PlatformProfile;

/// NDK release assumed when none is configured.
pub const DEFAULT_NDK_VERSION: &str = "r27c";

/// Target triple the delegated build is asked to produce.
pub const ANDROID_TARGET: &str = "aarch64-linux-android";

/// Build tool delegated to when none is configured.
pub const DEFAULT_BUILD_TOOL: &str = "cargo";

/// Resolved location of an NDK's LLVM toolchain binaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NdkToolchain {
    bin_dir: PathBuf,
}

impl NdkToolchain {
    /// Locate the toolchain for `profile` under the conventional NDK
    /// install location in `home`.
    ///
    /// Pure and deterministic: the same profile, home, and version
    /// always produce the same path, and the profile only influences
    /// the prebuilt directory segment.
    pub fn locate(profile: &PlatformProfile, home: &Path, version: &str) -> NdkToolchain {
        let root = home.join("Android").join(format!("android-ndk-{version}"));
        NdkToolchain::from_ndk_root(profile, &root)
    }

    /// Locate the toolchain for `profile` under an explicit NDK root,
    /// such as one named by `ANDROID_NDK_HOME`.
    pub fn from_ndk_root(profile: &PlatformProfile, root: &Path) -> NdkToolchain {
        let bin_dir = root
            .join("toolchains")
            .join("llvm")
            .join("prebuilt")
            .join(profile.prebuilt_dir())
            .join("bin");
        NdkToolchain { bin_dir }
    }

    /// The directory containing the toolchain executables.
    pub fn bin_dir(&self) -> &Path {
        &self.bin_dir
    }

    /// Append the toolchain directory to an executable search path.
    ///
    /// Existing entries keep their order and take precedence; lookups
    /// only reach the toolchain directory when nothing earlier matches.
    /// An empty current path yields just the toolchain directory, so no
    /// empty entry sneaks into the result.
    pub fn augment_search_path(&self, current: &OsStr) -> Result<OsString, env::JoinPathsError> {
        if current.is_empty() {
            return Ok(self.bin_dir.clone().into_os_string());
        }
        let entries = env::split_paths(current).chain(std::iter::once(self.bin_dir.clone()));
        env::join_paths(entries)
    }
}
