//! Startup snapshot of the host environment.
//!
//! Everything the bootstrap sequence needs from the environment is
//! captured here exactly once, at process start. Later stages receive
//! the context by reference and never consult process-wide state, and
//! nothing ever mutates the parent environment.

use std::env;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use crate::core::errors::BootstrapError;
use crate::core::platform::PlatformProfile;
use crate::core::toolchain::{ANDROID_TARGET, DEFAULT_BUILD_TOOL, DEFAULT_NDK_VERSION};
use crate::util::config::{self, Config};

/// Environment variable naming an explicit NDK root, overriding the
/// home-based lookup.
pub const NDK_HOME_VAR: &str = "ANDROID_NDK_HOME";

/// Immutable context for one bootstrap run.
#[derive(Debug, Clone)]
pub struct BootstrapContext {
    /// Platform selected for this host
    profile: PlatformProfile,

    /// Current working directory
    cwd: PathBuf,

    /// Home directory the NDK is looked up under
    home: PathBuf,

    /// Executable search path as found at startup (may be empty)
    search_path: OsString,

    /// Explicit NDK root from the environment, if any
    ndk_root: Option<PathBuf>,

    /// Merged file configuration
    config: Config,
}

impl BootstrapContext {
    /// Capture the environment for the current process.
    ///
    /// Fails with a configuration error when the working directory or
    /// the home directory cannot be determined; everything else has a
    /// workable default.
    pub fn from_env() -> Result<BootstrapContext, BootstrapError> {
        let cwd = env::current_dir().map_err(|e| BootstrapError::Configuration {
            reason: format!("failed to get current directory: {e}"),
        })?;

        let home = directories::BaseDirs::new()
            .map(|dirs| dirs.home_dir().to_path_buf())
            .ok_or_else(|| BootstrapError::Configuration {
                reason: "could not determine the home directory".to_string(),
            })?;

        let config = config::load_config(
            &config::global_config_path(&home),
            &config::project_config_path(&cwd),
        );

        let ndk_root = env::var_os(NDK_HOME_VAR)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        let search_path = env::var_os("PATH").unwrap_or_default();

        Ok(BootstrapContext {
            profile: PlatformProfile::detect(),
            cwd,
            home,
            search_path,
            ndk_root,
            config,
        })
    }

    /// Create a context from explicit parts. Used by tests and by
    /// anything embedding the bootstrap sequence.
    pub fn new(
        profile: PlatformProfile,
        home: impl Into<PathBuf>,
        search_path: impl Into<OsString>,
        cwd: impl Into<PathBuf>,
    ) -> BootstrapContext {
        BootstrapContext {
            profile,
            cwd: cwd.into(),
            home: home.into(),
            search_path: search_path.into(),
            ndk_root: None,
            config: Config::default(),
        }
    }

    /// Replace the file configuration.
    pub fn with_config(mut self, config: Config) -> BootstrapContext {
        self.config = config;
        self
    }

    /// Set an explicit NDK root, as `ANDROID_NDK_HOME` would.
    pub fn with_ndk_root(mut self, root: impl Into<PathBuf>) -> BootstrapContext {
        self.ndk_root = Some(root.into());
        self
    }

    /// The platform selected for this run.
    pub fn profile(&self) -> &PlatformProfile {
        &self.profile
    }

    /// The working directory the build runs in.
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// The home directory the NDK is looked up under.
    pub fn home(&self) -> &Path {
        &self.home
    }

    /// The executable search path captured at startup.
    pub fn search_path(&self) -> &OsStr {
        &self.search_path
    }

    /// Explicit NDK root, if one was supplied by the environment or
    /// configuration. Environment wins.
    pub fn ndk_root(&self) -> Option<&Path> {
        self.ndk_root
            .as_deref()
            .or(self.config.ndk.root.as_deref())
    }

    /// NDK release to locate when no explicit root is given.
    pub fn ndk_version(&self) -> &str {
        self.config
            .ndk
            .version
            .as_deref()
            .unwrap_or(DEFAULT_NDK_VERSION)
    }

    /// Build tool to delegate to.
    pub fn build_tool(&self) -> &Path {
        self.config
            .build
            .tool
            .as_deref()
            .unwrap_or(Path::new(DEFAULT_BUILD_TOOL))
    }

    /// Target triple the build is asked to produce.
    pub fn build_target(&self) -> &str {
        self.config
            .build
            .target
            .as_deref()
            .unwrap_or(ANDROID_TARGET)
    }
}
