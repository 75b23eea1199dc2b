//! Configuration file support for Slipway.
//!
//! Slipway reads two optional configuration files:
//! - Global: `~/.slipway/config.toml` - user-wide defaults
//! - Project: `./.slipway/config.toml` - per-project overrides
//!
//! Project config takes precedence over global config. A missing file
//! is silently the default; an unreadable or malformed file logs a
//! warning and degrades to the default rather than aborting.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Slipway configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// NDK location settings
    pub ndk: NdkConfig,

    /// Build delegation settings
    pub build: BuildConfig,
}

/// NDK location settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NdkConfig {
    /// NDK release to locate under the home directory (e.g. "r27c")
    pub version: Option<String>,

    /// Explicit NDK root; bypasses the home-based lookup entirely
    pub root: Option<PathBuf>,
}

/// Build delegation settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Build tool to delegate to (e.g. /usr/bin/cargo)
    pub tool: Option<PathBuf>,

    /// Target triple to build for
    pub target: Option<String>,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config: {}", path.display()))
    }

    /// Load configuration with fallback to defaults if the file is
    /// missing or broken.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: Config) {
        if other.ndk.version.is_some() {
            self.ndk.version = other.ndk.version;
        }
        if other.ndk.root.is_some() {
            self.ndk.root = other.ndk.root;
        }
        if other.build.tool.is_some() {
            self.build.tool = other.build.tool;
        }
        if other.build.target.is_some() {
            self.build.target = other.build.target;
        }
    }
}

/// Load merged configuration from the global and project locations.
///
/// Order of precedence (highest to lowest):
/// 1. Project config (./.slipway/config.toml)
/// 2. Global config (~/.slipway/config.toml)
/// 3. Defaults
pub fn load_config(global_path: &Path, project_path: &Path) -> Config {
    let mut config = Config::default();

    if global_path.exists() {
        config.merge(Config::load_or_default(global_path));
    }

    if project_path.exists() {
        config.merge(Config::load_or_default(project_path));
    }

    config
}

/// Get the global config path under the given home directory.
pub fn global_config_path(home: &Path) -> PathBuf {
    home.join(".slipway").join("config.toml")
}

/// Get the project config path under the given working directory.
pub fn project_config_path(cwd: &Path) -> PathBuf {
    cwd.join(".slipway").join("config.toml")
}
