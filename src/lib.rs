//! Slipway - a build-environment bootstrapper for Android NDK cross-builds
//!
//! This crate provides the core library functionality for Slipway:
//! host platform selection, NDK toolchain path resolution, search-path
//! augmentation, and delegation to the native build tool.

pub mod core;
pub mod ops;
pub mod util;

/// Test utilities and mocks for Slipway unit tests.
///
/// This module is only available when compiling with `--cfg test` or
/// running tests. It provides a scripted stand-in for process
/// execution so operations can be exercised without launching
/// anything.
#[cfg(test)]
pub mod test_support;

pub use crate::core::errors::BootstrapError;
pub use crate::core::platform::{HostOs, PlatformProfile};
pub use crate::core::toolchain::NdkToolchain;
pub use crate::util::context::BootstrapContext;
pub use crate::util::process::{CommandSpec, ProcessRunner, SystemRunner};
