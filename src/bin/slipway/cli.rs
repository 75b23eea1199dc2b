//! CLI definitions using clap.

use clap::Parser;

/// Slipway - a build-environment bootstrapper for Android NDK cross-builds
///
/// Running `slipway` takes no arguments: it resolves the NDK toolchain
/// for the host, extends the executable search path, and hands off to
/// the build tool, forwarding its exit code.
#[derive(Parser)]
#[command(name = "slipway")]
#[command(author, version, about, long_about = None)]
pub struct Cli {}
