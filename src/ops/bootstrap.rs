//! The bootstrap operation: resolve the toolchain, extend the search
//! path, hand off to the build tool.
//!
//! This is a linear, one-shot sequence. The only blocking step is the
//! synchronous wait on the delegated build; there are no retries and
//! no recovery, and every failure maps to a distinct exit status via
//! [`BootstrapError::exit_code`].

use crate::core::errors::BootstrapError;
use crate::core::toolchain::NdkToolchain;
use crate::util::context::BootstrapContext;
use crate::util::process::{CommandSpec, ProcessRunner};
use crate::util::shell::{Shell, Status};

/// Run the full bootstrap sequence against the given context.
///
/// `Ok(())` means the build tool ran and exited zero. All other
/// outcomes are reported to the caller, never handled here.
pub fn bootstrap(
    ctx: &BootstrapContext,
    shell: &Shell,
    runner: &dyn ProcessRunner,
) -> Result<(), BootstrapError> {
    let profile = ctx.profile();
    tracing::debug!(
        os = profile.os().as_str(),
        prebuilt = profile.prebuilt_dir(),
        "host platform selected"
    );

    let toolchain = match ctx.ndk_root() {
        Some(root) => NdkToolchain::from_ndk_root(profile, root),
        None => NdkToolchain::locate(profile, ctx.home(), ctx.ndk_version()),
    };
    shell.status(
        Status::Locating,
        format!("NDK toolchain at {}", toolchain.bin_dir().display()),
    );

    let search_path = toolchain
        .augment_search_path(ctx.search_path())
        .map_err(|e| BootstrapError::Configuration {
            reason: format!("could not extend the executable search path: {e}"),
        })?;

    let spec = CommandSpec::new(ctx.build_tool())
        .args(["build", "--release", "--target"])
        .arg(ctx.build_target())
        .env("PATH", &search_path)
        .cwd(ctx.cwd());

    // Diagnostic only: a missing tool still surfaces as a launch failure.
    match which::which_in(ctx.build_tool().as_os_str(), Some(&search_path), ctx.cwd()) {
        Ok(resolved) => tracing::debug!(tool = %resolved.display(), "build tool resolved"),
        Err(_) => tracing::debug!(
            tool = %ctx.build_tool().display(),
            "build tool not found on the augmented search path"
        ),
    }

    shell.status(Status::Building, spec.display_command());

    let command = ctx.build_tool().display().to_string();
    let status = runner
        .status(&spec)
        .map_err(|source| BootstrapError::Spawn {
            command: command.clone(),
            source,
        })?;

    if status.success() {
        shell.status(Status::Finished, format!("`{}` completed", spec.display_command()));
        return Ok(());
    }

    Err(BootstrapError::BuildFailure {
        command,
        // A child killed without an exit code still has to fail the run.
        code: status.code().unwrap_or(1),
    })
}
