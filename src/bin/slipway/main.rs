//! Slipway CLI - a build-environment bootstrapper for Android NDK cross-builds

use clap::Parser;
use tracing_subscriber::EnvFilter;

use slipway::ops::bootstrap;
use slipway::util::shell::Shell;
use slipway::{BootstrapContext, BootstrapError, SystemRunner};

mod cli;

use cli::Cli;

fn main() {
    // No flags or subcommands; this still rejects stray arguments and
    // provides --help/--version.
    let _cli = Cli::parse();

    // Set up logging. stdout belongs to the delegated build tool, so
    // everything of ours goes to stderr.
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("slipway=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    let shell = Shell::new();
    if let Err(e) = run(&shell) {
        shell.error(&e);
        std::process::exit(e.exit_code());
    }
}

fn run(shell: &Shell) -> Result<(), BootstrapError> {
    let ctx = BootstrapContext::from_env()?;
    bootstrap::bootstrap(&ctx, shell, &SystemRunner)
}
