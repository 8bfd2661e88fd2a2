mod console;
mod platform;

use anyhow::{Context, Result};
use clap::Parser;
use clap::error::ErrorKind;
use console::TermConsole;
use platform::PlatformProviderFactory;
use procull_core::{CullConfig, ProviderFactory, Session};
use std::io;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Interactively kill processes by executable name, children first
#[derive(Debug, Parser)]
#[command(name = "procull", version, about)]
struct Cli {
    /// Executable name to match against running processes
    target: String,

    /// Pass the literal word "dryrun" to rehearse without killing anything
    mode: Option<String>,
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::from(1)
        }
    }
}

fn run() -> Result<u8> {
    // Argument errors must surface as exit code 1 like every other top-level
    // failure; clap's own exit would use code 2. Help and version requests
    // are ordinary exits, not failures.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.print().context("failed to render usage")?;
            return Ok(0);
        }
        Err(err) => return Err(err.into()),
    };

    // Diagnostics go to stderr so the interactive protocol on stdout stays
    // clean; RUST_LOG overrides the default level.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let config = CullConfig::builder()
        .target(cli.target)
        .dry_run(matches!(cli.mode.as_deref(), Some("dryrun")))
        .build()
        .context("invalid configuration")?;

    info!(
        platform = PlatformProviderFactory::platform_name(),
        target = %config.target,
        dry_run = config.dry_run,
        "starting interactive session"
    );

    let provider = PlatformProviderFactory::create_provider();
    let mut session = Session::new(provider, TermConsole::new(), config);
    Ok(session.run())
}
