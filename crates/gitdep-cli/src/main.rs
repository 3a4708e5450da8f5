//! gitdep CLI binary.
//!
//! This is the entry point for the `gitdep` command-line tool. It parses
//! arguments with `clap`, initializes logging via `tracing`, and dispatches
//! to the appropriate command handler. The process exit status is the
//! run's return code.

mod cli;
mod commands;

use std::process::ExitCode;

use miette::Result;

fn main() -> Result<ExitCode> {
    let args = cli::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let code = commands::dispatch(args)?;
    Ok(commands::exit_code(code))
}
