//! Command dispatch and handler modules.

mod cache;
mod config;
mod init;
mod tree;
mod update;

use std::path::Path;
use std::process::ExitCode;

use miette::Result;

use gitdep_core::configuration::ConfigTree;
use gitdep_core::resolver;
use gitdep_core::return_code::ReturnCode;
use gitdep_util::errors::GitDepError;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<ReturnCode> {
    let start = match cli.dir {
        Some(dir) => dir,
        None => std::env::current_dir().map_err(GitDepError::Io)?,
    };

    match cli.command {
        Command::Update { cache_dir } => update::exec(&start, cache_dir),
        Command::Config => config::exec(&start),
        Command::Tree { depth } => tree::exec(&start, depth),
        Command::Init => init::exec(&start),
        Command::Cache { action } => cache::exec(action),
    }
}

/// Map a return code to the process exit status.
pub fn exit_code(code: ReturnCode) -> ExitCode {
    // Codes outside 0..=255 cannot be represented; report them as a generic failure.
    ExitCode::from(u8::try_from(code.code()).unwrap_or(1))
}

/// Resolve the tree for `start`, printing the diagnostic on failure.
fn resolve_or_report(start: &Path) -> std::result::Result<ConfigTree, ReturnCode> {
    resolver::resolve(start).map_err(|e| {
        eprintln!("{:?}", miette::Report::new(e));
        ReturnCode::GitRepositoryNotFound
    })
}
