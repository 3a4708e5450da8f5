//! High-level gitdep operations.
//!
//! Wires the resolved configuration tree from `gitdep-core` to the side
//! effects of a run: building dependencies, caching their artifacts,
//! rewriting solution package references, and committing the result.

pub mod build_and_update;
pub mod build_runner;
pub mod cache;
pub mod git;
pub mod nuget;
pub mod ops_cache;
pub mod ops_config;
pub mod ops_init;
pub mod ops_tree;
pub mod ops_update;
pub mod visitor;

use gitdep_util::errors::GitDepError;
use gitdep_util::process::CommandBuilder;

/// Build a command from a configured tool string such as `"mono nuget.exe"`:
/// the first word is the program, the rest are leading arguments.
pub fn tool_command(tool: &str) -> Result<CommandBuilder, GitDepError> {
    let words = shell_words::split(tool).map_err(|e| GitDepError::Process {
        message: format!("Invalid tool command '{tool}': {e}"),
    })?;
    let (program, args) = words.split_first().ok_or_else(|| GitDepError::Process {
        message: "Empty tool command".to_string(),
    })?;
    Ok(CommandBuilder::new(program).args(args))
}
