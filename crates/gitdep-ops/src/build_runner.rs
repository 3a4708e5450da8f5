//! Launching a dependency's build script.

use std::path::Path;

use gitdep_util::errors::GitDepError;
use gitdep_util::process::CommandBuilder;

/// Runs a build script to completion.
pub trait BuildRunner {
    /// Run `script` with the whitespace-separated `arguments` in `working_dir`
    /// and block until it exits. Returns the exit code, or an error when the
    /// process could not be started.
    fn run(&self, script: &Path, arguments: &str, working_dir: &Path) -> Result<i32, GitDepError>;
}

/// [`BuildRunner`] that spawns the script as a child process with inherited stdio.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessBuildRunner;

impl BuildRunner for ProcessBuildRunner {
    fn run(&self, script: &Path, arguments: &str, working_dir: &Path) -> Result<i32, GitDepError> {
        let args = shell_words::split(arguments).map_err(|e| GitDepError::Process {
            message: format!("Invalid build arguments '{arguments}': {e}"),
        })?;

        let status = CommandBuilder::new(script)
            .args(args)
            .cwd(working_dir)
            .status()?;

        // No exit code means the script was terminated by a signal.
        Ok(status.code().unwrap_or(-1))
    }
}
