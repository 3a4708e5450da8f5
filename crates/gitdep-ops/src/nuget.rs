//! Rewriting solution package references to new dependency versions.

use std::path::{Path, PathBuf};

use gitdep_util::errors::GitDepError;

use crate::tool_command;

/// Points a solution's references to package `id` at `version`.
pub trait PackageManifestUpdater {
    /// Update `solution` so package `id` resolves to `version`, sourcing it
    /// from `cache_dir` when given. Re-running with an unchanged version
    /// must leave the solution unchanged.
    fn update(
        &self,
        solution: &Path,
        id: &str,
        version: &str,
        cache_dir: Option<&Path>,
    ) -> Result<(), GitDepError>;
}

/// [`PackageManifestUpdater`] backed by the `nuget` command line.
#[derive(Debug, Clone)]
pub struct NugetUpdater {
    program: String,
    config_file: Option<PathBuf>,
}

impl NugetUpdater {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            config_file: None,
        }
    }

    /// Pass `-ConfigFile` to every update.
    pub fn with_config_file(mut self, config_file: impl Into<PathBuf>) -> Self {
        self.config_file = Some(config_file.into());
        self
    }

    /// The command-line arguments for one update.
    pub fn update_args(
        &self,
        solution: &Path,
        id: &str,
        version: &str,
        cache_dir: Option<&Path>,
    ) -> Vec<String> {
        let mut args = vec![
            "update".to_string(),
            solution.display().to_string(),
            "-Id".to_string(),
            id.to_string(),
            "-Version".to_string(),
            version.to_string(),
        ];
        if let Some(dir) = cache_dir {
            args.push("-Source".to_string());
            args.push(dir.display().to_string());
        }
        if let Some(ref config) = self.config_file {
            args.push("-ConfigFile".to_string());
            args.push(config.display().to_string());
        }
        args.push("-NonInteractive".to_string());
        args
    }
}

impl PackageManifestUpdater for NugetUpdater {
    fn update(
        &self,
        solution: &Path,
        id: &str,
        version: &str,
        cache_dir: Option<&Path>,
    ) -> Result<(), GitDepError> {
        let working_dir = solution.parent().unwrap_or(Path::new("."));
        let status = tool_command(&self.program)?
            .args(self.update_args(solution, id, version, cache_dir))
            .cwd(working_dir)
            .status()?;

        if status.success() {
            Ok(())
        } else {
            Err(GitDepError::Process {
                message: format!(
                    "{} update {} for {id} {version} exited with {status}",
                    self.program,
                    solution.display()
                ),
            })
        }
    }
}
