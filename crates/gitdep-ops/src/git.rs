//! Source-control operations used to record dependency updates.

use std::path::Path;
use std::process::Output;

use gitdep_util::errors::GitDepError;

use crate::tool_command;

/// The source-control calls made after manifests are updated.
pub trait SourceControlClient {
    /// Stage changed files in `repo` matching any of `patterns`.
    fn add(&self, repo: &Path, patterns: &[&str]) -> Result<(), GitDepError>;

    /// Report the working tree status of `repo`.
    fn status(&self, repo: &Path) -> Result<(), GitDepError>;

    /// Commit whatever is staged in `repo`.
    fn commit(&self, repo: &Path, message: &str) -> Result<(), GitDepError>;
}

/// [`SourceControlClient`] backed by the `git` executable.
#[derive(Debug, Clone)]
pub struct GitClient {
    program: String,
}

impl GitClient {
    /// `program` may carry leading arguments, e.g. `"git -c core.autocrlf=false"`.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn git(&self, repo: &Path, args: &[&str]) -> Result<Output, GitDepError> {
        tool_command(&self.program)?.args(args).cwd(repo).exec()
    }

    fn git_checked(&self, repo: &Path, args: &[&str]) -> Result<Output, GitDepError> {
        let output = self.git(repo, args)?;
        if output.status.success() {
            Ok(output)
        } else {
            Err(failure(&self.program, args, &output))
        }
    }
}

impl Default for GitClient {
    fn default() -> Self {
        Self::new("git")
    }
}

impl SourceControlClient for GitClient {
    fn add(&self, repo: &Path, patterns: &[&str]) -> Result<(), GitDepError> {
        // `git add` rejects pathspecs that match nothing, so list the
        // modified and untracked matches first and stage only those.
        let mut args = vec!["ls-files", "-z", "--modified", "--others", "--exclude-standard", "--"];
        args.extend_from_slice(patterns);
        let listed = self.git_checked(repo, &args)?;

        let mut files: Vec<String> = String::from_utf8_lossy(&listed.stdout)
            .split('\0')
            .filter(|f| !f.is_empty())
            .map(str::to_string)
            .collect();
        files.sort();
        files.dedup();

        if files.is_empty() {
            tracing::debug!("Nothing to stage in {}", repo.display());
            return Ok(());
        }

        let mut args = vec!["add", "--"];
        args.extend(files.iter().map(String::as_str));
        self.git_checked(repo, &args)?;
        Ok(())
    }

    fn status(&self, repo: &Path) -> Result<(), GitDepError> {
        let args = ["status", "--short"];
        let status = tool_command(&self.program)?.args(args).cwd(repo).status()?;
        if status.success() {
            Ok(())
        } else {
            Err(GitDepError::Process {
                message: format!("{} {} exited with {status}", self.program, args.join(" ")),
            })
        }
    }

    fn commit(&self, repo: &Path, message: &str) -> Result<(), GitDepError> {
        // `diff --cached --quiet` exits 0 when nothing is staged.
        let staged = self.git(repo, &["diff", "--cached", "--quiet"])?;
        match staged.status.code() {
            Some(0) => {
                tracing::info!("No staged changes in {}, skipping commit", repo.display());
                Ok(())
            }
            Some(1) => {
                self.git_checked(repo, &["commit", "-m", message])?;
                Ok(())
            }
            _ => Err(failure(&self.program, &["diff", "--cached", "--quiet"], &staged)),
        }
    }
}

fn failure(program: &str, args: &[&str], output: &Output) -> GitDepError {
    let stderr = String::from_utf8_lossy(&output.stderr);
    GitDepError::Process {
        message: format!(
            "{program} {} exited with {}: {}",
            args.join(" "),
            output.status,
            stderr.trim()
        ),
    }
}
