#![allow(dead_code)]

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use gitdep_core::MANIFEST_FILE;
use gitdep_ops::build_runner::BuildRunner;
use gitdep_ops::git::SourceControlClient;
use gitdep_ops::nuget::PackageManifestUpdater;
use gitdep_util::errors::GitDepError;

/// Create a repository at `dir` with an optional manifest.
pub fn make_repo(dir: &Path, manifest: Option<&str>) -> PathBuf {
    fs::create_dir_all(dir.join(".git")).unwrap();
    if let Some(json) = manifest {
        fs::write(dir.join(MANIFEST_FILE), json).unwrap();
    }
    dir.to_path_buf()
}

/// Shared call log for fake collaborators.
#[derive(Debug, Default, Clone)]
pub struct CallLog(Rc<RefCell<Vec<String>>>);

impl CallLog {
    pub fn push(&self, entry: String) {
        self.0.borrow_mut().push(entry);
    }

    pub fn entries(&self) -> Vec<String> {
        self.0.borrow().clone()
    }
}

/// Build runner that records calls, optionally drops files into the
/// packages directory, and returns a fixed exit code.
pub struct FakeRunner {
    pub log: CallLog,
    pub exit_code: i32,
    pub fail_to_start: bool,
    /// Files written relative to the working directory on every run.
    pub outputs: Vec<(PathBuf, Vec<u8>)>,
}

impl FakeRunner {
    pub fn new(log: &CallLog) -> Self {
        Self {
            log: log.clone(),
            exit_code: 0,
            fail_to_start: false,
            outputs: Vec::new(),
        }
    }
}

impl BuildRunner for FakeRunner {
    fn run(&self, script: &Path, arguments: &str, working_dir: &Path) -> Result<i32, GitDepError> {
        self.log.push(format!(
            "build {} [{arguments}] in {}",
            script.display(),
            working_dir.display()
        ));
        if self.fail_to_start {
            return Err(GitDepError::Process {
                message: "no such file".to_string(),
            });
        }
        for (relative, bytes) in &self.outputs {
            let path = working_dir.join(relative);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, bytes).unwrap();
        }
        Ok(self.exit_code)
    }
}

pub struct FakeUpdater {
    pub log: CallLog,
    pub fail: bool,
}

impl PackageManifestUpdater for FakeUpdater {
    fn update(
        &self,
        solution: &Path,
        id: &str,
        version: &str,
        cache_dir: Option<&Path>,
    ) -> Result<(), GitDepError> {
        self.log.push(format!(
            "nuget {} {id} {version} {}",
            solution.display(),
            cache_dir.map(|d| d.display().to_string()).unwrap_or_default()
        ));
        if self.fail {
            return Err(GitDepError::Process {
                message: "nuget exited with 1".to_string(),
            });
        }
        Ok(())
    }
}

pub struct FakeScm {
    pub log: CallLog,
    pub fail_add: bool,
}

impl SourceControlClient for FakeScm {
    fn add(&self, repo: &Path, patterns: &[&str]) -> Result<(), GitDepError> {
        self.log
            .push(format!("git add {} in {}", patterns.join(" "), repo.display()));
        if self.fail_add {
            return Err(GitDepError::Process {
                message: "git exited with 128".to_string(),
            });
        }
        Ok(())
    }

    fn status(&self, _repo: &Path) -> Result<(), GitDepError> {
        self.log.push("git status".to_string());
        Ok(())
    }

    fn commit(&self, _repo: &Path, message: &str) -> Result<(), GitDepError> {
        self.log.push(format!("git commit {message}"));
        Ok(())
    }
}
