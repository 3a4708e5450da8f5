//! The visitor that builds dependencies and points the project at their new artifacts.

use std::path::Path;

use gitdep_core::artifact::ArtifactDescriptor;
use gitdep_core::configuration::{ConfigTree, Dependency};
use gitdep_core::resolver;
use gitdep_core::return_code::ReturnCode;
use gitdep_util::fs::find_files;
use gitdep_util::progress::{status, status_error, status_info, status_warn};

use crate::build_runner::BuildRunner;
use crate::cache::{artifact_files, ArtifactCache};
use crate::git::SourceControlClient;
use crate::nuget::PackageManifestUpdater;
use crate::visitor::Visitor;

/// Solutions whose package references are rewritten.
pub const SOLUTION_PATTERN: &str = "*.sln";

/// Build manifests staged for the update commit.
pub const STAGED_PATTERNS: [&str; 2] = ["*.csproj", "*/packages.config"];

pub const COMMIT_MESSAGE: &str = "GitDepend: updating dependencies";

/// Builds each dependency, harvests its artifacts into the cache, then
/// updates every solution under the project and commits the result.
pub struct BuildAndUpdateVisitor {
    cache: ArtifactCache,
    runner: Box<dyn BuildRunner>,
    updater: Box<dyn PackageManifestUpdater>,
    scm: Box<dyn SourceControlClient>,
}

impl BuildAndUpdateVisitor {
    pub fn new(
        cache: ArtifactCache,
        runner: Box<dyn BuildRunner>,
        updater: Box<dyn PackageManifestUpdater>,
        scm: Box<dyn SourceControlClient>,
    ) -> Self {
        Self {
            cache,
            runner,
            updater,
            scm,
        }
    }

    fn update_solutions(&self, directory: &Path, tree: &ConfigTree) -> ReturnCode {
        let solutions = match find_files(directory, SOLUTION_PATTERN, true) {
            Ok(solutions) => solutions,
            Err(e) => {
                tracing::error!("{e}");
                return ReturnCode::FailedToRunNugetCommand;
            }
        };

        for dependency in &tree.root().dependencies {
            let Some(config) = tree.configuration_of(dependency) else {
                status_warn(
                    "Skipping",
                    &format!("{} (unresolved)", dependency.directory.display()),
                );
                continue;
            };

            for file in artifact_files(&config.packages.directory) {
                let Some(artifact) = ArtifactDescriptor::from_path(&file) else {
                    tracing::debug!("No version in {}, skipping", file.display());
                    continue;
                };

                for solution in &solutions {
                    status(
                        "Updating",
                        &format!(
                            "{} to {} {}",
                            solution.display(),
                            artifact.id,
                            artifact.version
                        ),
                    );
                    if let Err(e) = self.updater.update(
                        solution,
                        &artifact.id,
                        &artifact.version,
                        self.cache.dir(),
                    ) {
                        status_error("Failed", &e.to_string());
                        return ReturnCode::FailedToRunNugetCommand;
                    }
                }
            }
        }

        ReturnCode::Success
    }

    fn commit(&self, directory: &Path) -> ReturnCode {
        status(
            "Committing",
            &format!("update commit on {}", directory.display()),
        );
        let result = self
            .scm
            .add(directory, &STAGED_PATTERNS)
            .and_then(|()| self.scm.status(directory))
            .and_then(|()| self.scm.commit(directory, COMMIT_MESSAGE));

        match result {
            Ok(()) => ReturnCode::Success,
            Err(e) => {
                status_error("Failed", &e.to_string());
                ReturnCode::FailedToRunGitCommand
            }
        }
    }
}

impl Visitor for BuildAndUpdateVisitor {
    fn visit_dependency(&mut self, dependency: &Dependency) -> ReturnCode {
        // Resolved again on purpose: the build may act on a manifest that
        // changed since the parent was resolved.
        let tree = match resolver::resolve(&dependency.directory) {
            Ok(tree) => tree,
            Err(e) => {
                status_error("Failed", &e.to_string());
                return ReturnCode::GitRepositoryNotFound;
            }
        };
        let config = tree.root();

        status("Building", &dependency.directory.display().to_string());
        let exit_code = match self.runner.run(
            &config.build.script,
            &config.build.arguments,
            &dependency.directory,
        ) {
            Ok(code) => code,
            Err(e) => {
                status_error("Failed", &e.to_string());
                return ReturnCode::FailedToRunBuildScript;
            }
        };

        for cached in self.cache.harvest(&config.packages.directory) {
            if let Some(name) = cached.file_name() {
                status_info("Harvested", &name.to_string_lossy());
            }
        }

        ReturnCode::from_exit_code(exit_code)
    }

    fn visit_project(&mut self, directory: &Path, tree: &ConfigTree) -> ReturnCode {
        let code = self.update_solutions(directory, tree);
        if !code.is_success() {
            return code;
        }
        self.commit(directory)
    }
}
