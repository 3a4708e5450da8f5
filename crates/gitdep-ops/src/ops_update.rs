//! Operation: build every dependency and update the project to its new artifacts.

use std::path::PathBuf;

use gitdep_core::config::GlobalConfig;
use gitdep_core::configuration::ConfigTree;
use gitdep_core::return_code::ReturnCode;

use crate::build_and_update::BuildAndUpdateVisitor;
use crate::build_runner::ProcessBuildRunner;
use crate::cache::ArtifactCache;
use crate::git::GitClient;
use crate::nuget::NugetUpdater;
use crate::visitor::traverse;

/// NuGet configuration picked up from the project root when present.
pub const NUGET_CONFIG_FILE: &str = "NuGet.config";

/// Options for `gitdep update`.
#[derive(Debug, Clone)]
pub struct UpdateOptions {
    pub cache_dir: PathBuf,
    pub git: String,
    pub nuget: String,
}

impl UpdateOptions {
    pub fn from_config(config: &GlobalConfig) -> Self {
        Self {
            cache_dir: config.cache_dir(),
            git: config.tools.git.clone(),
            nuget: config.tools.nuget.clone(),
        }
    }
}

/// Build each top-level dependency of `tree`, then update and commit the root project.
pub fn update(tree: &ConfigTree, opts: &UpdateOptions) -> ReturnCode {
    let cache = ArtifactCache::open(&opts.cache_dir);

    let mut updater = NugetUpdater::new(&opts.nuget);
    let nuget_config = tree.root_dir().join(NUGET_CONFIG_FILE);
    if nuget_config.is_file() {
        updater = updater.with_config_file(nuget_config);
    }

    let mut visitor = BuildAndUpdateVisitor::new(
        cache,
        Box::new(ProcessBuildRunner),
        Box::new(updater),
        Box::new(GitClient::new(&opts.git)),
    );

    tracing::info!(
        "Updating {} with {} dependencies",
        tree.root_dir().display(),
        tree.root().dependencies.len()
    );
    traverse(&mut visitor, tree)
}
