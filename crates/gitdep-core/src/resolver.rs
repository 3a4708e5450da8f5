//! Recursive configuration resolution.
//!
//! Starting from any directory inside a repository, [`resolve`] walks up to
//! the repository root, loads its `GitDepend.json` (or the default
//! configuration when there is none), normalizes every path against the
//! root, and recurses into each declared dependency directory.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use gitdep_util::errors::GitDepError;
use gitdep_util::fs::{absolute, find_ancestor_with};
use miette::Diagnostic;
use thiserror::Error;

use crate::configuration::{ConfigId, ConfigTree, Configuration};
use crate::manifest::Manifest;
use crate::{MANIFEST_FILE, REPOSITORY_MARKER};

/// Why a directory could not be resolved to a configuration.
#[derive(Debug, Error, Diagnostic)]
pub enum ResolveError {
    #[error("{} does not exist", directory.display())]
    DirectoryNotFound { directory: PathBuf },

    #[error("This is not a git repository: {}", directory.display())]
    #[diagnostic(
        code(gitdep::not_a_git_repository),
        help("Run gitdep from inside a git working tree, or pass --dir")
    )]
    NotAGitRepository { directory: PathBuf },

    #[error("Failed to read {}", path.display())]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid manifest at {}", path.display())]
    #[diagnostic(help("Check your GitDepend.json for syntax errors"))]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: GitDepError,
    },

    #[error("Dependency cycle detected at {}", directory.display())]
    Cycle { directory: PathBuf },
}

impl ResolveError {
    /// The directory or file the failure refers to. For
    /// [`ResolveError::NotAGitRepository`] this is the start directory.
    pub fn directory(&self) -> &Path {
        match self {
            Self::DirectoryNotFound { directory }
            | Self::NotAGitRepository { directory }
            | Self::Cycle { directory } => directory,
            Self::ManifestRead { path, .. } | Self::ManifestParse { path, .. } => path,
        }
    }
}

/// Resolve the repository containing `start` and, recursively, all of its dependencies.
///
/// Only failures of the repository containing `start` are returned. A
/// dependency that fails to resolve is logged and left with no configuration.
pub fn resolve(start: &Path) -> Result<ConfigTree, ResolveError> {
    let mut resolver = Resolver::new();
    let root = resolver.resolve_node(start)?;
    let mut tree = resolver.tree;
    tree.set_root(root);
    Ok(tree)
}

struct Resolver {
    tree: ConfigTree,
    /// Repository roots already resolved, for sharing nodes.
    resolved: HashMap<PathBuf, ConfigId>,
    /// Repository roots on the current resolution path.
    in_progress: HashSet<PathBuf>,
}

impl Resolver {
    fn new() -> Self {
        Self {
            tree: ConfigTree::new(),
            resolved: HashMap::new(),
            in_progress: HashSet::new(),
        }
    }

    fn resolve_node(&mut self, start: &Path) -> Result<ConfigId, ResolveError> {
        let directory = absolute(start).map_err(|_| ResolveError::DirectoryNotFound {
            directory: start.to_path_buf(),
        })?;
        if !directory.is_dir() {
            return Err(ResolveError::DirectoryNotFound { directory });
        }

        let root = find_ancestor_with(&directory, REPOSITORY_MARKER)
            .ok_or_else(|| ResolveError::NotAGitRepository {
                directory: directory.clone(),
            })?;

        if let Some(&id) = self.resolved.get(&root) {
            tracing::debug!("Reusing resolved configuration for {}", root.display());
            return Ok(id);
        }
        if self.in_progress.contains(&root) {
            return Err(ResolveError::Cycle { directory: root });
        }

        let manifest = load_manifest(&root)?;
        let mut config = Configuration::from_manifest(&root, &manifest);

        self.in_progress.insert(root.clone());
        for dependency in &mut config.dependencies {
            match self.resolve_node(&dependency.directory) {
                Ok(id) => dependency.configuration = Some(id),
                Err(e) => tracing::warn!(
                    "Could not resolve dependency {}: {e}",
                    dependency.directory.display()
                ),
            }
        }
        self.in_progress.remove(&root);

        let id = self.tree.push(config);
        self.resolved.insert(root, id);
        Ok(id)
    }
}

/// Load the manifest at a repository root. A missing manifest is not an
/// error: the repository gets the default configuration.
fn load_manifest(root: &Path) -> Result<Manifest, ResolveError> {
    let path = root.join(MANIFEST_FILE);
    if !path.is_file() {
        tracing::debug!("No {MANIFEST_FILE} in {}, using defaults", root.display());
        return Ok(Manifest::default());
    }

    let content = std::fs::read_to_string(&path).map_err(|source| ResolveError::ManifestRead {
        path: path.clone(),
        source,
    })?;

    Manifest::parse(&content).map_err(|source| {
        tracing::error!("{}: {source}", path.display());
        ResolveError::ManifestParse { path, source }
    })
}
