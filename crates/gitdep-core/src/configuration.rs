//! The resolved configuration tree.
//!
//! Resolution produces one [`Configuration`] per repository, stored in a
//! [`ConfigTree`] arena and addressed by [`ConfigId`]. A [`Dependency`] points
//! at its nested configuration by id, so a repository reached along several
//! paths is stored once and shared.

use std::path::{Path, PathBuf};

use crate::manifest::{BuildSection, DependencyEntry, Manifest, PackagesSection};

/// Index of a [`Configuration`] inside a [`ConfigTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConfigId(usize);

impl ConfigId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A repository's manifest with every path made absolute against its root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    /// The repository root this configuration was loaded from.
    pub root: PathBuf,
    pub build: Build,
    pub packages: Packages,
    /// Declared dependencies, in manifest order.
    pub dependencies: Vec<Dependency>,
}

/// The build script and its argument string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Build {
    pub script: PathBuf,
    pub arguments: String,
}

/// Where a repository's build drops its package artifacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packages {
    pub directory: PathBuf,
}

/// A reference from one repository to another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    pub directory: PathBuf,
    pub url: Option<String>,
    pub branch: Option<String>,
    /// The dependency's own configuration, or `None` when it failed to resolve.
    pub configuration: Option<ConfigId>,
}

impl Configuration {
    /// Build a configuration from a manifest, resolving its paths against `root`.
    ///
    /// Dependencies are created unresolved; the resolver attaches their
    /// configurations afterwards.
    pub fn from_manifest(root: &Path, manifest: &Manifest) -> Self {
        let resolve = |p: &str| gitdep_util::fs::resolve_against(root, Path::new(p));
        Self {
            root: root.to_path_buf(),
            build: Build {
                script: resolve(&manifest.build.script),
                arguments: manifest.build.arguments.clone(),
            },
            packages: Packages {
                directory: resolve(&manifest.packages.directory),
            },
            dependencies: manifest
                .dependencies
                .iter()
                .map(|entry| Dependency {
                    directory: resolve(&entry.directory),
                    url: entry.url.clone(),
                    branch: entry.branch.clone(),
                    configuration: None,
                })
                .collect(),
        }
    }

    /// Serialize back to manifest form. Paths are written as absolute paths,
    /// so loading the result from the same root yields the same configuration.
    pub fn to_manifest(&self) -> Manifest {
        Manifest {
            build: BuildSection {
                script: path_string(&self.build.script),
                arguments: self.build.arguments.clone(),
            },
            packages: PackagesSection {
                directory: path_string(&self.packages.directory),
            },
            dependencies: self
                .dependencies
                .iter()
                .map(|dep| DependencyEntry {
                    directory: path_string(&dep.directory),
                    url: dep.url.clone(),
                    branch: dep.branch.clone(),
                })
                .collect(),
        }
    }
}

fn path_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Arena of resolved configurations with a distinguished root.
#[derive(Debug, Clone)]
pub struct ConfigTree {
    nodes: Vec<Configuration>,
    root: ConfigId,
}

impl ConfigTree {
    pub(crate) fn new() -> Self {
        Self {
            nodes: Vec::new(),
            root: ConfigId(0),
        }
    }

    pub(crate) fn push(&mut self, config: Configuration) -> ConfigId {
        let id = ConfigId(self.nodes.len());
        self.nodes.push(config);
        id
    }

    pub(crate) fn set_root(&mut self, id: ConfigId) {
        self.root = id;
    }

    /// The configuration of the repository resolution started from.
    pub fn root(&self) -> &Configuration {
        &self.nodes[self.root.0]
    }

    pub fn root_id(&self) -> ConfigId {
        self.root
    }

    /// The resolved repository root directory.
    pub fn root_dir(&self) -> &Path {
        &self.root().root
    }

    pub fn get(&self, id: ConfigId) -> &Configuration {
        &self.nodes[id.0]
    }

    /// The nested configuration of `dependency`, if it resolved.
    pub fn configuration_of(&self, dependency: &Dependency) -> Option<&Configuration> {
        dependency.configuration.map(|id| self.get(id))
    }

    /// Number of distinct repositories in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
