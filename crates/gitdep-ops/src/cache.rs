//! Shared artifact cache.
//!
//! A flat directory of package files keyed by file name. Storing a file
//! whose name is already present overwrites it.

use std::path::{Path, PathBuf};

use gitdep_core::artifact::ARTIFACT_EXTENSION;
use gitdep_util::errors::GitDepError;
use gitdep_util::fs::{ensure_dir, find_files};

/// Artifact cache shared by every dependency visited in one run.
///
/// A cache whose directory could not be created is disabled: it stores
/// nothing and reports no directory.
#[derive(Debug, Clone)]
pub struct ArtifactCache {
    dir: Option<PathBuf>,
}

impl ArtifactCache {
    /// Open the cache at `dir`, creating it if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        match ensure_dir(&dir) {
            Ok(()) => Self { dir: Some(dir) },
            Err(e) => {
                tracing::warn!(
                    "Artifact cache disabled, cannot create {}: {e}",
                    dir.display()
                );
                Self::disabled()
            }
        }
    }

    pub fn disabled() -> Self {
        Self { dir: None }
    }

    /// The cache directory, or `None` when caching is disabled.
    pub fn dir(&self) -> Option<&Path> {
        self.dir.as_deref()
    }

    /// Copy `file` into the cache under its own file name.
    ///
    /// Returns the cached path, or `None` when caching is disabled.
    pub fn store(&self, file: &Path) -> Result<Option<PathBuf>, GitDepError> {
        let Some(dir) = self.dir() else {
            return Ok(None);
        };
        let name = file.file_name().ok_or_else(|| GitDepError::Cache {
            message: format!("{} has no file name", file.display()),
        })?;
        let target = dir.join(name);
        std::fs::copy(file, &target).map_err(|e| GitDepError::Cache {
            message: format!("Failed to copy {} to {}: {e}", file.display(), target.display()),
        })?;
        Ok(Some(target))
    }

    /// Copy every artifact directly inside `packages_dir` into the cache.
    ///
    /// A missing directory harvests nothing. A file that fails to copy is
    /// logged and skipped. Returns the cached paths.
    pub fn harvest(&self, packages_dir: &Path) -> Vec<PathBuf> {
        if self.dir.is_none() {
            return Vec::new();
        }
        let mut cached = Vec::new();
        for file in artifact_files(packages_dir) {
            match self.store(&file) {
                Ok(Some(path)) => {
                    tracing::debug!("Cached {}", path.display());
                    cached.push(path);
                }
                Ok(None) => {}
                Err(e) => tracing::warn!("{e}"),
            }
        }
        cached
    }

    /// Artifacts currently in the cache, sorted by name.
    pub fn entries(&self) -> Vec<PathBuf> {
        self.dir().map(artifact_files).unwrap_or_default()
    }

    /// Remove every cached artifact. Returns how many were removed.
    pub fn clear(&self) -> Result<usize, GitDepError> {
        let entries = self.entries();
        for entry in &entries {
            std::fs::remove_file(entry)?;
        }
        Ok(entries.len())
    }
}

/// Artifact files directly inside `dir`, sorted by path.
pub fn artifact_files(dir: &Path) -> Vec<PathBuf> {
    match find_files(dir, &format!("*.{ARTIFACT_EXTENSION}"), false) {
        Ok(files) => files,
        Err(e) => {
            tracing::warn!("{e}");
            Vec::new()
        }
    }
}
