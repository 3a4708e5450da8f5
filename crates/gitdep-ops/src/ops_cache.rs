//! Operation: inspect and empty the artifact cache.

use gitdep_core::artifact::ArtifactDescriptor;
use gitdep_util::errors::GitDepError;

use crate::cache::ArtifactCache;

/// One cached artifact, with its id and version when the name carries them.
pub struct CacheEntry {
    pub name: String,
    pub artifact: Option<ArtifactDescriptor>,
}

/// List the cached artifacts.
pub fn list(cache: &ArtifactCache) -> Vec<CacheEntry> {
    cache
        .entries()
        .into_iter()
        .map(|path| CacheEntry {
            name: path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            artifact: ArtifactDescriptor::from_path(&path),
        })
        .collect()
}

/// Remove every cached artifact.
pub fn clean(cache: &ArtifactCache) -> miette::Result<CleanResult> {
    if cache.dir().is_none() {
        return Err(GitDepError::Cache {
            message: "Artifact cache is unavailable".to_string(),
        }
        .into());
    }
    match cache.clear()? {
        0 => Ok(CleanResult::NothingToClean),
        n => Ok(CleanResult::Cleaned(n)),
    }
}

/// Result of a cache clean.
pub enum CleanResult {
    Cleaned(usize),
    NothingToClean,
}
