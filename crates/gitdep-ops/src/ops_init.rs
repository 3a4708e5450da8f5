//! Operation: write a default `GitDepend.json` at the repository root.

use std::path::{Path, PathBuf};

use gitdep_core::manifest::Manifest;
use gitdep_core::{MANIFEST_FILE, REPOSITORY_MARKER};
use gitdep_util::errors::GitDepError;
use gitdep_util::fs::{absolute, find_ancestor_with};

/// Create the default manifest for the repository containing `start`.
/// Returns the path written.
pub fn init(start: &Path) -> miette::Result<PathBuf> {
    let directory = absolute(start).map_err(GitDepError::Io)?;
    let root = find_ancestor_with(&directory, REPOSITORY_MARKER).ok_or_else(|| {
        GitDepError::Resolution {
            message: format!("This is not a git repository: {}", directory.display()),
        }
    })?;

    let path = root.join(MANIFEST_FILE);
    if path.exists() {
        return Err(GitDepError::Generic {
            message: format!("{} already exists", path.display()),
        }
        .into());
    }

    let mut json = Manifest::default().to_json_pretty()?;
    json.push('\n');
    std::fs::write(&path, json).map_err(GitDepError::Io)?;
    Ok(path)
}
